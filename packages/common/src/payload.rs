//! Canonical withdrawal payload and its hash.
//!
//! # Byte Layout (192 bytes total)
//! - Bytes 0-31:    src_chain (uint256, big-endian, left-padded)
//! - Bytes 32-63:   src_account (32 bytes)
//! - Bytes 64-95:   keccak256(token key)
//! - Bytes 96-127:  keccak256(recipient)
//! - Bytes 128-159: amount (uint256, big-endian, left-padded)
//! - Bytes 160-191: src_nonce (uint256, big-endian, left-padded)
//!
//! The hash is what signers attest to on the fast path and what claims commit
//! to on the slow path.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

use crate::asset::AssetInfo;
use crate::hash::{keccak256, u128_slot, u64_slot};

/// Domain tag for "no such deposit" attestations.
pub const DEPOSIT_ABSENT_TAG: &[u8] = b"DEPOSIT_ABSENT";

/// A withdrawal on this chain backed by a deposit on `src_chain`.
#[cw_serde]
pub struct WithdrawPayload {
    /// Source chain identifier
    pub src_chain: u64,
    /// Deposit nonce on the source chain
    pub src_nonce: u64,
    /// Depositor on the source chain (32 bytes, left-padded)
    pub src_account: Binary,
    /// Asset released on this chain
    pub token: AssetInfo,
    /// Recipient address on this chain
    pub recipient: String,
    /// Gross amount (fee is deducted on release)
    pub amount: Uint128,
}

impl WithdrawPayload {
    /// Canonical 32-byte payload hash.
    pub fn hash(&self) -> [u8; 32] {
        let mut data = [0u8; 192];
        data[0..32].copy_from_slice(&u64_slot(self.src_chain));

        // src_account is validated to 32 bytes by the bridge; shorter input is
        // left-padded so the layout stays fixed.
        let account = self.src_account.as_slice();
        let take = account.len().min(32);
        data[64 - take..64].copy_from_slice(&account[account.len() - take..]);

        data[64..96].copy_from_slice(&keccak256(self.token.key().as_bytes()));
        data[96..128].copy_from_slice(&keccak256(self.recipient.as_bytes()));
        data[128..160].copy_from_slice(&u128_slot(self.amount.u128()));
        data[160..192].copy_from_slice(&u64_slot(self.src_nonce));
        keccak256(&data)
    }

    /// Identifies the source-chain deposit this payload spends.
    pub fn deposit_key(&self) -> (u64, u64) {
        (self.src_chain, self.src_nonce)
    }

    /// Digest signers attest to when the deposit does not exist.
    pub fn absence_digest(&self) -> [u8; 32] {
        deposit_absent_digest(self.src_chain, self.src_nonce)
    }
}

/// `keccak256(abi.encode(keccak256("DEPOSIT_ABSENT"), src_chain, src_nonce))`
pub fn deposit_absent_digest(src_chain: u64, src_nonce: u64) -> [u8; 32] {
    let mut data = [0u8; 96];
    data[0..32].copy_from_slice(&keccak256(DEPOSIT_ABSENT_TAG));
    data[32..64].copy_from_slice(&u64_slot(src_chain));
    data[64..96].copy_from_slice(&u64_slot(src_nonce));
    keccak256(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> WithdrawPayload {
        let mut account = [0u8; 32];
        account[12..].copy_from_slice(&[0xAB; 20]);
        WithdrawPayload {
            src_chain: 56,
            src_nonce: 7,
            src_account: Binary::from(account.to_vec()),
            token: AssetInfo::Native {
                denom: "uluna".to_string(),
            },
            recipient: "terra1recipient".to_string(),
            amount: Uint128::new(1_000_000),
        }
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(payload().hash(), payload().hash());
    }

    #[test]
    fn test_hash_binds_every_field() {
        let base = payload().hash();

        let mut p = payload();
        p.src_chain = 1;
        assert_ne!(p.hash(), base);

        let mut p = payload();
        p.src_nonce = 8;
        assert_ne!(p.hash(), base);

        let mut p = payload();
        p.recipient = "terra1other".to_string();
        assert_ne!(p.hash(), base);

        let mut p = payload();
        p.amount = Uint128::new(1_000_001);
        assert_ne!(p.hash(), base);

        let mut p = payload();
        p.token = AssetInfo::Native {
            denom: "uusd".to_string(),
        };
        assert_ne!(p.hash(), base);

        let mut p = payload();
        p.src_account = Binary::from(vec![0u8; 32]);
        assert_ne!(p.hash(), base);
    }

    #[test]
    fn test_deposit_key_ignores_amount() {
        let mut other = payload();
        other.amount = Uint128::new(5);
        assert_eq!(other.deposit_key(), payload().deposit_key());
        assert_ne!(other.hash(), payload().hash());
    }

    #[test]
    fn test_absence_digest_is_distinct_per_deposit() {
        let p = payload();
        assert_eq!(p.absence_digest(), deposit_absent_digest(56, 7));
        assert_ne!(p.absence_digest(), deposit_absent_digest(56, 8));
        assert_ne!(p.absence_digest(), deposit_absent_digest(1, 7));
        assert_ne!(p.absence_digest(), p.hash());
    }
}
