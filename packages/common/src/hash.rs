//! Hash computation helpers shared by every contract.
//!
//! All digests are keccak256 so that attestations produced by EVM-style
//! signers (`personal_sign` over a 32-byte message hash) can be checked on
//! this chain without translation.

use cosmwasm_std::{Binary, StdError, StdResult};
use tiny_keccak::{Hasher, Keccak};

/// Prefix applied by EVM wallets before signing a 32-byte message hash.
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// EIP-191 digest of a 32-byte message hash.
///
/// Matches OpenZeppelin's `MessageHashUtils.toEthSignedMessageHash(bytes32)`.
pub fn eth_signed_message_hash(message_hash: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 60];
    data[..28].copy_from_slice(ETH_SIGNED_MESSAGE_PREFIX);
    data[28..].copy_from_slice(message_hash);
    keccak256(&data)
}

/// Derive the 20-byte EVM address from an uncompressed secp256k1 public key
/// (65 bytes, leading 0x04).
pub fn evm_address_from_pubkey(pubkey: &[u8]) -> StdResult<[u8; 20]> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return Err(StdError::generic_err(format!(
            "expected 65-byte uncompressed public key, got {} bytes",
            pubkey.len()
        )));
    }
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Ok(address)
}

/// Parse a 0x-prefixed (or bare) 40-character hex EVM address.
pub fn parse_evm_address(input: &str) -> StdResult<[u8; 20]> {
    let stripped = input.strip_prefix("0x").unwrap_or(input);
    if stripped.len() != 40 {
        return Err(StdError::generic_err(format!(
            "invalid EVM address length: {}",
            input
        )));
    }
    let bytes = hex::decode(stripped)
        .map_err(|e| StdError::generic_err(format!("invalid EVM address {}: {}", input, e)))?;
    let mut address = [0u8; 20];
    address.copy_from_slice(&bytes);
    Ok(address)
}

/// Lowercase 0x-hex rendering of a 20-byte address.
pub fn evm_address_to_hex(address: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(address))
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a 32-byte hash from Binary input.
pub fn parse_bytes32(input: &Binary) -> StdResult<[u8; 32]> {
    input.to_vec().try_into().map_err(|_| {
        StdError::generic_err(format!(
            "Invalid hash length: expected 32 bytes, got {}",
            input.len()
        ))
    })
}

/// Left-pad a u128 into a big-endian uint256 slot.
pub(crate) fn u128_slot(value: u128) -> [u8; 32] {
    let mut slot = [0u8; 32];
    slot[16..].copy_from_slice(&value.to_be_bytes());
    slot
}

/// Left-pad a u64 into a big-endian uint256 slot.
pub(crate) fn u64_slot(value: u64) -> [u8; 32] {
    let mut slot = [0u8; 32];
    slot[24..].copy_from_slice(&value.to_be_bytes());
    slot
}
