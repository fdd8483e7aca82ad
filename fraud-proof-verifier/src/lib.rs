//! Fraud Proof Verifier Contract
//!
//! Query-only oracle consulted by the optimistic verifier when a challenge is
//! resolved. It reads the challenged claim and the bridge validator's signer
//! set, and answers `Fraudulent` or `Legitimate`. It never mutates state
//! beyond its own wiring.

pub mod adjudicate;
pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
