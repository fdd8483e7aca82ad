//! Optimistic Verifier Contract
//!
//! Claims are accepted optimistically: a claimant posts a bond against a
//! payload hash, and the claim finalizes once its challenge window passes
//! unchallenged. A challenger who matches the bond moves the claim to
//! `Challenged`; anyone may then ask the fraud proof verifier for a verdict,
//! which invalidates or finalizes the claim and settles both bonds.
//!
//! ## Modules
//! - [`execute`] - claim, challenge and wiring handlers
//! - [`query`] - read-only views of claims and challenges
//! - [`state`] - storage layout

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
