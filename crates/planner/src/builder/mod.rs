//! Transaction plan builders.
//!
//! # Architecture
//!
//! - [`AzoriusTxBuilder`]: plans the full governance-module batch for a new
//!   Azorius DAO (token, strategy, Azorius core, optional claim and
//!   paymaster, Safe wiring).
//! - [`FreezeGuardTxBuilder`]: plans the freeze-voting/freeze-guard pair a
//!   parent DAO attaches to a sub-DAO.
//! - [`TransactionDescriptor`]: one planned transaction; the external
//!   submission flow batches descriptors into a single multisend.
//!
//! Builders populate one [`ModuleSlot`] per deployable module. Slots only
//! move forward (`Unset` → `Predicted`/`Encoded`) and are written at most
//! once: a predicted address is a pure function of the encoded initializer
//! and salt nonce, so re-encoding after prediction would silently change
//! the address every later transaction references.

mod azorius;
mod descriptor;
mod freeze;
mod slot;

pub use azorius::AzoriusTxBuilder;
pub use descriptor::{Operation, PlanStep, TransactionDescriptor};
pub use freeze::FreezeGuardTxBuilder;
pub use slot::{EncodedModule, ModuleSlot};
