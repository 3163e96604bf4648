//! Domain model for clan records and identity cards.
//!
//! # Responsibility
//! - Define the canonical clan record shared by store, geo and export code.
//! - Define the ephemeral identity card derived from one clan record.
//!
//! # Invariants
//! - `ClanRecord::id` is derived from the record name, never user-supplied.
//! - Identity cards are built on demand and never enter the record store.

pub mod clan;
pub mod identity;
