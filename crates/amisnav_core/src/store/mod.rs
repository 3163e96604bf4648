//! Session-scoped clan record store.
//!
//! # Responsibility
//! - Hold the ordered clan list for the lifetime of one user session.
//! - Expose append/reset/lookup as the only mutating or querying entry
//!   points; callers receive the store by handle, never via a global.
//!
//! # Invariants
//! - The store is never empty; it starts from the fixed 8-record seed.
//! - Records are never mutated or removed individually; `reset` replaces
//!   the whole collection with a fresh seed copy.

pub mod clan_store;
mod seed;

pub use clan_store::{ClanStore, StoreError, StoreResult};
pub use seed::{seed_clans, SEED_CLAN_COUNT};
