//! In-memory clan store implementation.
//!
//! # Responsibility
//! - Provide append/reset/lookup over the session's ordered clan list.
//! - Enforce draft validation before any mutation (no partial insert).
//!
//! # Invariants
//! - List order is insertion order; it carries no meaning beyond grouped
//!   display.
//! - Duplicate names/ids are accepted unless the store was built in
//!   unique-ids mode.

use crate::model::clan::{ClanDraft, ClanRecord, ClanValidationError};
use crate::store::seed::seed_clans;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for append and lookup operations.
#[derive(Debug)]
pub enum StoreError {
    /// Draft failed append-time validation; store left unchanged.
    Validation(ClanValidationError),
    /// No record matches the queried name.
    NotFound(String),
    /// Unique-ids mode rejected a colliding derived id.
    DuplicateId(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(name) => write!(f, "clan not found: `{name}`"),
            Self::DuplicateId(id) => write!(f, "clan id already exists: `{id}`"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<ClanValidationError> for StoreError {
    fn from(value: ClanValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Ordered clan list scoped to one user session.
///
/// The store is an owned value handed to whichever component needs it;
/// there is intentionally no global instance.
#[derive(Debug, Clone)]
pub struct ClanStore {
    records: Vec<ClanRecord>,
    unique_ids: bool,
}

impl ClanStore {
    /// Creates a store initialized with the fixed seed list.
    pub fn new() -> Self {
        Self {
            records: seed_clans(),
            unique_ids: false,
        }
    }

    /// Creates a seeded store that rejects appends with colliding ids.
    ///
    /// The permissive default mirrors the source dataset; this mode exists
    /// for callers that want id-based lookups to stay unambiguous.
    pub fn with_unique_ids() -> Self {
        Self {
            records: seed_clans(),
            unique_ids: true,
        }
    }

    /// Validates and appends one draft to the end of the list.
    ///
    /// Returns the derived record id on success. On any error the store is
    /// left exactly as it was.
    pub fn append(&mut self, draft: ClanDraft) -> StoreResult<String> {
        let record = ClanRecord::from_draft(draft)?;

        if self.unique_ids && self.records.iter().any(|c| c.id == record.id) {
            warn!(
                "event=clan_append module=store status=rejected reason=duplicate_id id={}",
                record.id
            );
            return Err(StoreError::DuplicateId(record.id));
        }

        let id = record.id.clone();
        info!(
            "event=clan_append module=store status=ok id={} total={}",
            id,
            self.records.len() + 1
        );
        self.records.push(record);
        Ok(id)
    }

    /// Replaces the whole list with a fresh seed copy. Idempotent.
    pub fn reset(&mut self) {
        self.records = seed_clans();
        info!(
            "event=store_reset module=store status=ok total={}",
            self.records.len()
        );
    }

    /// Returns the first record whose name matches exactly.
    ///
    /// Unreachable in normal flows (names are always sourced from the
    /// current list) but fails loudly rather than returning a default.
    pub fn find_by_name(&self, name: &str) -> StoreResult<&ClanRecord> {
        self.records.iter().find(|c| c.name == name).ok_or_else(|| {
            warn!("event=clan_lookup module=store status=not_found name={name}");
            StoreError::NotFound(name.to_string())
        })
    }

    /// Full ordered list, read-only.
    pub fn records(&self) -> &[ClanRecord] {
        &self.records
    }

    /// Display names in list order, for selection prompts.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ClanStore {
    fn default() -> Self {
        Self::new()
    }
}
