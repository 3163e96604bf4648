//! Clan record model and append-time validation.
//!
//! # Responsibility
//! - Define the canonical record for one clan (氏族) lineage.
//! - Derive stable slug ids from clan names.
//! - Validate user-submitted drafts before they reach the store.
//!
//! # Invariants
//! - `id` is the lowercased first whitespace-delimited token of `name`.
//! - `name` and `meaning` are non-blank on every stored record.
//! - `lat`/`lon` are stored as-is; no coordinate range is enforced.

use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Placeholder stored when a draft leaves the survival note blank.
pub const UNDEFINED_SURVIVAL_NOTE: &str = "未記錄 (Undefined)";

/// Canonical record for one clan lineage and its place of origin.
///
/// Records are value objects: once appended to a store they are never
/// mutated in place, only replaced wholesale by a store reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClanRecord {
    /// Slug derived from `name`; duplicates are possible (see store docs).
    pub id: String,
    /// Display name, free text.
    pub name: String,
    /// Short gloss for the name, e.g. `太陽`.
    pub meaning: String,
    /// Free-text adaptive-strategy description. Serialized as `algo` to
    /// match the external schema naming.
    #[serde(rename = "algo")]
    pub survival_note: String,
    /// Free-text place-of-origin name.
    pub origin: String,
    /// Latitude in decimal degrees, unvalidated.
    pub lat: f64,
    /// Longitude in decimal degrees, unvalidated.
    pub lon: f64,
    /// Display glyph, usually a single emoji.
    pub icon: String,
    /// Marker color as a hex string, e.g. `#d97706`.
    pub color: String,
}

impl ClanRecord {
    /// Builds a stored record from a validated draft.
    ///
    /// # Contract
    /// - Returns `ClanValidationError` when `name` or `meaning` is blank;
    ///   no record is produced in that case.
    /// - A blank survival note is replaced by [`UNDEFINED_SURVIVAL_NOTE`].
    pub fn from_draft(draft: ClanDraft) -> Result<Self, ClanValidationError> {
        draft.validate()?;

        let survival_note = if draft.survival_note.trim().is_empty() {
            UNDEFINED_SURVIVAL_NOTE.to_string()
        } else {
            draft.survival_note
        };

        Ok(Self {
            id: derive_clan_id(&draft.name),
            name: draft.name,
            meaning: draft.meaning,
            survival_note,
            origin: draft.origin,
            lat: draft.lat,
            lon: draft.lon,
            icon: draft.icon,
            color: draft.color,
        })
    }

    /// Returns the clan's place of origin as a geo point.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// User-submitted input for appending one clan record.
///
/// Carries every stored field except `id`, which is always derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClanDraft {
    pub name: String,
    pub meaning: String,
    pub survival_note: String,
    pub origin: String,
    pub lat: f64,
    pub lon: f64,
    pub icon: String,
    pub color: String,
}

impl ClanDraft {
    /// Validates append-time invariants.
    ///
    /// Blank means empty after trimming; a whitespace-only name would
    /// otherwise produce an empty derived id.
    pub fn validate(&self) -> Result<(), ClanValidationError> {
        if self.name.trim().is_empty() {
            return Err(ClanValidationError::EmptyName);
        }
        if self.meaning.trim().is_empty() {
            return Err(ClanValidationError::EmptyMeaning);
        }
        Ok(())
    }
}

/// Validation failure for a submitted clan draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClanValidationError {
    /// `name` is empty or whitespace-only.
    EmptyName,
    /// `meaning` is empty or whitespace-only.
    EmptyMeaning,
}

impl Display for ClanValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "clan name must not be empty"),
            Self::EmptyMeaning => write!(f, "clan meaning must not be empty"),
        }
    }
}

impl Error for ClanValidationError {}

/// Derives the slug id for a clan name.
///
/// Takes the first whitespace-delimited token of the name, lowercased.
/// Returns an empty string for a blank name; callers validate first.
pub fn derive_clan_id(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::derive_clan_id;

    #[test]
    fn derive_clan_id_uses_first_token_lowercased() {
        assert_eq!(derive_clan_id("Raranges"), "raranges");
        assert_eq!(derive_clan_id("Monari' 茅草"), "monari'");
        assert_eq!(derive_clan_id("  Pacidal  "), "pacidal");
    }

    #[test]
    fn derive_clan_id_on_blank_name_is_empty() {
        assert_eq!(derive_clan_id("   "), "");
    }
}
