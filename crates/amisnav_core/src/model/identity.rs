//! Ephemeral identity card derived from one clan record.
//!
//! # Responsibility
//! - Pair a personal name and maternal lineage name with a chosen clan.
//! - Normalize blank inputs to the fixed display fallbacks.
//!
//! # Invariants
//! - Cards are never persisted; they exist only for display and export.
//! - `unit_name`/`linkage_name` are never blank after construction.

use crate::model::clan::ClanRecord;
use serde::{Deserialize, Serialize};

/// Fallback shown when no personal name was entered.
pub const UNKNOWN_UNIT_NAME: &str = "UNKNOWN";
/// Fallback shown when no maternal lineage name was entered.
pub const UNKNOWN_LINKAGE_NAME: &str = "N/A";

/// User-composed identity summary built from the current store contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityCard {
    /// Personal/natural name (`UNIT_ID` in the export row).
    pub unit_name: String,
    /// Mother's name (`LINKAGE` in the export row).
    pub linkage_name: String,
    /// The chosen clan, copied out of the store at build time.
    pub clan: ClanRecord,
}

impl IdentityCard {
    /// Builds a card, substituting display fallbacks for blank names.
    pub fn new(
        unit_name: impl Into<String>,
        linkage_name: impl Into<String>,
        clan: ClanRecord,
    ) -> Self {
        Self {
            unit_name: fallback_if_blank(unit_name.into(), UNKNOWN_UNIT_NAME),
            linkage_name: fallback_if_blank(linkage_name.into(), UNKNOWN_LINKAGE_NAME),
            clan,
        }
    }

    /// Coordinate string shown on the card and written to the export row.
    ///
    /// Format is `"{lat}, {lon}"` with a literal comma-space separator.
    pub fn coords_display(&self) -> String {
        format!("{}, {}", self.clan.lat, self.clan.lon)
    }
}

fn fallback_if_blank(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::IdentityCard;
    use crate::store::seed_clans;

    #[test]
    fn blank_names_fall_back_to_placeholders() {
        let clan = seed_clans().remove(0);
        let card = IdentityCard::new("", "   ", clan);
        assert_eq!(card.unit_name, "UNKNOWN");
        assert_eq!(card.linkage_name, "N/A");
    }

    #[test]
    fn coords_display_is_comma_space_separated() {
        let clan = seed_clans().remove(0);
        let card = IdentityCard::new("Panay", "Moli", clan);
        assert_eq!(card.coords_display(), "23.931, 121.535");
    }
}
