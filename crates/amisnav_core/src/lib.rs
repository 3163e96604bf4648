//! Core domain logic for the Amis clan roots navigator.
//! This crate is the single source of truth for record-store and
//! geo-calculation invariants; view layers stay logic-free.

pub mod export;
pub mod geo;
pub mod logging;
pub mod model;
pub mod store;

pub use export::{
    identity_csv_file_name, parse_identity_csv, render_identity_csv, save_identity_csv,
    ExportError, IdentityCsvRow, IDENTITY_CSV_HEADER,
};
pub use geo::{
    distance_km, estimate_walk_time, sample_route_status, walking_directions_url, GeoPoint,
    RouteStatus, WalkTimeEstimate, CANGKANG_ORIGIN, DEFAULT_WALK_SPEED_KMH,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::clan::{derive_clan_id, ClanDraft, ClanRecord, ClanValidationError};
pub use model::identity::IdentityCard;
pub use store::{seed_clans, ClanStore, StoreError, StoreResult, SEED_CLAN_COUNT};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
