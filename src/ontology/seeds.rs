//! Bundled category membership for common Brick 1.1 classes.
//!
//! Used when no ontology file or category table is supplied. The list is a
//! convenience subset; load `Brick.ttl` for full coverage.

use super::Membership;

const BRICK_CLASSES_TOML: &str = include_str!("../../data/brick-classes.toml");

/// Membership lists bundled into the binary.
pub fn brick_membership() -> Membership {
    match toml::from_str(BRICK_CLASSES_TOML) {
        Ok(membership) => membership,
        Err(e) => {
            tracing::warn!("failed to parse bundled class list, using root terms only: {e}");
            Membership::default()
        }
    }
}
