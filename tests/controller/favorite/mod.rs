//! Tests for favorite controller endpoints.
//!
//! Covers the full favorite lifecycle: creation with already-exists reporting,
//! deletion by entity id, and the error paths for missing entities, missing
//! favorites, and storage failures.

mod delete_favorite_character;
mod delete_favorite_planet;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use super::*;
