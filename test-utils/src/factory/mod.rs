//! Factory methods for creating test data.
//!
//! This module provides factory builders and shorthand helpers for inserting
//! entities with sensible defaults, reducing boilerplate in tests. Each factory
//! supports customization through a builder pattern.

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;
