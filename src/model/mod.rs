//! Wire-format DTOs shared across the API surface.
//!
//! These types define the exact JSON shape of every response body. Field names
//! are part of the public contract, including legacy spellings kept for
//! compatibility with existing consumers. Domain models are converted to DTOs
//! at the controller boundary via `into_dto()`.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
