//! Business logic services orchestrating repositories.
//!
//! Services sit between controllers and the data layer. They work with domain
//! models, never DTOs, and own the behavior that spans more than a single
//! query, such as the create-or-absence contract on favorites.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
