//! Tests for character controller endpoints.


use super::*;
