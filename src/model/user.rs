use serde::{Deserialize, Serialize};

/// User as exposed on the wire. The stored password is never serialized.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}
