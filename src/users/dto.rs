use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::users::repo::User;

/// Request body for creating or updating a user.
///
/// On update, an empty password means "keep the stored hash".
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user. The password column never crosses this boundary.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_never_serializes_password() {
        let user = User {
            id: 7,
            email: "some@email.com".into(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(UserResponse::from(user)).expect("serialize");
        let obj = json.as_object().expect("object");
        assert!(!obj.contains_key("password"));
        assert_eq!(obj["id"], 7);
        assert_eq!(obj["email"], "some@email.com");
        assert_eq!(obj["created_at"], "1970-01-01T00:00:00Z");
    }
}
