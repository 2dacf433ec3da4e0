use crate::model::{AccessClaims, Role};
use serde::{Deserialize, Serialize};

/// The authenticated user as persisted in the `userDetails` cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub uid: String,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_data: Option<AccessClaims>,
}

impl Session {
    pub fn access_token(&self) -> Option<&str> {
        Some(self.access_token.as_str()).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<&str> {
        Some(self.refresh_token.as_str()).filter(|t| !t.is_empty())
    }

    /// The role stored at login. This is not re-derived from the token.
    pub fn stored_role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uses_camel_case_keys() {
        let session = Session {
            uid: "42".into(),
            username: "ada".into(),
            role: "CLIENT".into(),
            access_token: "a".into(),
            refresh_token: "r".into(),
            token_data: None,
        };

        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(
            value,
            json!({
                "uid": "42",
                "username": "ada",
                "role": "CLIENT",
                "accessToken": "a",
                "refreshToken": "r",
            })
        );
    }

    #[test]
    fn missing_tokens_read_as_absent() {
        let session: Session =
            serde_json::from_value(json!({"uid": "1", "username": "u", "role": "ADMIN"})).unwrap();

        assert_eq!(session.access_token(), None);
        assert_eq!(session.refresh_token(), None);
        assert_eq!(session.stored_role(), Some(Role::Admin));
    }
}
