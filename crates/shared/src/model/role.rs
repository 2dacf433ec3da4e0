use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Moderator,
    Freelancer,
    Client,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Moderator, Role::Freelancer, Role::Client];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Moderator => "MODERATOR",
            Role::Freelancer => "FREELANCER",
            Role::Client => "CLIENT",
        }
    }

    /// Dashboard a user lands on when navigating to `/`.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Admin | Role::Moderator => "/dashboard/Administrator",
            Role::Freelancer => "/dashboard/freelancer",
            Role::Client => "/dashboard/client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names_only() {
        assert_eq!("FREELANCER".parse::<Role>(), Ok(Role::Freelancer));
        assert!("freelancer".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn unknown_role_names_the_input() {
        let err = "GUEST".parse::<Role>().unwrap_err();
        assert_eq!(err, UnknownRole("GUEST".into()));
        assert_eq!(err.to_string(), "unknown role 'GUEST'");
    }

    #[test]
    fn moderators_share_the_admin_dashboard() {
        assert_eq!(Role::Admin.landing_path(), Role::Moderator.landing_path());
        assert_eq!(Role::Client.landing_path(), "/dashboard/client");
    }

    #[test]
    fn serializes_as_upper_case() {
        let json = serde_json::to_string(&Role::Moderator).unwrap();
        assert_eq!(json, "\"MODERATOR\"");
    }
}
