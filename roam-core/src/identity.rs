use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Role carried by the identity provider's token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Traveler,
    Agency,
}

impl UserRole {
    /// Tour listings and booking statuses are mutated by agencies only.
    pub fn can_manage_bookings(&self) -> bool {
        matches!(self, UserRole::Agency)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Traveler => write!(f, "traveler"),
            UserRole::Agency => write!(f, "agency"),
        }
    }
}

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "traveler" => Ok(UserRole::Traveler),
            "agency" => Ok(UserRole::Agency),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown user role: {0}")]
pub struct UnknownRole(pub String);

/// The identity provider hands the API layer an authenticated user;
/// the core never sees raw credentials.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!("agency".parse::<UserRole>().unwrap(), UserRole::Agency);
        assert_eq!(UserRole::Traveler.to_string(), "traveler");
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_only_agency_manages_bookings() {
        assert!(UserRole::Agency.can_manage_bookings());
        assert!(!UserRole::Traveler.can_manage_bookings());
    }
}
