use std::fmt;

use serde::{Deserialize, Serialize};

/// Access-control role recognized by the tracker.
///
/// `Admin` is the bootstrap authority; `Authorizer` is required for every
/// write path. Both are granted to the initializing account and no
/// grant/revoke surface exists after that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Authorizer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Authorizer => write!(f, "authorizer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Authorizer.to_string(), "authorizer");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&Role::Authorizer).unwrap();
        let parsed: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Role::Authorizer);
    }
}
