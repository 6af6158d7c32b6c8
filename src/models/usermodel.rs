use serde::{Deserialize, Serialize};

/// Role claim attached to every authenticated request by the external
/// identity provider. The core never stores users itself.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Requester,
    Provider,
}

impl UserRole {
    pub fn to_str(&self) -> &str {
        match self {
            UserRole::Requester => "requester",
            UserRole::Provider => "provider",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_json() {
        let json = serde_json::to_string(&UserRole::Provider).unwrap();
        assert_eq!(json, "\"provider\"");
        let role: UserRole = serde_json::from_str("\"requester\"").unwrap();
        assert_eq!(role, UserRole::Requester);
    }

    #[test]
    fn role_to_str() {
        assert_eq!(UserRole::Requester.to_str(), "requester");
        assert_eq!(UserRole::Provider.to_str(), "provider");
    }
}
