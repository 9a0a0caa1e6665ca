use serde::{Deserialize, Serialize};

/// Role attached to an authenticated account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Account behind the session cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name to show in the navbar
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_admin() {
        let json = r#"{"id":"64f1","email":"ada@shop.test","name":"Ada","role":"admin"}"#;
        let user: CurrentUser = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.display_name(), "Ada");
    }

    #[test]
    fn test_deserialize_without_name() {
        let json = r#"{"id":"64f2","email":"bob@shop.test","role":"user"}"#;
        let user: CurrentUser = serde_json::from_str(json).unwrap();
        assert!(!user.is_admin());
        assert_eq!(user.display_name(), "bob@shop.test");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"{"id":"64f3","email":"eve@shop.test","role":"superuser"}"#;
        assert!(serde_json::from_str::<CurrentUser>(json).is_err());
    }
}
