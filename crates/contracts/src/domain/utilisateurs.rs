use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Abonne,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Abonne => "abonne",
        }
    }

    pub const ALL: [Role; 2] = [Role::Admin, Role::Abonne];
}

/// A user account as returned by `GET /api/user`. Read-only in this client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utilisateur {
    pub id_utilisateur: i64,
    pub nom: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    /// Subscription expiry date, absent for accounts without one.
    pub abonnement_expires_le: Option<String>,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_values() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        let parsed: Role = serde_json::from_str(r#""abonne""#).unwrap();
        assert_eq!(parsed, Role::Abonne);
    }

    #[test]
    fn optional_fields_default_to_none() {
        let u: Utilisateur = serde_json::from_str(
            r#"{"id_utilisateur":3,"nom":"C. Ndongo","email":"c@exemple.cm",
                "phone":null,"role":"abonne","abonnement_expires_le":null,
                "created_at":"2025-06-01T09:30:00Z"}"#,
        )
        .unwrap();
        assert!(u.phone.is_none());
        assert!(u.abonnement_expires_le.is_none());
    }
}
