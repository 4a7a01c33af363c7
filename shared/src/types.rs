use serde::{Deserialize, Serialize};

/// Partition key attribute of the users table.
pub const PARTITION_KEY: &str = "email";

// ========== USER ==========
// Stored in DynamoDB with `email` as the partition key. Missing fields decode
// as empty strings, so a lookup that found nothing yields an all-empty user.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// A fetched user only exists when its key attribute came back populated.
    pub fn exists(&self) -> bool {
        !self.email.is_empty()
    }
}

/// JSON error envelope returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_in_field_order() {
        let user = User::new("alan.oliver@ecs.co.uk", "Alan", "Oliver");
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"email":"alan.oliver@ecs.co.uk","firstName":"Alan","lastName":"Oliver"}"#
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let user: User = serde_json::from_str(r#"{"email":"a@b.co"}"#).unwrap();
        assert_eq!(user, User::new("a@b.co", "", ""));
        assert!(user.exists());
        assert!(!User::default().exists());
    }
}
