/// User profile captured during onboarding

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Who the dashboard belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Free-text personal goal shown on the dashboard
    #[serde(default)]
    pub goal: String,
}

impl UserProfile {
    pub fn new(name: String, email: String, goal: String) -> Result<Self, DomainError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::Validation {
                message: "Profile name cannot be empty".to_string(),
            });
        }

        let email = email.trim().to_string();
        if !email.is_empty() && !email.contains('@') {
            return Err(DomainError::Validation {
                message: format!("'{}' is not an email address", email),
            });
        }

        Ok(Self {
            name,
            email,
            goal: goal.trim().to_string(),
        })
    }
}
