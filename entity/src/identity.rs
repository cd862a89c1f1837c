use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ParseEnumError, normalize_token};

/// Portal role granted at login.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employee,
    Manager,
    SuperAdmin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Manager => "MANAGER",
            Role::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Human label shown under the user's name in the sidebar.
    pub fn title(self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Manager => "Manager",
            Role::SuperAdmin => "Super Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "EMPLOYEE" => Ok(Role::Employee),
            "MANAGER" => Ok(Role::Manager),
            "SUPER_ADMIN" | "SUPERADMIN" => Ok(Role::SuperAdmin),
            _ => Err(ParseEnumError::new("role", s)),
        }
    }
}

/// Raw body of `POST /auth/login`. The API answers 200 either way and signals
/// failure through `error`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Who is logged in, as confirmed by the API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Identity {
    pub id: i64,
    pub role: Role,
    pub name: String,
}

impl LoginResponse {
    /// Split the response into an identity or the rejection text.
    pub fn into_identity(self) -> Result<Identity, String> {
        if let Some(error) = self.error {
            return Err(error);
        }
        match (self.id, self.role) {
            (Some(id), Some(role)) => Ok(Identity {
                id,
                role,
                name: self.name.unwrap_or_else(|| role.title().to_string()),
            }),
            _ => Err("Invalid credentials.".to_string()),
        }
    }
}
