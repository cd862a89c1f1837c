use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ParseEnumError, normalize_token};

/// Account approval state managed by the super admin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Pending,
    Accepted,
    Rejected,
    Deactivated,
}

impl AccountStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountStatus::Pending => "PENDING",
            AccountStatus::Accepted => "ACCEPTED",
            AccountStatus::Rejected => "REJECTED",
            AccountStatus::Deactivated => "DEACTIVATED",
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, AccountStatus::Accepted)
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "PENDING" => Ok(AccountStatus::Pending),
            "ACCEPTED" => Ok(AccountStatus::Accepted),
            "REJECTED" => Ok(AccountStatus::Rejected),
            "DEACTIVATED" => Ok(AccountStatus::Deactivated),
            _ => Err(ParseEnumError::new("account status", s)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<Manager>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Employee {
    pub fn manager_id(&self) -> Option<i64> {
        self.manager.as_ref().map(|m| m.id)
    }

    pub fn is_active(&self) -> bool {
        self.status.is_some_and(AccountStatus::is_active)
    }
}

/// Body of `POST /api/employees/addEmployee`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
}

/// Body of `POST /manager/addManager`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewManager {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
}

/// Profile edit submitted from the profile screen. An empty password means
/// "keep the current one" and is left out of the body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "password_unchanged")]
    pub password: Option<String>,
}

fn password_unchanged(password: &Option<String>) -> bool {
    password.as_deref().is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let raw = json!({
            "id": 7,
            "name": "Asha",
            "email": "asha@example.com",
            "status": "ACCEPTED",
            "department": "Ops",
            "manager": { "id": 3, "name": "Ravi", "email": "ravi@example.com", "org": "North" }
        });
        let employee: Employee = serde_json::from_value(raw).unwrap();
        assert_eq!(employee.manager_id(), Some(3));
        assert!(employee.is_active());
        let back = serde_json::to_value(&employee).unwrap();
        assert_eq!(back["department"], "Ops");
        assert_eq!(back["manager"]["org"], "North");
    }

    #[test]
    fn null_manager_is_tolerated() {
        let employee: Employee =
            serde_json::from_value(json!({ "id": 1, "manager": null, "org": null })).unwrap();
        assert!(employee.manager.is_none());
        assert!(employee.name.is_empty());
        assert!(!employee.is_active());
    }

    #[test]
    fn empty_password_is_not_sent() {
        let update = ProfileUpdate {
            name: "Asha".into(),
            password: Some(String::new()),
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "name": "Asha" }));

        let update = ProfileUpdate {
            name: "Asha".into(),
            password: Some("s3cret".into()),
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "name": "Asha", "password": "s3cret" })
        );
    }
}
