//! User profile and role.

use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// Account role. Designations ("project_manager", "sales", ...) refine the
/// `Employee` role without changing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    ProjectManager,
    Employee,
}

/// The signed-in user, as returned by the backend at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,

    #[serde(default)]
    pub designation: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Effective project manager: the dedicated role, or an employee whose
    /// designation says so. This is the one place that comparison lives.
    pub fn is_project_manager(&self) -> bool {
        self.role == Role::ProjectManager
            || (self.role == Role::Employee && self.designation.as_deref() == Some("project_manager"))
    }

    pub fn is_sales(&self) -> bool {
        self.designation.as_deref() == Some("sales")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Role, designation: Option<&str>) -> UserProfile {
        UserProfile {
            id: UserId::new("u1"),
            first_name: "Aoi".to_string(),
            last_name: "Sato".to_string(),
            email: "aoi@example.com".to_string(),
            role,
            designation: designation.map(str::to_string),
        }
    }

    #[test]
    fn project_manager_by_role_or_designation() {
        assert!(profile(Role::ProjectManager, None).is_project_manager());
        assert!(profile(Role::Employee, Some("project_manager")).is_project_manager());
        assert!(!profile(Role::Employee, Some("sales")).is_project_manager());
        assert!(!profile(Role::Admin, None).is_project_manager());
    }

    #[test]
    fn role_wire_format() {
        let json = serde_json::to_string(&Role::ProjectManager).unwrap();
        assert_eq!(json, "\"project_manager\"");
    }
}
