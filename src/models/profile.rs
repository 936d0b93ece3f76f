use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Tutor,
    Teacher,
    Parent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Tutor => "tutor",
            Role::Teacher => "teacher",
            Role::Parent => "parent",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Student
    }
}

/// The profile document as persisted in the backend. `points` is the
/// stored aggregate the level and badge gates read from; it may lag
/// behind a freshly computed score until the next activity write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default)]
    pub points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_email: Option<String>,
    pub created_at: String,
}

/// Partial update for the profile write path; `None` fields are left
/// untouched by the repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileFieldsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_email: Option<String>,
}

impl ProfileFieldsUpdate {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.grade.is_none()
            && self.avatar_ref.is_none()
            && self.child_email.is_none()
    }
}
