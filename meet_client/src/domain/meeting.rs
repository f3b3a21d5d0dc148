use serde::{Deserialize, Serialize};

// Signed-in user as reported by the session endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

/// A meeting held in client memory.
///
/// Instant meetings only carry `id`, `link` and `created_at`; scheduled ones
/// also keep the details they were created with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub link: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Meeting {
    pub fn new(id: impl Into<String>, link: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            link: link.into(),
            created_at: created_at.into(),
            date: None,
            time: None,
            duration: None,
            name: None,
            timezone: None,
        }
    }
}
