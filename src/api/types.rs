use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Display status attached to an engagement record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementStatus {
    #[serde(default)]
    pub status_name: String,
}

/// The canonical persisted engagement record.
///
/// An `id` of 0 only ever belongs to a record that has not been saved yet;
/// `Engagement::default()` is the empty unsaved record the edit session
/// starts from. Dates travel as ISO text on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Engagement {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rich_description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub rich_content: String,
    #[serde(default)]
    pub status_id: u32,
    #[serde(default)]
    pub status: EngagementStatus,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub banner_url: String,
}

/// The transient edit-session shape of an engagement.
///
/// This is what a form hands to the session controller. It is never
/// transmitted directly; submit maps it into a request shape first
/// (`from_date` becomes `start_date`, `to_date` becomes `end_date`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngagementForm {
    pub name: String,
    pub description: String,
    pub rich_description: String,
    pub content: String,
    pub rich_content: String,
    pub status_id: u32,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl EngagementForm {
    /// Pre-populate a form from a previously saved record.
    pub fn from_engagement(engagement: &Engagement) -> Self {
        Self {
            name: engagement.name.clone(),
            description: engagement.description.clone(),
            rich_description: engagement.rich_description.clone(),
            content: engagement.content.clone(),
            rich_content: engagement.rich_content.clone(),
            status_id: engagement.status_id,
            from_date: engagement.start_date,
            to_date: engagement.end_date,
        }
    }

    /// Map the form into the create request wire shape.
    pub fn into_create_request(self) -> PostEngagementRequest {
        PostEngagementRequest {
            name: self.name,
            description: self.description,
            rich_description: self.rich_description,
            content: self.content,
            rich_content: self.rich_content,
            status_id: self.status_id,
            start_date: self.from_date,
            end_date: self.to_date,
        }
    }

    /// Map the form into the update request wire shape for an existing record.
    pub fn into_update_request(self, id: u64) -> PutEngagementRequest {
        PutEngagementRequest {
            id,
            name: self.name,
            description: self.description,
            rich_description: self.rich_description,
            content: self.content,
            rich_content: self.rich_content,
            status_id: self.status_id,
            start_date: self.from_date,
            end_date: self.to_date,
        }
    }
}

/// Wire payload for creating an engagement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostEngagementRequest {
    pub name: String,
    pub description: String,
    pub rich_description: String,
    pub content: String,
    pub rich_content: String,
    pub status_id: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Wire payload for updating an engagement; carries the target id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PutEngagementRequest {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub rich_description: String,
    pub content: String,
    pub rich_content: String,
    pub status_id: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
