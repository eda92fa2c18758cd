use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NICHES: [&str; 3] = ["street", "editorial", "commercial"];
pub const PRIORITIES: [&str; 3] = ["high", "medium", "low"];
pub const ENGAGEMENT_TYPES: [&str; 4] = ["like", "comment", "story", "dm"];

/// A tracked profile. Field names stay camelCase so data files written by
/// earlier versions of the hub keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub username: String,
    pub niche: String,
    #[serde(default)]
    pub total_engagements: u64,
    #[serde(default)]
    pub last_engagement: Option<String>,
    pub priority: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One logged interaction. Immutable once recorded; removing the profile it
/// points at does not remove it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    pub id: String,
    pub profile_id: String,
    pub date: String,
    pub engagement_type: String,
}

/// In-memory mirror of the three persisted collections.
#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub profiles: Vec<Profile>,
    pub engagements: Vec<Engagement>,
    pub templates: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddProfileRequest {
    pub username: String,
    pub niche: String,
    pub priority: String,
}

#[derive(Debug, Deserialize)]
pub struct TagRequest {
    pub tag: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEngagementRequest {
    pub profile_id: String,
    pub date: String,
    pub engagement_type: String,
}

#[derive(Debug, Deserialize)]
pub struct AddTemplateRequest {
    pub template: String,
}

#[derive(Debug, Deserialize)]
pub struct ReminderRequest {
    pub message: String,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct ReminderResponse {
    pub scheduled: bool,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub niche: String,
    pub comment: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStatsResponse {
    pub profile_id: String,
    pub weeks: BTreeMap<String, u64>,
}

#[derive(Debug, Serialize)]
pub struct BestTimeResponse {
    pub day: String,
    pub window: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub profile_count: usize,
    pub engagement_count: usize,
    pub engagements_this_week: u64,
    pub high_priority_count: usize,
}
