use crate::comments;
use crate::errors::AppError;
use crate::models::{
    AddProfileRequest, AddTemplateRequest, BestTimeResponse, CommentResponse, DashboardResponse,
    Engagement, LogEngagementRequest, Profile, ReminderRequest, ReminderResponse, TagRequest,
    WeeklyStatsResponse, ENGAGEMENT_TYPES, NICHES, PRIORITIES,
};
use crate::reminders;
use crate::state::AppState;
use crate::stats;
use crate::storage::{persist_collection, ENGAGEMENTS_FILE, PROFILES_FILE, TEMPLATES_FILE};
use crate::tags;
use crate::templates;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn list_profiles(State(state): State<AppState>) -> Json<Vec<Profile>> {
    let data = state.data.lock().await;
    Json(data.profiles.clone())
}

pub async fn add_profile(
    State(state): State<AppState>,
    Json(payload): Json<AddProfileRequest>,
) -> Result<Json<Profile>, AppError> {
    let username = payload.username.trim();
    if username.is_empty() {
        return Err(AppError::bad_request("username must not be empty"));
    }
    if !NICHES.contains(&payload.niche.as_str()) {
        return Err(AppError::bad_request("niche must be street, editorial or commercial"));
    }
    if !PRIORITIES.contains(&payload.priority.as_str()) {
        return Err(AppError::bad_request("priority must be high, medium or low"));
    }

    let profile = Profile {
        id: new_id(),
        username: username.to_string(),
        niche: payload.niche,
        total_engagements: 0,
        last_engagement: None,
        priority: payload.priority,
        tags: Vec::new(),
    };

    let mut data = state.data.lock().await;
    data.profiles.push(profile.clone());
    persist_collection(&state.data_dir, PROFILES_FILE, &data.profiles).await?;

    info!("added profile @{}", profile.username);
    Ok(Json(profile))
}

/// Removing an unknown id is a no-op, and engagements referencing the
/// removed profile are left in place.
pub async fn remove_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Profile>>, AppError> {
    let mut data = state.data.lock().await;
    let before = data.profiles.len();
    data.profiles.retain(|p| p.id != id);
    if data.profiles.len() != before {
        persist_collection(&state.data_dir, PROFILES_FILE, &data.profiles).await?;
    }
    Ok(Json(data.profiles.clone()))
}

pub async fn add_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TagRequest>,
) -> Result<Json<Vec<Profile>>, AppError> {
    let tag = payload.tag.trim();
    if tag.is_empty() {
        return Err(AppError::bad_request("tag must not be empty"));
    }

    let mut data = state.data.lock().await;
    if tags::add_tag(&mut data.profiles, &id, tag) {
        persist_collection(&state.data_dir, PROFILES_FILE, &data.profiles).await?;
    }
    Ok(Json(data.profiles.clone()))
}

pub async fn remove_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TagRequest>,
) -> Result<Json<Vec<Profile>>, AppError> {
    let mut data = state.data.lock().await;
    if tags::remove_tag(&mut data.profiles, &id, &payload.tag) {
        persist_collection(&state.data_dir, PROFILES_FILE, &data.profiles).await?;
    }
    Ok(Json(data.profiles.clone()))
}

pub async fn profile_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WeeklyStatsResponse>, AppError> {
    let data = state.data.lock().await;
    let weeks = stats::weekly_engagements(&data.engagements, &id)
        .map_err(|err| AppError::unprocessable(err.to_string()))?;
    Ok(Json(WeeklyStatsResponse { profile_id: id, weeks }))
}

pub async fn log_engagement(
    State(state): State<AppState>,
    Json(payload): Json<LogEngagementRequest>,
) -> Result<Json<Engagement>, AppError> {
    if !ENGAGEMENT_TYPES.contains(&payload.engagement_type.as_str()) {
        return Err(AppError::bad_request("engagement type must be like, comment, story or dm"));
    }
    if stats::parse_engagement_date(&payload.date).is_err() {
        return Err(AppError::bad_request("date must be an ISO date or datetime"));
    }

    let mut data = state.data.lock().await;
    if !data.profiles.iter().any(|p| p.id == payload.profile_id) {
        return Err(AppError::bad_request("unknown profile id"));
    }

    let engagement = Engagement {
        id: new_id(),
        profile_id: payload.profile_id,
        date: payload.date,
        engagement_type: payload.engagement_type,
    };
    data.engagements.push(engagement.clone());

    if let Some(profile) = data.profiles.iter_mut().find(|p| p.id == engagement.profile_id) {
        profile.total_engagements = profile.total_engagements.saturating_add(1);
        profile.last_engagement = Some(engagement.date.clone());
    }

    persist_collection(&state.data_dir, ENGAGEMENTS_FILE, &data.engagements).await?;
    persist_collection(&state.data_dir, PROFILES_FILE, &data.profiles).await?;

    Ok(Json(engagement))
}

pub async fn list_engagements(State(state): State<AppState>) -> Json<Vec<Engagement>> {
    let data = state.data.lock().await;
    Json(data.engagements.clone())
}

pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, AppError> {
    let data = state.data.lock().await;
    let today = Local::now().date_naive();
    let engagements_this_week = stats::count_in_week(&data.engagements, today)
        .map_err(|err| AppError::unprocessable(err.to_string()))?;

    Ok(Json(DashboardResponse {
        profile_count: data.profiles.len(),
        engagement_count: data.engagements.len(),
        engagements_this_week,
        high_priority_count: data.profiles.iter().filter(|p| p.priority == "high").count(),
    }))
}

pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<String>> {
    let data = state.data.lock().await;
    Json(data.templates.clone())
}

pub async fn add_template(
    State(state): State<AppState>,
    Json(payload): Json<AddTemplateRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    let template = payload.template.trim();
    if template.is_empty() {
        return Err(AppError::bad_request("template must not be empty"));
    }

    let mut data = state.data.lock().await;
    templates::append(&mut data.templates, template.to_string());
    persist_collection(&state.data_dir, TEMPLATES_FILE, &data.templates).await?;
    Ok(Json(data.templates.clone()))
}

pub async fn delete_template(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Vec<String>>, AppError> {
    let mut data = state.data.lock().await;
    if templates::delete_at(&mut data.templates, index) {
        persist_collection(&state.data_dir, TEMPLATES_FILE, &data.templates).await?;
    }
    Ok(Json(data.templates.clone()))
}

#[derive(Debug, Deserialize)]
pub struct CommentQuery {
    pub niche: String,
}

pub async fn generate_comment(
    Query(query): Query<CommentQuery>,
) -> Result<Json<CommentResponse>, AppError> {
    let Some(comment) = comments::generate(&query.niche) else {
        return Err(AppError::bad_request("unknown niche"));
    };
    Ok(Json(CommentResponse {
        niche: query.niche,
        comment: comment.to_string(),
    }))
}

pub async fn tips() -> Json<Vec<&'static str>> {
    Json(comments::ENGAGEMENT_TIPS.to_vec())
}

pub async fn best_times() -> Json<Vec<BestTimeResponse>> {
    Json(
        comments::BEST_TIMES
            .iter()
            .map(|(day, window)| BestTimeResponse {
                day: day.to_string(),
                window: window.to_string(),
            })
            .collect(),
    )
}

pub async fn schedule_reminder(
    State(state): State<AppState>,
    Json(payload): Json<ReminderRequest>,
) -> Result<Json<ReminderResponse>, AppError> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::bad_request("message must not be empty"));
    }
    let Some(target) = reminders::parse_target_time(&payload.time) else {
        return Err(AppError::bad_request("time must be an ISO datetime"));
    };

    let scheduled = reminders::schedule(state.notifier.clone(), message.to_string(), target);
    Ok(Json(ReminderResponse { scheduled }))
}

// Timestamp alone can collide when two records land in the same
// millisecond, so a process-local sequence number is appended.
fn new_id() -> String {
    static ID_SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", Local::now().timestamp_millis(), seq)
}
