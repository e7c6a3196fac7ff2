use crate::achievements::build_achievements;
use crate::errors::AppError;
use crate::models::{
    AchievementsResponse, EntryResponse, GratitudeEntry, JournalQuery, JournalResponse,
    StatsResponse, StreakResponse, SubmitRequest, SubmitResponse, CATEGORIES,
};
use crate::state::AppState;
use crate::stats::{build_stats, journal_view};
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Local;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let journal = state.journal.lock().await;
    let date = Local::now().format("%B %d, %Y").to_string();
    Html(render_index(&date, journal.streak(), journal.entries().len()))
}

pub async fn submit_entry(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    if !(1..=10).contains(&payload.mood) {
        return Err(AppError::bad_request("mood must be between 1 and 10"));
    }
    let tags = normalize_tags(payload.tags)?;

    let mut journal = state.journal.lock().await;
    let entry = journal.append(&payload.text, payload.mood, tags)?;
    let streak = journal.streak();

    info!(
        mood = entry.mood,
        words = entry.word_count,
        streak,
        "gratitude entry recorded"
    );

    Ok(Json(SubmitResponse {
        entry: to_response(&entry),
        streak,
    }))
}

pub async fn get_streak(State(state): State<AppState>) -> Json<StreakResponse> {
    let journal = state.journal.lock().await;
    Json(StreakResponse {
        streak: journal.streak(),
    })
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let journal = state.journal.lock().await;
    Json(build_stats(journal.entries(), journal.streak()))
}

pub async fn get_journal(
    State(state): State<AppState>,
    Query(query): Query<JournalQuery>,
) -> Json<JournalResponse> {
    let journal = state.journal.lock().await;
    let entries = journal_view(journal.entries(), query.mood, query.sort)
        .into_iter()
        .map(to_response)
        .collect();
    Json(JournalResponse { entries })
}

pub async fn get_achievements(State(state): State<AppState>) -> Json<AchievementsResponse> {
    let journal = state.journal.lock().await;
    Json(build_achievements(journal.entries(), journal.streak()))
}

fn normalize_tags(tags: Vec<String>) -> Result<Vec<String>, AppError> {
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        if !CATEGORIES.contains(&tag.as_str()) {
            return Err(AppError::bad_request(format!("unknown category: {tag}")));
        }
        if !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    Ok(normalized)
}

fn to_response(entry: &GratitudeEntry) -> EntryResponse {
    EntryResponse {
        timestamp: entry.timestamp.to_rfc3339(),
        date: entry.timestamp.format("%B %d, %Y").to_string(),
        text: entry.text.clone(),
        mood: entry.mood,
        tags: entry.tags.clone(),
        word_count: entry.word_count,
    }
}
