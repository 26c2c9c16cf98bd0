use axum::{
    extract::{rejection::FormRejection, State},
    response::Json,
    Form,
};
use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{CreatedParticipant, NewParticipantForm, Participant};

/// GET /api/participants - List all participants
pub async fn get_participants(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Participant>>, ApiError> {
    let participants = db::get_all_participants(&pool).await?;

    Ok(Json(participants))
}

/// POST /api/participants - Register a participant from form fields
///
/// Form fields:
/// - nickname (required)
/// - birth_date (required, YYYY-MM-DD)
/// - email, country (optional)
pub async fn create_participant(
    State(pool): State<SqlitePool>,
    form: Result<Form<NewParticipantForm>, FormRejection>,
) -> Result<Json<CreatedParticipant>, ApiError> {
    let Form(form) = form.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;

    let birth_date = NaiveDate::parse_from_str(form.birth_date.trim(), "%Y-%m-%d")
        .map_err(|e| ApiError::BadRequest(format!("invalid birth_date {:?}: {}", form.birth_date, e)))?;

    let id = db::insert_participant(
        &pool,
        &form.nickname,
        birth_date,
        form.email.as_deref(),
        form.country.as_deref(),
    )
    .await
    .map_err(|e| {
        tracing::warn!("Failed to insert participant {}: {}", form.nickname, e);
        ApiError::BadRequest(e.to_string())
    })?;

    tracing::info!(participant_id = id, "Participant added");

    Ok(Json(CreatedParticipant {
        message: "Participant added".to_string(),
        id,
    }))
}
