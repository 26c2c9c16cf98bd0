use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;
use crate::aggregate::group_match_rows;
use crate::db;
use crate::error::ApiError;
use crate::models::MatchView;

/// GET /api/matches - All matches with their teams and scores, oldest first
pub async fn get_matches(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<MatchView>>, ApiError> {
    let rows = db::get_match_rows(&pool).await?;

    Ok(Json(group_match_rows(rows)))
}
