use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    response::Json,
    Form,
};
use sqlx::sqlite::{SqliteConnection, SqlitePool};
use crate::db;
use crate::error::ApiError;
use crate::models::{CreatedTeam, NewTeam, Team, TeamMember};
use crate::AppState;

/// GET /api/teams - List all teams
pub async fn get_teams(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = db::get_all_teams(&pool).await?;

    Ok(Json(teams))
}

/// GET /api/teams/:id/members - Get team composition
pub async fn get_team_members(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<TeamMember>>, ApiError> {
    let Path(team_id) = path.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;
    let members = db::get_team_members(&pool, team_id).await?;

    Ok(Json(members))
}

/// POST /api/teams - Create a team and link existing participants to it
///
/// Form fields:
/// - name (required)
/// - players (repeatable participant id, e.g. `players=1&players=4`)
///
/// Memberships are recorded under the configured current season. Nothing is
/// written unless every listed participant exists.
pub async fn create_team(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Json<CreatedTeam>, ApiError> {
    let Form(fields) = form.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;
    let new_team = parse_new_team(fields)?;

    let mut tx = state.pool.begin().await?;

    let team_id = match insert_team_with_members(&mut tx, &new_team, state.season_id).await {
        Ok(team_id) => team_id,
        Err(e) => {
            tracing::warn!("Failed to create team {}: {}", new_team.name, e);
            let _ = tx.rollback().await;
            return Err(e);
        }
    };

    tx.commit()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    tracing::info!(team_id, players = new_team.players.len(), "Team created");

    Ok(Json(CreatedTeam {
        message: "Team created and members linked".to_string(),
        team_id,
    }))
}

async fn insert_team_with_members(
    conn: &mut SqliteConnection,
    new_team: &NewTeam,
    season_id: i64,
) -> Result<i64, ApiError> {
    let bad_request = |e: sqlx::Error| ApiError::BadRequest(e.to_string());

    let team_id = db::insert_team(conn, &new_team.name).await.map_err(bad_request)?;

    for &player_id in &new_team.players {
        if !db::participant_exists(conn, player_id).await.map_err(bad_request)? {
            return Err(ApiError::BadRequest(format!("player {} does not exist", player_id)));
        }

        db::insert_team_member(conn, player_id, team_id, season_id)
            .await
            .map_err(bad_request)?;
    }

    Ok(team_id)
}

/// Collect `name` and the repeated `players` keys from a urlencoded body
fn parse_new_team(fields: Vec<(String, String)>) -> Result<NewTeam, ApiError> {
    let mut name = None;
    let mut players = Vec::new();

    for (key, value) in fields {
        match key.as_str() {
            "name" => name = Some(value),
            "players" => {
                let id = value.trim().parse::<i64>().map_err(|_| {
                    ApiError::Unprocessable(format!("players: {:?} is not a valid integer", value))
                })?;
                players.push(id);
            }
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ApiError::Unprocessable("missing field `name`".to_string()))?;

    Ok(NewTeam { name, players })
}
