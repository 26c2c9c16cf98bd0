use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};
use crate::config::Config;
use crate::models::*;

/// Build the connection pool described by the config
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(config.database_acquire_timeout)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

// Team queries
pub async fn get_all_teams(pool: &SqlitePool) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT team_id, name FROM teams ORDER BY name"#
    )
    .fetch_all(pool)
    .await
}

/// Participants linked to a team, across all seasons
pub async fn get_team_members(pool: &SqlitePool, team_id: i64) -> Result<Vec<TeamMember>, sqlx::Error> {
    sqlx::query_as::<_, TeamMember>(
        r#"SELECT p.nickname, p.country
           FROM team_members tm
           INNER JOIN participants p ON tm.participant_id = p.participant_id
           WHERE tm.team_id = ?
           ORDER BY p.participant_id"#
    )
    .bind(team_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_team(conn: &mut SqliteConnection, name: &str) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(r#"INSERT INTO teams (name) VALUES (?)"#)
        .bind(name)
        .execute(conn)
        .await?;

    Ok(result.last_insert_rowid())
}

pub async fn insert_team_member(
    conn: &mut SqliteConnection,
    participant_id: i64,
    team_id: i64,
    season_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO team_members (participant_id, team_id, season_id) VALUES (?, ?, ?)"#
    )
    .bind(participant_id)
    .bind(team_id)
    .bind(season_id)
    .execute(conn)
    .await?;

    Ok(())
}

// Participant queries
pub async fn get_all_participants(pool: &SqlitePool) -> Result<Vec<Participant>, sqlx::Error> {
    sqlx::query_as::<_, Participant>(
        r#"SELECT participant_id, nickname, birth_date, email, country
           FROM participants
           ORDER BY participant_id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn participant_exists(conn: &mut SqliteConnection, participant_id: i64) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar(
        r#"SELECT participant_id FROM participants WHERE participant_id = ?"#
    )
    .bind(participant_id)
    .fetch_optional(conn)
    .await?;

    Ok(found.is_some())
}

pub async fn insert_participant(
    pool: &SqlitePool,
    nickname: &str,
    birth_date: NaiveDate,
    email: Option<&str>,
    country: Option<&str>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO participants (nickname, birth_date, email, country) VALUES (?, ?, ?, ?)"#
    )
    .bind(nickname)
    .bind(birth_date)
    .bind(email)
    .bind(country)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

// Match queries - one row per team per match, oldest first
pub async fn get_match_rows(pool: &SqlitePool) -> Result<Vec<MatchRow>, sqlx::Error> {
    sqlx::query_as::<_, MatchRow>(
        r#"SELECT
               m.match_id,
               m.played_at AS timestamp,
               m.state,
               t.name AS team_name,
               mt.score
           FROM matches m
           JOIN match_teams mt ON m.match_id = mt.match_id
           JOIN teams t ON mt.team_id = t.team_id
           ORDER BY m.played_at, m.match_id"#
    )
    .fetch_all(pool)
    .await
}
