use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Team info from teams table
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub team_id: i64,
    pub name: String,
}

/// Participant row from participants table
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Participant {
    pub participant_id: i64,
    pub nickname: String,
    pub birth_date: NaiveDate,
    pub email: Option<String>,
    pub country: Option<String>,
}

/// Member of a team, as listed on the team composition page
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamMember {
    pub nickname: String,
    pub country: Option<String>,
}

/// One row of the match/team join: a single team's line in a single match
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MatchRow {
    pub match_id: i64,
    pub timestamp: NaiveDateTime,
    pub state: String,
    pub team_name: String,
    pub score: Option<i64>,
}

/// A team's entry inside a match view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTeam {
    pub name: String,
    pub score: Option<i64>,
}

/// Match with all of its teams, as returned by GET /api/matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
    pub match_id: i64,
    pub timestamp: NaiveDateTime,
    pub state: String,
    pub teams: Vec<MatchTeam>,
}

impl MatchRow {
    /// Start a view for this row's match, without any team yet
    pub fn to_match_view(&self) -> MatchView {
        MatchView {
            match_id: self.match_id,
            timestamp: self.timestamp,
            state: self.state.clone(),
            teams: Vec::new(),
        }
    }

    pub fn into_match_team(self) -> MatchTeam {
        MatchTeam {
            name: self.team_name,
            score: self.score,
        }
    }
}

/// Form body for POST /api/participants
#[derive(Debug, Deserialize)]
pub struct NewParticipantForm {
    pub nickname: String,
    pub birth_date: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Validated team creation request, built from the repeated-key form body
#[derive(Debug, Clone, PartialEq)]
pub struct NewTeam {
    pub name: String,
    pub players: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedParticipant {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedTeam {
    pub message: String,
    pub team_id: i64,
}
