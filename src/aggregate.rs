//! Folds the flat match/team join into one nested view per match.

use std::collections::HashMap;

use crate::models::{MatchRow, MatchView};

/// Group rows by `match_id`, keeping first-seen order of matches and input
/// order of teams within each match.
///
/// `timestamp` and `state` are taken from the first row of each match. Later
/// rows that disagree are kept as teams but their match fields are ignored.
pub fn group_match_rows<I>(rows: I) -> Vec<MatchView>
where
    I: IntoIterator<Item = MatchRow>,
{
    let mut views: Vec<MatchView> = Vec::new();
    let mut positions: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let idx = *positions.entry(row.match_id).or_insert_with(|| {
            views.push(row.to_match_view());
            views.len() - 1
        });

        let view = &mut views[idx];
        if view.timestamp != row.timestamp || view.state != row.state {
            tracing::warn!(
                match_id = row.match_id,
                "Match rows disagree on timestamp/state; keeping first seen"
            );
        }
        view.teams.push(row.into_match_team());
    }

    views
}
