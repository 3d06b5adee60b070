//! Player totals for one team against a specific opponent.

use crate::domain::{PlayerAppearance, TeamName};
use serde::Serialize;
use std::collections::BTreeMap;

/// Summed contributions of one player against the queried opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTotals {
    pub name: String,
    pub position: String,
    pub goals: u32,
    pub assists: u32,
    pub total_points: i64,
}

/// Group the rows where `team` faced `opponent` by (name, position) and sum
/// goals, assists, and points. Ordered by goals descending, then assists
/// descending, then name for determinism. No matching rows is an empty list.
pub fn aggregate_versus(
    players: &[PlayerAppearance],
    team: &TeamName,
    opponent: &TeamName,
) -> Vec<PlayerTotals> {
    let mut grouped: BTreeMap<(String, String), (u32, u32, i64)> = BTreeMap::new();
    for row in players
        .iter()
        .filter(|p| &p.team == team && &p.opponent == opponent)
    {
        let entry = grouped
            .entry((row.name.clone(), row.position.clone()))
            .or_default();
        entry.0 += row.goals;
        entry.1 += row.assists;
        entry.2 += row.total_points;
    }

    let mut totals: Vec<PlayerTotals> = grouped
        .into_iter()
        .map(|((name, position), (goals, assists, total_points))| PlayerTotals {
            name,
            position,
            goals,
            assists,
            total_points,
        })
        .collect();
    totals.sort_by(|a, b| {
        b.goals
            .cmp(&a.goals)
            .then(b.assists.cmp(&a.assists))
            .then(a.name.cmp(&b.name))
    });
    totals
}

/// Leading `n` rows by goals (chart feed).
pub fn top_by_goals(totals: &[PlayerTotals], n: usize) -> Vec<PlayerTotals> {
    let mut ranked = totals.to_vec();
    ranked.sort_by(|a, b| b.goals.cmp(&a.goals).then(a.name.cmp(&b.name)));
    ranked.truncate(n);
    ranked
}

/// Leading `n` rows by assists (chart feed).
pub fn top_by_assists(totals: &[PlayerTotals], n: usize) -> Vec<PlayerTotals> {
    let mut ranked = totals.to_vec();
    ranked.sort_by(|a, b| b.assists.cmp(&a.assists).then(a.name.cmp(&b.name)));
    ranked.truncate(n);
    ranked
}
