//! The head-to-head pipeline: filter, classify, tally, recent form.
//!
//! Every function is pure over its inputs; the lookback anchor year is passed
//! in explicitly so that nothing here reads the clock.

use crate::domain::{
    HeadToHeadQuery, MatchLog, MatchRecord, MatchResult, Outcome, ResultFilter, TeamName,
    WinningParty,
};
use crate::engine::{ClassifiedMatch, HeadToHeadReport, Tally};
use chrono::{Datelike, NaiveDate, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("data integrity: match on {date} ({home} vs {away}) names neither queried team as winner")]
    DataIntegrity {
        date: NaiveDate,
        home: TeamName,
        away: TeamName,
    },
}

/// How the lookback window is anchored.
///
/// `WallClock` reproduces the source behavior (results shift as real time
/// passes even on a static dataset); `LatestMatch` pins the window to the
/// dataset's most recent match instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookbackAnchor {
    WallClock,
    LatestMatch,
}

/// Resolve the anchor year for a lookback window. A `LatestMatch` anchor on
/// an empty log falls back to the wall clock.
pub fn anchor_year(log: &MatchLog, anchor: LookbackAnchor) -> i32 {
    match anchor {
        LookbackAnchor::WallClock => Utc::now().year(),
        LookbackAnchor::LatestMatch => log
            .latest_date()
            .map(|d| d.year())
            .unwrap_or_else(|| Utc::now().year()),
    }
}

/// Select the matches played between `team_a` and `team_b` (either home/away
/// assignment) whose year falls inside the lookback window, newest-first.
///
/// The sort is stable, so records sharing a date keep their original order.
/// Symmetric in the two teams: swapping them yields the identical sequence.
pub fn filter_head_to_head(
    log: &MatchLog,
    team_a: &TeamName,
    team_b: &TeamName,
    years: i32,
    anchor_year: i32,
) -> Vec<MatchRecord> {
    let start_year = anchor_year - years;
    let mut subset: Vec<MatchRecord> = log
        .records()
        .iter()
        .filter(|r| {
            let pair_matches = (&r.home_team == team_a && &r.away_team == team_b)
                || (&r.home_team == team_b && &r.away_team == team_a);
            pair_matches && r.date.year() >= start_year
        })
        .cloned()
        .collect();
    subset.sort_by(|x, y| y.date.cmp(&x.date));
    subset
}

/// Which of the two queried teams won this match.
///
/// Draw rows classify as `Draw`. Otherwise the queried team sitting on the
/// winning side is the winner; by construction of the head-to-head filter
/// exactly one of them does. A row where neither matches carries a malformed
/// result code or team name and is reported as a data-integrity failure.
pub fn classify_winner(
    record: &MatchRecord,
    team_a: &TeamName,
    team_b: &TeamName,
) -> Result<WinningParty, EngineError> {
    let winning_side = match record.result {
        MatchResult::Draw => return Ok(WinningParty::Draw),
        MatchResult::HomeWin => &record.home_team,
        MatchResult::AwayWin => &record.away_team,
    };
    if winning_side == team_a {
        Ok(WinningParty::TeamA)
    } else if winning_side == team_b {
        Ok(WinningParty::TeamB)
    } else {
        Err(EngineError::DataIntegrity {
            date: record.date,
            home: record.home_team.clone(),
            away: record.away_team.clone(),
        })
    }
}

/// Classify each row, skipping rows that fail integrity with a warning.
/// Messy historical data loses a row rather than the whole query.
fn classify_subset(
    subset: &[MatchRecord],
    team_a: &TeamName,
    team_b: &TeamName,
) -> Vec<ClassifiedMatch> {
    subset
        .iter()
        .filter_map(|record| match classify_winner(record, team_a, team_b) {
            Ok(winner) => Some(ClassifiedMatch {
                record: record.clone(),
                winner,
            }),
            Err(e) => {
                tracing::warn!("skipping unclassifiable match: {}", e);
                None
            }
        })
        .collect()
}

/// Count wins for each team and draws across the subset.
///
/// An empty subset tallies to zeros. For well-formed data,
/// `wins_a + wins_b + draws` equals the subset length.
pub fn compute_stats(subset: &[MatchRecord], team_a: &TeamName, team_b: &TeamName) -> Tally {
    let mut tally = Tally::default();
    for classified in classify_subset(subset, team_a, team_b) {
        match classified.winner {
            WinningParty::TeamA => tally.wins_a += 1,
            WinningParty::TeamB => tally.wins_b += 1,
            WinningParty::Draw => tally.draws += 1,
        }
    }
    tally
}

/// Outcome sequences for both teams over the first `limit` rows of the
/// already-newest-first subset. No re-sort happens here.
///
/// The two sequences have equal length and complementary outcomes at every
/// index: a draw is a draw for both, otherwise the winner's `Win` pairs with
/// the other side's `Loss`.
pub fn recent_form(
    subset: &[MatchRecord],
    team_a: &TeamName,
    team_b: &TeamName,
    limit: usize,
) -> (Vec<Outcome>, Vec<Outcome>) {
    let mut form_a = Vec::new();
    let mut form_b = Vec::new();
    for classified in classify_subset(subset, team_a, team_b) {
        if form_a.len() == limit {
            break;
        }
        let outcome_a = match classified.winner {
            WinningParty::TeamA => Outcome::Win,
            WinningParty::TeamB => Outcome::Loss,
            WinningParty::Draw => Outcome::Draw,
        };
        form_a.push(outcome_a);
        form_b.push(outcome_a.complement());
    }
    (form_a, form_b)
}

/// Narrow the subset to rows whose winning party matches the filter.
/// `All` is the identity transform; no matches is an empty sequence, not an
/// error.
pub fn apply_result_filter(
    subset: &[MatchRecord],
    filter: ResultFilter,
    team_a: &TeamName,
    team_b: &TeamName,
) -> Vec<MatchRecord> {
    let wanted = match filter {
        ResultFilter::All => return subset.to_vec(),
        ResultFilter::TeamAWin => WinningParty::TeamA,
        ResultFilter::TeamBWin => WinningParty::TeamB,
        ResultFilter::Draw => WinningParty::Draw,
    };
    subset
        .iter()
        .filter(|r| classify_winner(r, team_a, team_b) == Ok(wanted))
        .cloned()
        .collect()
}

/// Run a full head-to-head query against the log.
///
/// Validates the query (distinct teams, both present in the log), then
/// filters, classifies, tallies, and builds the form sequences. The result
/// filter narrows only the returned match list; the tally and form always
/// reflect the whole head-to-head subset.
pub fn run_query(
    log: &MatchLog,
    query: &HeadToHeadQuery,
    anchor: LookbackAnchor,
) -> Result<HeadToHeadReport, EngineError> {
    if query.team_a == query.team_b {
        return Err(EngineError::InvalidQuery(
            "the two teams must differ".to_string(),
        ));
    }
    for team in [&query.team_a, &query.team_b] {
        if !log.contains_team(team) {
            return Err(EngineError::InvalidQuery(format!(
                "unknown team: {}",
                team
            )));
        }
    }

    let year = anchor_year(log, anchor);
    let subset = filter_head_to_head(log, &query.team_a, &query.team_b, query.years, year);

    let tally = compute_stats(&subset, &query.team_a, &query.team_b);
    let (form_a, form_b) = recent_form(&subset, &query.team_a, &query.team_b, query.form_limit);
    let listed = apply_result_filter(&subset, query.result_filter, &query.team_a, &query.team_b);
    let matches = classify_subset(&listed, &query.team_a, &query.team_b);

    Ok(HeadToHeadReport {
        team_a: query.team_a.clone(),
        team_b: query.team_b.clone(),
        cutoff_year: year - query.years,
        tally,
        matches,
        form_a,
        form_b,
    })
}
