//! Standings computation. A pure function over a roster snapshot: no state
//! of its own, recomputed from scratch on every call so the table can never
//! drift from the underlying match data.

use std::collections::HashMap;

use crate::state::roster::Match;

/// Points awarded for a win.
const WIN_POINTS: u32 = 3;
/// Points awarded to each side of a draw.
const DRAW_POINTS: u32 = 1;

/// Aggregated win/draw/loss/goal/point statistics for one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    /// Team name as listed in the group.
    pub team: String,
    /// Matches counted for this team.
    pub played: u32,
    /// Wins.
    pub won: u32,
    /// Draws.
    pub drawn: u32,
    /// Losses.
    pub lost: u32,
    /// Goals scored.
    pub goals_for: u32,
    /// Goals conceded.
    pub goals_against: u32,
    /// Derived points total: 3 per win, 1 per draw.
    pub points: u32,
}

impl StandingsRow {
    fn zeroed(team: String) -> Self {
        Self {
            team,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }
}

/// Compute the ranked table for one group.
///
/// Only qualifying matches contribute: same group, marked played, both scores
/// recorded. Everything else is silently excluded; a match referencing a team
/// absent from `teams` still contributes to the side that is present.
///
/// Ordering is points descending, then goals-for descending, then the input
/// team order (stable sort). Goal difference and head-to-head are
/// intentionally not part of the ranking rule.
///
/// Callers are expected to pass unique team names; duplicates are not
/// deduplicated and only the first occurrence accumulates statistics.
pub fn compute_standings<'a, I>(group: &str, teams: &[String], matches: I) -> Vec<StandingsRow>
where
    I: IntoIterator<Item = &'a Match>,
{
    let mut rows: Vec<StandingsRow> = teams
        .iter()
        .map(|team| StandingsRow::zeroed(team.clone()))
        .collect();

    let mut index: HashMap<&str, usize> = HashMap::with_capacity(teams.len());
    for (position, team) in teams.iter().enumerate() {
        index.entry(team.as_str()).or_insert(position);
    }

    for entry in matches {
        if entry.group != group || !entry.played {
            continue;
        }
        let (Some(local_goals), Some(visiting_goals)) = (entry.local_score, entry.visiting_score)
        else {
            continue;
        };

        if let Some(&position) = index.get(entry.local.as_str()) {
            let row = &mut rows[position];
            row.played += 1;
            row.goals_for += local_goals;
            row.goals_against += visiting_goals;
            if local_goals > visiting_goals {
                row.won += 1;
                row.points += WIN_POINTS;
            } else if local_goals < visiting_goals {
                row.lost += 1;
            } else {
                row.drawn += 1;
                row.points += DRAW_POINTS;
            }
        }

        if let Some(&position) = index.get(entry.visiting.as_str()) {
            let row = &mut rows[position];
            row.played += 1;
            row.goals_for += visiting_goals;
            row.goals_against += local_goals;
            if visiting_goals > local_goals {
                row.won += 1;
                row.points += WIN_POINTS;
            } else if visiting_goals < local_goals {
                row.lost += 1;
            } else {
                row.drawn += 1;
                row.points += DRAW_POINTS;
            }
        }
    }

    // Vec::sort_by is stable, so teams tied on both keys keep their input order.
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goals_for.cmp(&a.goals_for))
    });
    rows
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::state::roster::Schedule;

    fn played(group: &str, local: &str, visiting: &str, score: (u32, u32)) -> Match {
        Match {
            id: Uuid::new_v4(),
            group: group.into(),
            local: local.into(),
            visiting: visiting.into(),
            local_score: Some(score.0),
            visiting_score: Some(score.1),
            played: true,
            schedule: Schedule::default(),
        }
    }

    fn pending(group: &str, local: &str, visiting: &str) -> Match {
        Match {
            id: Uuid::new_v4(),
            group: group.into(),
            local: local.into(),
            visiting: visiting.into(),
            local_score: None,
            visiting_score: None,
            played: false,
            schedule: Schedule::default(),
        }
    }

    fn teams(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn empty_team_list_yields_empty_table() {
        let matches = [played("A", "X", "Y", (1, 0))];
        assert!(compute_standings("A", &[], matches.iter()).is_empty());
    }

    #[test]
    fn zero_matches_yields_zeroed_rows_in_input_order() {
        let rows = compute_standings("A", &teams(&["X", "Y", "Z"]), []);
        assert_eq!(rows.len(), 3);
        for (row, expected) in rows.iter().zip(["X", "Y", "Z"]) {
            assert_eq!(row.team, expected);
            assert_eq!(
                (row.played, row.won, row.drawn, row.lost, row.points),
                (0, 0, 0, 0, 0)
            );
        }
    }

    #[test]
    fn round_robin_table_matches_hand_computation() {
        let teams = teams(&["X", "Y", "Z"]);
        let matches = [
            played("A", "X", "Y", (2, 1)),
            played("A", "Y", "Z", (0, 0)),
            played("A", "Z", "X", (1, 3)),
        ];

        let rows = compute_standings("A", &teams, matches.iter());

        assert_eq!(rows[0].team, "X");
        assert_eq!(
            (rows[0].played, rows[0].won, rows[0].drawn, rows[0].lost),
            (2, 2, 0, 0)
        );
        assert_eq!((rows[0].goals_for, rows[0].goals_against), (5, 2));
        assert_eq!(rows[0].points, 6);

        // Y and Z are tied on points (1) and goals-for (1); stable sort keeps
        // the input order Y before Z.
        assert_eq!(rows[1].team, "Y");
        assert_eq!((rows[1].goals_for, rows[1].goals_against), (1, 2));
        assert_eq!(rows[1].points, 1);

        assert_eq!(rows[2].team, "Z");
        assert_eq!((rows[2].goals_for, rows[2].goals_against), (1, 3));
        assert_eq!(rows[2].points, 1);
    }

    #[test]
    fn pending_match_contributes_nothing() {
        let teams = teams(&["X", "Y"]);
        let matches = [pending("A", "X", "Y")];
        let rows = compute_standings("A", &teams, matches.iter());
        assert!(rows.iter().all(|row| row.played == 0 && row.points == 0));
    }

    #[test]
    fn played_flag_without_scores_is_excluded() {
        let teams = teams(&["X", "Y"]);
        let mut entry = pending("A", "X", "Y");
        entry.played = true;
        let rows = compute_standings("A", &teams, [&entry]);
        assert!(rows.iter().all(|row| row.played == 0));
    }

    #[test]
    fn other_groups_are_filtered_out() {
        let teams = teams(&["X", "Y"]);
        let matches = [played("B", "X", "Y", (4, 0))];
        let rows = compute_standings("A", &teams, matches.iter());
        assert!(rows.iter().all(|row| row.played == 0));
    }

    #[test]
    fn dangling_reference_contributes_to_present_side_only() {
        let teams = teams(&["X"]);
        let matches = [played("A", "X", "GHOST", (2, 2))];
        let rows = compute_standings("A", &teams, matches.iter());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].played, 1);
        assert_eq!(rows[0].drawn, 1);
        assert_eq!(rows[0].points, 1);
        assert_eq!((rows[0].goals_for, rows[0].goals_against), (2, 2));
    }

    #[test]
    fn tie_break_uses_goals_for_not_goal_difference() {
        // Y has the better goal difference, X the higher goals-for. The rule
        // ranks X first; goal difference never enters the comparison.
        let teams = teams(&["Y", "X"]);
        let matches = [
            played("A", "X", "GHOST1", (5, 4)),
            played("A", "Y", "GHOST2", (1, 0)),
        ];
        let rows = compute_standings("A", &teams, matches.iter());
        assert_eq!(rows[0].team, "X");
        assert_eq!(rows[1].team, "Y");
        assert_eq!(rows[0].points, rows[1].points);
    }

    #[test]
    fn result_is_independent_of_match_ordering() {
        let teams = teams(&["X", "Y", "Z"]);
        let mut matches = vec![
            played("A", "X", "Y", (2, 1)),
            played("A", "Y", "Z", (0, 0)),
            played("A", "Z", "X", (1, 3)),
        ];

        let forward = compute_standings("A", &teams, matches.iter());
        matches.reverse();
        let backward = compute_standings("A", &teams, matches.iter());
        assert_eq!(forward, backward);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let teams = teams(&["X", "Y"]);
        let matches = [played("A", "X", "Y", (3, 1))];
        let first = compute_standings("A", &teams, matches.iter());
        let second = compute_standings("A", &teams, matches.iter());
        assert_eq!(first, second);
    }

    #[test]
    fn points_law_and_conservation_hold() {
        let teams = teams(&["X", "Y", "Z", "W"]);
        let matches = [
            played("A", "X", "Y", (2, 2)),
            played("A", "Z", "W", (1, 0)),
            played("A", "X", "Z", (0, 3)),
            pending("A", "Y", "W"),
        ];

        let rows = compute_standings("A", &teams, matches.iter());
        for row in &rows {
            assert_eq!(row.points, 3 * row.won + row.drawn);
        }

        let total_played: u32 = rows.iter().map(|row| row.played).sum();
        // Three qualifying matches, two participants each.
        assert_eq!(total_played, 6);
    }

    #[test]
    fn duplicate_team_names_stay_deterministic() {
        // Not a supported input, but the engine must not panic and must give
        // the same answer every time: only the first occurrence accumulates.
        let teams = teams(&["X", "X", "Y"]);
        let matches = [played("A", "X", "Y", (1, 0))];

        let first = compute_standings("A", &teams, matches.iter());
        let second = compute_standings("A", &teams, matches.iter());
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(first.iter().filter(|row| row.played > 0).count(), 2);
    }
}
