use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::{
    roster::{Fixture, Group, Jornada, Match},
    standings::StandingsRow,
};

/// Projection of a group exposed to REST clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct GroupSummary {
    pub id: String,
    pub teams: Vec<String>,
}

/// Projection of a match exposed to REST clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchSummary {
    pub id: Uuid,
    pub group: String,
    pub local: String,
    pub visiting: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visiting_score: Option<u32>,
    pub played: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

/// Projection of a jornada for the calendar screen.
#[derive(Debug, Serialize, ToSchema)]
pub struct JornadaSummary {
    pub label: String,
    pub fixtures: Vec<FixtureSummary>,
}

/// One fixture inside a jornada summary.
#[derive(Debug, Serialize, ToSchema)]
pub struct FixtureSummary {
    pub local: String,
    pub visiting: String,
}

/// One line of the computed standings table.
#[derive(Debug, Serialize, ToSchema)]
pub struct StandingsRowDto {
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl From<(&str, &Group)> for GroupSummary {
    fn from((id, group): (&str, &Group)) -> Self {
        Self {
            id: id.to_owned(),
            teams: group.teams.clone(),
        }
    }
}

impl From<&Match> for MatchSummary {
    fn from(entry: &Match) -> Self {
        Self {
            id: entry.id,
            group: entry.group.clone(),
            local: entry.local.clone(),
            visiting: entry.visiting.clone(),
            local_score: entry.local_score,
            visiting_score: entry.visiting_score,
            played: entry.played,
            day: entry.schedule.day.clone(),
            date: entry.schedule.date.clone(),
            time: entry.schedule.time.clone(),
            venue: entry.schedule.venue.clone(),
        }
    }
}

impl From<&Fixture> for FixtureSummary {
    fn from(fixture: &Fixture) -> Self {
        Self {
            local: fixture.local.clone(),
            visiting: fixture.visiting.clone(),
        }
    }
}

impl From<&Jornada> for JornadaSummary {
    fn from(jornada: &Jornada) -> Self {
        Self {
            label: jornada.label.clone(),
            fixtures: jornada.fixtures.iter().map(Into::into).collect(),
        }
    }
}

impl From<StandingsRow> for StandingsRowDto {
    fn from(row: StandingsRow) -> Self {
        Self {
            team: row.team,
            played: row.played,
            won: row.won,
            drawn: row.drawn,
            lost: row.lost,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
            points: row.points,
        }
    }
}
