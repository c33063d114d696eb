use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::roster::{Fixture, Jornada, Match, Schedule};

/// Group document stored in persistence and shared across layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupEntity {
    /// Group label, e.g. "A".
    pub id: String,
    /// Team names in display order.
    pub teams: Vec<String>,
}

/// Match document stored in persistence and shared across layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchEntity {
    /// Primary key of the match.
    pub id: Uuid,
    /// Label of the owning group (denormalised on every match).
    pub group: String,
    /// Local team name.
    pub local: String,
    /// Visiting team name.
    pub visiting: String,
    /// Goals scored by the local team, once recorded.
    pub local_score: Option<u32>,
    /// Goals scored by the visiting team, once recorded.
    pub visiting_score: Option<u32>,
    /// Whether the result has been recorded.
    pub played: bool,
    /// Weekday label for the calendar display.
    pub day: Option<String>,
    /// Calendar date, free-form.
    pub date: Option<String>,
    /// Kick-off time, free-form.
    pub time: Option<String>,
    /// Venue name.
    pub venue: Option<String>,
}

/// Calendar entry stored in persistence: one jornada of one group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JornadaEntity {
    /// Label of the owning group.
    pub group: String,
    /// Ordered round label, unique within the group.
    pub label: String,
    /// Fixtures listed for this round.
    pub fixtures: Vec<FixtureEntity>,
}

/// Fixture entry inside a stored jornada.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixtureEntity {
    /// Local team name.
    pub local: String,
    /// Visiting team name.
    pub visiting: String,
}

impl From<MatchEntity> for Match {
    fn from(value: MatchEntity) -> Self {
        Self {
            id: value.id,
            group: value.group,
            local: value.local,
            visiting: value.visiting,
            local_score: value.local_score,
            visiting_score: value.visiting_score,
            played: value.played,
            schedule: Schedule {
                day: value.day,
                date: value.date,
                time: value.time,
                venue: value.venue,
            },
        }
    }
}

impl From<Match> for MatchEntity {
    fn from(value: Match) -> Self {
        Self {
            id: value.id,
            group: value.group,
            local: value.local,
            visiting: value.visiting,
            local_score: value.local_score,
            visiting_score: value.visiting_score,
            played: value.played,
            day: value.schedule.day,
            date: value.schedule.date,
            time: value.schedule.time,
            venue: value.schedule.venue,
        }
    }
}

impl From<FixtureEntity> for Fixture {
    fn from(value: FixtureEntity) -> Self {
        Self {
            local: value.local,
            visiting: value.visiting,
        }
    }
}

impl From<Fixture> for FixtureEntity {
    fn from(value: Fixture) -> Self {
        Self {
            local: value.local,
            visiting: value.visiting,
        }
    }
}

impl From<JornadaEntity> for Jornada {
    fn from(value: JornadaEntity) -> Self {
        Self {
            label: value.label,
            fixtures: value.fixtures.into_iter().map(Into::into).collect(),
        }
    }
}

impl JornadaEntity {
    /// Build the stored representation of a jornada for one group.
    pub fn new(group: &str, jornada: Jornada) -> Self {
        Self {
            group: group.to_owned(),
            label: jornada.label,
            fixtures: jornada.fixtures.into_iter().map(Into::into).collect(),
        }
    }
}
