use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::tournament::{GroupSummary, JornadaSummary, MatchSummary, StandingsRowDto};

/// All groups of the tournament with their team lists.
#[derive(Debug, Serialize, ToSchema)]
pub struct GroupsResponse {
    pub groups: Vec<GroupSummary>,
}

/// Computed standings table for one group.
#[derive(Debug, Serialize, ToSchema)]
pub struct StandingsResponse {
    pub group: String,
    pub rows: Vec<StandingsRowDto>,
}

/// Calendar (jornadas) of one group.
#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarResponse {
    pub group: String,
    pub jornadas: Vec<JornadaSummary>,
}

/// Matches of one group in insertion order.
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchesResponse {
    pub group: String,
    pub matches: Vec<MatchSummary>,
}
