//! Service helpers that expose read-only projections of the tournament.

use crate::{
    dto::public::{CalendarResponse, GroupsResponse, MatchesResponse, StandingsResponse},
    error::ServiceError,
    state::{SharedState, standings::compute_standings},
};

/// Return every group with its team list, in display order.
pub async fn list_groups(state: &SharedState) -> Result<GroupsResponse, ServiceError> {
    let roster = state.roster().read().await;
    let groups = roster
        .groups()
        .iter()
        .map(|(id, group)| (id.as_str(), group).into())
        .collect();
    Ok(GroupsResponse { groups })
}

/// Compute the standings table for one group from the current snapshot.
///
/// The table is recomputed on every call; it is never stored, so it cannot
/// drift from the match data.
pub async fn get_standings(
    state: &SharedState,
    group: String,
) -> Result<StandingsResponse, ServiceError> {
    let roster = state.roster().read().await;
    let entry = roster
        .group(&group)
        .ok_or_else(|| ServiceError::NotFound(format!("group `{group}` not found")))?;

    let rows = compute_standings(&group, &entry.teams, roster.matches())
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(StandingsResponse { group, rows })
}

/// Return the calendar (jornadas) of one group.
pub async fn get_calendar(
    state: &SharedState,
    group: String,
) -> Result<CalendarResponse, ServiceError> {
    let roster = state.roster().read().await;
    let entry = roster
        .group(&group)
        .ok_or_else(|| ServiceError::NotFound(format!("group `{group}` not found")))?;

    let jornadas = entry.jornadas.iter().map(Into::into).collect();
    Ok(CalendarResponse { group, jornadas })
}

/// Return the matches of one group in insertion order.
pub async fn list_matches(
    state: &SharedState,
    group: String,
) -> Result<MatchesResponse, ServiceError> {
    let roster = state.roster().read().await;
    if roster.group(&group).is_none() {
        return Err(ServiceError::NotFound(format!("group `{group}` not found")));
    }

    let matches = roster.matches_in_group(&group).map(Into::into).collect();
    Ok(MatchesResponse { group, matches })
}
