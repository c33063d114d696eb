//! Mutating operations on the tournament, gated behind an [`Access`]
//! capability resolved by the HTTP layer.
//!
//! Every mutation follows the same write-through shape: obtain the store
//! first (so degraded mode fails fast, before any in-memory change), apply
//! the change to the roster, then persist the affected document.

use tracing::info;
use uuid::Uuid;

use crate::{
    dao::models::{GroupEntity, JornadaEntity, MatchEntity},
    dto::{
        admin::{
            CreateGroupRequest, CreateJornadaRequest, CreateTeamRequest, MatchRequest,
            RecordScoreRequest, RenameTeamRequest,
        },
        tournament::{GroupSummary, JornadaSummary, MatchSummary},
    },
    error::ServiceError,
    state::{
        SharedState,
        roster::{Access, Fixture, Jornada, MatchDraft, Schedule},
    },
};

/// Create a new empty group.
pub async fn create_group(
    state: &SharedState,
    access: Access,
    request: CreateGroupRequest,
) -> Result<GroupSummary, ServiceError> {
    let store = state.require_store().await?;
    let (summary, entity) = {
        let mut roster = state.roster().write().await;
        let group = roster.add_group(access, &request.id)?;
        (
            GroupSummary::from((request.id.as_str(), group)),
            GroupEntity {
                id: request.id.clone(),
                teams: group.teams.clone(),
            },
        )
    };
    store.save_group(entity).await?;
    info!(group = %request.id, "group created");
    Ok(summary)
}

/// Delete a group along with its calendar documents. Matches that reference
/// the removed teams are kept and left dangling.
pub async fn delete_group(
    state: &SharedState,
    access: Access,
    id: String,
) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    let removed = {
        let mut roster = state.roster().write().await;
        roster.remove_group(access, &id)?
    };
    store.delete_group(id.clone()).await?;
    for jornada in removed.jornadas {
        store.delete_jornada(id.clone(), jornada.label).await?;
    }
    info!(group = %id, "group deleted");
    Ok(())
}

/// Append a team to a group.
pub async fn add_team(
    state: &SharedState,
    access: Access,
    group: String,
    request: CreateTeamRequest,
) -> Result<GroupSummary, ServiceError> {
    let store = state.require_store().await?;
    let (summary, entity) = {
        let mut roster = state.roster().write().await;
        roster.add_team(access, &group, &request.name)?;
        snapshot_group(&roster, &group)?
    };
    store.save_group(entity).await?;
    Ok(summary)
}

/// Rename a team in place. Matches keep the old name on purpose; the
/// administrator re-schedules them if the rename matters there.
pub async fn rename_team(
    state: &SharedState,
    access: Access,
    group: String,
    old_name: String,
    request: RenameTeamRequest,
) -> Result<GroupSummary, ServiceError> {
    let store = state.require_store().await?;
    let (summary, entity) = {
        let mut roster = state.roster().write().await;
        roster.rename_team(access, &group, &old_name, &request.name)?;
        snapshot_group(&roster, &group)?
    };
    store.save_group(entity).await?;
    info!(group = %group, from = %old_name, to = %request.name, "team renamed");
    Ok(summary)
}

/// Remove a team from a group. Existing matches are untouched.
pub async fn remove_team(
    state: &SharedState,
    access: Access,
    group: String,
    name: String,
) -> Result<GroupSummary, ServiceError> {
    let store = state.require_store().await?;
    let (summary, entity) = {
        let mut roster = state.roster().write().await;
        roster.remove_team(access, &group, &name)?;
        snapshot_group(&roster, &group)?
    };
    store.save_group(entity).await?;
    Ok(summary)
}

/// Schedule a new pending match.
pub async fn create_match(
    state: &SharedState,
    access: Access,
    request: MatchRequest,
) -> Result<MatchSummary, ServiceError> {
    let store = state.require_store().await?;
    let (summary, entity) = {
        let mut roster = state.roster().write().await;
        let entry = roster.add_match(access, draft_from(request))?;
        (MatchSummary::from(entry), MatchEntity::from(entry.clone()))
    };
    store.save_match(entity).await?;
    info!(id = %summary.id, group = %summary.group, "match scheduled");
    Ok(summary)
}

/// Edit the teams or scheduling metadata of an existing match.
pub async fn update_match(
    state: &SharedState,
    access: Access,
    id: Uuid,
    request: MatchRequest,
) -> Result<MatchSummary, ServiceError> {
    let store = state.require_store().await?;
    let (summary, entity) = {
        let mut roster = state.roster().write().await;
        let entry = roster.update_match(access, id, draft_from(request))?;
        (MatchSummary::from(entry), MatchEntity::from(entry.clone()))
    };
    store.save_match(entity).await?;
    Ok(summary)
}

/// Record (or overwrite) the final score of a match.
pub async fn record_score(
    state: &SharedState,
    access: Access,
    id: Uuid,
    request: RecordScoreRequest,
) -> Result<MatchSummary, ServiceError> {
    let store = state.require_store().await?;
    let (summary, entity) = {
        let mut roster = state.roster().write().await;
        let entry = roster.record_score(access, id, request.local_score, request.visiting_score)?;
        (MatchSummary::from(entry), MatchEntity::from(entry.clone()))
    };
    store.save_match(entity).await?;
    info!(
        id = %id,
        score = format!("{}-{}", request.local_score, request.visiting_score),
        "score recorded"
    );
    Ok(summary)
}

/// Delete a match entirely.
pub async fn delete_match(
    state: &SharedState,
    access: Access,
    id: Uuid,
) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    {
        let mut roster = state.roster().write().await;
        roster.delete_match(access, id)?;
    }
    store.delete_match(id).await?;
    info!(id = %id, "match deleted");
    Ok(())
}

/// Append a jornada to a group's calendar.
pub async fn create_jornada(
    state: &SharedState,
    access: Access,
    group: String,
    request: CreateJornadaRequest,
) -> Result<JornadaSummary, ServiceError> {
    let store = state.require_store().await?;
    let jornada = Jornada {
        label: request.label,
        fixtures: request
            .fixtures
            .into_iter()
            .map(|f| Fixture {
                local: f.local,
                visiting: f.visiting,
            })
            .collect(),
    };
    let summary = JornadaSummary::from(&jornada);
    {
        let mut roster = state.roster().write().await;
        roster.add_jornada(access, &group, jornada.clone())?;
    }
    store.save_jornada(JornadaEntity::new(&group, jornada)).await?;
    info!(group = %group, label = %summary.label, "jornada added");
    Ok(summary)
}

/// Remove a jornada from a group's calendar.
pub async fn delete_jornada(
    state: &SharedState,
    access: Access,
    group: String,
    label: String,
) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    {
        let mut roster = state.roster().write().await;
        roster.remove_jornada(access, &group, &label)?;
    }
    store.delete_jornada(group.clone(), label.clone()).await?;
    info!(group = %group, label = %label, "jornada removed");
    Ok(())
}

fn draft_from(request: MatchRequest) -> MatchDraft {
    MatchDraft {
        group: request.group,
        local: request.local,
        visiting: request.visiting,
        schedule: Schedule {
            day: request.day,
            date: request.date,
            time: request.time,
            venue: request.venue,
        },
    }
}

fn snapshot_group(
    roster: &crate::state::roster::Roster,
    group: &str,
) -> Result<(GroupSummary, GroupEntity), ServiceError> {
    let entry = roster
        .group(group)
        .ok_or_else(|| ServiceError::NotFound(format!("group `{group}` not found")))?;
    Ok((
        GroupSummary::from((group, entry)),
        GroupEntity {
            id: group.to_owned(),
            teams: entry.teams.clone(),
        },
    ))
}
