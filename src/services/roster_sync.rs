//! Rebuilds the in-memory roster from the document store after a
//! (re)connection, seeding an empty store from the configured groups.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    dao::{models::GroupEntity, tournament_store::TournamentStore},
    error::ServiceError,
    state::{
        SharedState,
        roster::{Group, Match},
    },
};

/// Load every stored document and replace the in-memory roster with the
/// result. An empty store is first seeded from the configured groups so a
/// fresh deployment starts with a usable tournament.
pub async fn hydrate(
    state: &SharedState,
    store: &Arc<dyn TournamentStore>,
) -> Result<(), ServiceError> {
    let mut group_entities = store.list_groups().await?;
    if group_entities.is_empty() {
        for seed in state.config().seed_groups() {
            let entity = GroupEntity {
                id: seed.id.clone(),
                teams: seed.teams.clone(),
            };
            store.save_group(entity.clone()).await?;
            group_entities.push(entity);
        }
        info!(
            groups = group_entities.len(),
            "seeded empty store from configuration"
        );
    }

    let jornada_entities = store.list_jornadas().await?;
    let match_entities = store.list_matches().await?;

    let mut groups: IndexMap<String, Group> = IndexMap::new();
    for entity in group_entities {
        groups.insert(
            entity.id,
            Group {
                teams: entity.teams,
                jornadas: Vec::new(),
            },
        );
    }
    for entity in jornada_entities {
        let key = entity.group.clone();
        match groups.get_mut(&key) {
            Some(group) => group.jornadas.push(entity.into()),
            None => warn!(group = %key, "stored jornada references an unknown group; skipping"),
        }
    }

    let matches: IndexMap<Uuid, Match> = match_entities
        .into_iter()
        .map(|entity| (entity.id, entity.into()))
        .collect();

    let mut roster = state.roster().write().await;
    let (group_count, match_count) = (groups.len(), matches.len());
    roster.replace(groups, matches);
    info!(
        groups = group_count,
        matches = match_count,
        "roster hydrated from storage"
    );
    Ok(())
}
