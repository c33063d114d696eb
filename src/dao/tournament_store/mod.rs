#[cfg(feature = "mongo-store")]
pub mod mongodb;

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::dao::models::{GroupEntity, JornadaEntity, MatchEntity};
use crate::dao::storage::StorageResult;

/// Abstraction over the persistence layer for groups, matches, and jornadas.
///
/// Collections mirror the roster: each mutation writes through the affected
/// document, and a full listing hydrates the in-memory state after (re)connect.
pub trait TournamentStore: Send + Sync {
    fn save_group(&self, group: GroupEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn delete_group(&self, id: String) -> BoxFuture<'static, StorageResult<bool>>;
    fn list_groups(&self) -> BoxFuture<'static, StorageResult<Vec<GroupEntity>>>;
    fn save_match(&self, entry: MatchEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn delete_match(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;
    fn list_matches(&self) -> BoxFuture<'static, StorageResult<Vec<MatchEntity>>>;
    fn save_jornada(&self, entry: JornadaEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn delete_jornada(&self, group: String, label: String)
    -> BoxFuture<'static, StorageResult<bool>>;
    fn list_jornadas(&self) -> BoxFuture<'static, StorageResult<Vec<JornadaEntity>>>;
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}
