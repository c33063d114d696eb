use std::sync::Arc;

use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{Client, Collection, Database, bson::doc, options::IndexOptions};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult},
    models::{
        MongoGroupDocument, MongoJornadaDocument, MongoMatchDocument, group_id, jornada_key,
        match_id,
    },
};
use crate::dao::{
    models::{GroupEntity, JornadaEntity, MatchEntity},
    storage::StorageResult,
    tournament_store::TournamentStore,
};

const GROUP_COLLECTION_NAME: &str = "groups";
const MATCH_COLLECTION_NAME: &str = "matches";
const CALENDAR_COLLECTION_NAME: &str = "calendar";

/// MongoDB-backed implementation of [`TournamentStore`].
#[derive(Clone)]
pub struct MongoTournamentStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    state: RwLock<MongoState>,
    config: MongoConfig,
}

struct MongoState {
    client: Client,
    database: Database,
}

impl MongoInner {
    async fn ping(&self) -> MongoResult<()> {
        let database = {
            let guard = self.state.read().await;
            guard.database.clone()
        };

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn reconnect(&self) -> MongoResult<()> {
        let (client, database) =
            establish_connection(&self.config.options, &self.config.database_name).await?;
        let mut guard = self.state.write().await;
        guard.client = client;
        guard.database = database;
        Ok(())
    }
}

impl MongoTournamentStore {
    /// Establish a connection to MongoDB and ensure indexes are present.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let (client, database) =
            establish_connection(&config.options, &config.database_name).await?;

        let inner = Arc::new(MongoInner {
            state: RwLock::new(MongoState { client, database }),
            config,
        });

        let store = Self { inner };
        store.ensure_indexes().await?;
        Ok(store)
    }

    async fn ensure_indexes(&self) -> MongoResult<()> {
        let database = self.database().await;

        // Matches are always listed per group.
        let match_collection =
            database.collection::<MongoMatchDocument>(MATCH_COLLECTION_NAME);
        let match_index = mongodb::IndexModel::builder()
            .keys(doc! {"group": 1})
            .options(
                IndexOptions::builder()
                    .name(Some("match_group_idx".to_owned()))
                    .build(),
            )
            .build();

        match_collection
            .create_index(match_index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: MATCH_COLLECTION_NAME,
                index: "group",
                source,
            })?;

        // Jornadas are addressed by (group, label).
        let calendar_collection =
            database.collection::<MongoJornadaDocument>(CALENDAR_COLLECTION_NAME);
        let calendar_index = mongodb::IndexModel::builder()
            .keys(doc! {"group": 1, "label": 1})
            .options(
                IndexOptions::builder()
                    .name(Some("calendar_group_label_idx".to_owned()))
                    .unique(Some(true))
                    .build(),
            )
            .build();

        calendar_collection
            .create_index(calendar_index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: CALENDAR_COLLECTION_NAME,
                index: "group,label",
                source,
            })?;

        Ok(())
    }

    async fn database(&self) -> Database {
        let guard = self.inner.state.read().await;
        guard.database.clone()
    }

    async fn group_collection(&self) -> Collection<MongoGroupDocument> {
        self.database()
            .await
            .collection::<MongoGroupDocument>(GROUP_COLLECTION_NAME)
    }

    async fn match_collection(&self) -> Collection<MongoMatchDocument> {
        self.database()
            .await
            .collection::<MongoMatchDocument>(MATCH_COLLECTION_NAME)
    }

    async fn calendar_collection(&self) -> Collection<MongoJornadaDocument> {
        self.database()
            .await
            .collection::<MongoJornadaDocument>(CALENDAR_COLLECTION_NAME)
    }

    async fn save_group(&self, group: GroupEntity) -> MongoResult<()> {
        let id = group.id.clone();
        let document: MongoGroupDocument = group.into();
        let collection = self.group_collection().await;
        collection
            .replace_one(group_id(&id), &document)
            .upsert(true)
            .await
            .map_err(|source| MongoDaoError::SaveGroup { id, source })?;
        Ok(())
    }

    async fn delete_group(&self, id: String) -> MongoResult<bool> {
        let collection = self.group_collection().await;
        let result = collection
            .delete_one(group_id(&id))
            .await
            .map_err(|source| MongoDaoError::DeleteGroup { id, source })?;
        Ok(result.deleted_count > 0)
    }

    async fn list_groups(&self) -> MongoResult<Vec<GroupEntity>> {
        let collection = self.group_collection().await;
        let documents: Vec<MongoGroupDocument> = collection
            .find(doc! {})
            .await
            .map_err(|source| MongoDaoError::ListGroups { source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListGroups { source })?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn save_match(&self, entry: MatchEntity) -> MongoResult<()> {
        let id = entry.id;
        let document: MongoMatchDocument = entry.into();
        let collection = self.match_collection().await;
        collection
            .replace_one(match_id(id), &document)
            .upsert(true)
            .await
            .map_err(|source| MongoDaoError::SaveMatch { id, source })?;
        Ok(())
    }

    async fn delete_match(&self, id: Uuid) -> MongoResult<bool> {
        let collection = self.match_collection().await;
        let result = collection
            .delete_one(match_id(id))
            .await
            .map_err(|source| MongoDaoError::DeleteMatch { id, source })?;
        Ok(result.deleted_count > 0)
    }

    async fn list_matches(&self) -> MongoResult<Vec<MatchEntity>> {
        let collection = self.match_collection().await;
        let documents: Vec<MongoMatchDocument> = collection
            .find(doc! {})
            .await
            .map_err(|source| MongoDaoError::ListMatches { source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListMatches { source })?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn save_jornada(&self, entry: JornadaEntity) -> MongoResult<()> {
        let document: MongoJornadaDocument = entry.into();
        let collection = self.calendar_collection().await;
        collection
            .replace_one(jornada_key(&document.group, &document.label), &document)
            .upsert(true)
            .await
            .map_err(|source| MongoDaoError::SaveJornada {
                group: document.group.clone(),
                label: document.label.clone(),
                source,
            })?;
        Ok(())
    }

    async fn delete_jornada(&self, group: String, label: String) -> MongoResult<bool> {
        let collection = self.calendar_collection().await;
        let result = collection
            .delete_one(jornada_key(&group, &label))
            .await
            .map_err(|source| MongoDaoError::DeleteJornada {
                group,
                label,
                source,
            })?;
        Ok(result.deleted_count > 0)
    }

    async fn list_jornadas(&self) -> MongoResult<Vec<JornadaEntity>> {
        let collection = self.calendar_collection().await;
        let documents: Vec<MongoJornadaDocument> = collection
            .find(doc! {})
            .await
            .map_err(|source| MongoDaoError::ListJornadas { source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListJornadas { source })?;

        Ok(documents.into_iter().map(Into::into).collect())
    }
}

impl TournamentStore for MongoTournamentStore {
    fn save_group(&self, group: GroupEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_group(group).await.map_err(Into::into) })
    }

    fn delete_group(&self, id: String) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_group(id).await.map_err(Into::into) })
    }

    fn list_groups(&self) -> BoxFuture<'static, StorageResult<Vec<GroupEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_groups().await.map_err(Into::into) })
    }

    fn save_match(&self, entry: MatchEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_match(entry).await.map_err(Into::into) })
    }

    fn delete_match(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_match(id).await.map_err(Into::into) })
    }

    fn list_matches(&self) -> BoxFuture<'static, StorageResult<Vec<MatchEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_matches().await.map_err(Into::into) })
    }

    fn save_jornada(&self, entry: JornadaEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_jornada(entry).await.map_err(Into::into) })
    }

    fn delete_jornada(
        &self,
        group: String,
        label: String,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_jornada(group, label).await.map_err(Into::into) })
    }

    fn list_jornadas(&self) -> BoxFuture<'static, StorageResult<Vec<JornadaEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_jornadas().await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.ping().await.map_err(Into::into) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.reconnect().await.map_err(Into::into) })
    }
}
