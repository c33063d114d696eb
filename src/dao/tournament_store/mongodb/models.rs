use mongodb::bson::{Binary, Document, doc, spec::BinarySubtype};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dao::models::{FixtureEntity, GroupEntity, JornadaEntity, MatchEntity};

/// Group document: the label is the natural primary key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoGroupDocument {
    #[serde(rename = "_id")]
    id: String,
    teams: Vec<String>,
}

impl From<GroupEntity> for MongoGroupDocument {
    fn from(value: GroupEntity) -> Self {
        Self {
            id: value.id,
            teams: value.teams,
        }
    }
}

impl From<MongoGroupDocument> for GroupEntity {
    fn from(value: MongoGroupDocument) -> Self {
        Self {
            id: value.id,
            teams: value.teams,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoMatchDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    group: String,
    local: String,
    visiting: String,
    local_score: Option<u32>,
    visiting_score: Option<u32>,
    #[serde(default)]
    played: bool,
    day: Option<String>,
    date: Option<String>,
    time: Option<String>,
    venue: Option<String>,
}

impl From<MatchEntity> for MongoMatchDocument {
    fn from(value: MatchEntity) -> Self {
        Self {
            id: value.id,
            group: value.group,
            local: value.local,
            visiting: value.visiting,
            local_score: value.local_score,
            visiting_score: value.visiting_score,
            played: value.played,
            day: value.day,
            date: value.date,
            time: value.time,
            venue: value.venue,
        }
    }
}

impl From<MongoMatchDocument> for MatchEntity {
    fn from(value: MongoMatchDocument) -> Self {
        Self {
            id: value.id,
            group: value.group,
            local: value.local,
            visiting: value.visiting,
            local_score: value.local_score,
            visiting_score: value.visiting_score,
            played: value.played,
            day: value.day,
            date: value.date,
            time: value.time,
            venue: value.venue,
        }
    }
}

/// Calendar document, keyed by (group, label).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoJornadaDocument {
    pub group: String,
    pub label: String,
    fixtures: Vec<FixtureEntity>,
}

impl From<JornadaEntity> for MongoJornadaDocument {
    fn from(value: JornadaEntity) -> Self {
        Self {
            group: value.group,
            label: value.label,
            fixtures: value.fixtures,
        }
    }
}

impl From<MongoJornadaDocument> for JornadaEntity {
    fn from(value: MongoJornadaDocument) -> Self {
        Self {
            group: value.group,
            label: value.label,
            fixtures: value.fixtures,
        }
    }
}

fn uuid_as_binary(id: Uuid) -> Binary {
    Binary {
        subtype: BinarySubtype::Uuid,
        bytes: id.into_bytes().to_vec(),
    }
}

pub fn match_id(id: Uuid) -> Document {
    doc! {"_id": uuid_as_binary(id)}
}

pub fn group_id(id: &str) -> Document {
    doc! {"_id": id}
}

pub fn jornada_key(group: &str, label: &str) -> Document {
    doc! {"group": group, "label": label}
}
