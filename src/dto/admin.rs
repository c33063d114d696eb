//! DTO definitions used by the admin REST API and documentation layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::dto::validation::{validate_group_label, validate_team_name};

/// Empty query placeholder for routes that accept no parameters.
#[derive(Debug, Deserialize)]
pub struct NoQuery {}

/// Payload to create a new empty group.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    pub id: String,
}

impl Validate for CreateGroupRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_group_label(&self.id) {
            errors.add("id", e);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Payload to append a team to a group.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTeamRequest {
    pub name: String,
}

impl Validate for CreateTeamRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_team_name(&self.name) {
            errors.add("name", e);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Payload to rename a team in place.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RenameTeamRequest {
    pub name: String,
}

impl Validate for RenameTeamRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_team_name(&self.name) {
            errors.add("name", e);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Payload to schedule a new match or edit an existing one.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MatchRequest {
    pub group: String,
    pub local: String,
    pub visiting: String,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
}

impl Validate for MatchRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_group_label(&self.group) {
            errors.add("group", e);
        }
        if let Err(e) = validate_team_name(&self.local) {
            errors.add("local", e);
        }
        if let Err(e) = validate_team_name(&self.visiting) {
            errors.add("visiting", e);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Payload to record (or overwrite) a final score.
///
/// Scores are signed on the wire so that a negative value can be rejected
/// with a proper error instead of a deserialisation failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordScoreRequest {
    pub local_score: i32,
    pub visiting_score: i32,
}

/// One fixture of a jornada payload.
#[derive(Debug, Deserialize, ToSchema)]
pub struct FixtureInput {
    pub local: String,
    pub visiting: String,
}

/// Payload to append a jornada to a group's calendar.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateJornadaRequest {
    pub label: String,
    #[serde(default)]
    pub fixtures: Vec<FixtureInput>,
}

impl Validate for CreateJornadaRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.label.trim().is_empty() {
            let mut err = validator::ValidationError::new("jornada_label_blank");
            err.message = Some("Jornada label must not be blank".into());
            errors.add("label", err);
        }
        for fixture in &self.fixtures {
            if let Err(e) = validate_team_name(&fixture.local) {
                errors.add("fixtures", e);
            }
            if let Err(e) = validate_team_name(&fixture.visiting) {
                errors.add("fixtures", e);
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Generic action acknowledgement used by admin endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    pub message: String,
}
