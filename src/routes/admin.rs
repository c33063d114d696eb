use axum::{
    Extension, Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{delete, post, put},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        admin::{
            ActionResponse, CreateGroupRequest, CreateJornadaRequest, CreateTeamRequest,
            MatchRequest, RecordScoreRequest, RenameTeamRequest,
        },
        tournament::{GroupSummary, JornadaSummary, MatchSummary},
    },
    error::AppError,
    services::admin_service,
    state::{SharedState, roster::Access},
};

const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Admin-only management endpoints for editing the tournament.
pub fn router(state: SharedState) -> Router<SharedState> {
    Router::new()
        .route("/admin/groups", post(create_group))
        .route("/admin/groups/{id}", delete(delete_group))
        .route("/admin/groups/{id}/teams", post(create_team))
        .route(
            "/admin/groups/{id}/teams/{name}",
            put(rename_team).delete(delete_team),
        )
        .route("/admin/groups/{id}/jornadas", post(create_jornada))
        .route(
            "/admin/groups/{id}/jornadas/{label}",
            delete(delete_jornada),
        )
        .route("/admin/matches", post(create_match))
        .route(
            "/admin/matches/{id}",
            put(update_match).delete(delete_match),
        )
        .route("/admin/matches/{id}/score", post(record_score))
        .route_layer(middleware::from_fn_with_state(state, require_admin_token))
}

/// Create a new empty group.
#[utoipa::path(
    post,
    path = "/admin/groups",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin token from the server configuration")),
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created", body = GroupSummary),
        (status = 409, description = "Group label already taken")
    )
)]
pub async fn create_group(
    State(state): State<SharedState>,
    Extension(access): Extension<Access>,
    Json(payload): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupSummary>), AppError> {
    payload.validate()?;
    let summary = admin_service::create_group(&state, access, payload).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Delete a group and its calendar. The last remaining group cannot be deleted.
#[utoipa::path(
    delete,
    path = "/admin/groups/{id}",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin token from the server configuration"),
    ("id" = String, Path, description = "Group label")),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 409, description = "Cannot delete the last remaining group")
    )
)]
pub async fn delete_group(
    State(state): State<SharedState>,
    Extension(access): Extension<Access>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    admin_service::delete_group(&state, access, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Append a team to a group.
#[utoipa::path(
    post,
    path = "/admin/groups/{id}/teams",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin token from the server configuration"),
    ("id" = String, Path, description = "Group label")),
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team added", body = GroupSummary),
        (status = 409, description = "Team name already taken in this group")
    )
)]
pub async fn create_team(
    State(state): State<SharedState>,
    Extension(access): Extension<Access>,
    Path(id): Path<String>,
    Json(payload): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<GroupSummary>), AppError> {
    payload.validate()?;
    let summary = admin_service::add_team(&state, access, id, payload).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Rename a team in place. Existing matches keep the old name.
#[utoipa::path(
    put,
    path = "/admin/groups/{id}/teams/{name}",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin token from the server configuration"),
    ("id" = String, Path, description = "Group label"),
    ("name" = String, Path, description = "Current team name")),
    request_body = RenameTeamRequest,
    responses(
        (status = 200, description = "Team renamed", body = GroupSummary),
        (status = 409, description = "New name already taken in this group")
    )
)]
pub async fn rename_team(
    State(state): State<SharedState>,
    Extension(access): Extension<Access>,
    Path((id, name)): Path<(String, String)>,
    Json(payload): Json<RenameTeamRequest>,
) -> Result<Json<GroupSummary>, AppError> {
    payload.validate()?;
    let summary = admin_service::rename_team(&state, access, id, name, payload).await?;
    Ok(Json(summary))
}

/// Remove a team from a group. Existing matches are untouched.
#[utoipa::path(
    delete,
    path = "/admin/groups/{id}/teams/{name}",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin token from the server configuration"),
    ("id" = String, Path, description = "Group label"),
    ("name" = String, Path, description = "Team name")),
    responses((status = 200, description = "Team removed", body = GroupSummary))
)]
pub async fn delete_team(
    State(state): State<SharedState>,
    Extension(access): Extension<Access>,
    Path((id, name)): Path<(String, String)>,
) -> Result<Json<GroupSummary>, AppError> {
    let summary = admin_service::remove_team(&state, access, id, name).await?;
    Ok(Json(summary))
}

/// Append a jornada to a group's calendar.
#[utoipa::path(
    post,
    path = "/admin/groups/{id}/jornadas",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin token from the server configuration"),
    ("id" = String, Path, description = "Group label")),
    request_body = CreateJornadaRequest,
    responses(
        (status = 201, description = "Jornada added", body = JornadaSummary),
        (status = 409, description = "Jornada label already taken in this group")
    )
)]
pub async fn create_jornada(
    State(state): State<SharedState>,
    Extension(access): Extension<Access>,
    Path(id): Path<String>,
    Json(payload): Json<CreateJornadaRequest>,
) -> Result<(StatusCode, Json<JornadaSummary>), AppError> {
    payload.validate()?;
    let summary = admin_service::create_jornada(&state, access, id, payload).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Remove a jornada from a group's calendar.
#[utoipa::path(
    delete,
    path = "/admin/groups/{id}/jornadas/{label}",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin token from the server configuration"),
    ("id" = String, Path, description = "Group label"),
    ("label" = String, Path, description = "Jornada label")),
    responses((status = 204, description = "Jornada removed"))
)]
pub async fn delete_jornada(
    State(state): State<SharedState>,
    Extension(access): Extension<Access>,
    Path((id, label)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    admin_service::delete_jornada(&state, access, id, label).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Schedule a new pending match.
#[utoipa::path(
    post,
    path = "/admin/matches",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin token from the server configuration")),
    request_body = MatchRequest,
    responses(
        (status = 201, description = "Match scheduled", body = MatchSummary),
        (status = 400, description = "A team cannot play itself"),
        (status = 404, description = "Group not found")
    )
)]
pub async fn create_match(
    State(state): State<SharedState>,
    Extension(access): Extension<Access>,
    Json(payload): Json<MatchRequest>,
) -> Result<(StatusCode, Json<MatchSummary>), AppError> {
    payload.validate()?;
    let summary = admin_service::create_match(&state, access, payload).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Edit the teams or scheduling metadata of a match. Scores are preserved.
#[utoipa::path(
    put,
    path = "/admin/matches/{id}",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin token from the server configuration"),
    ("id" = Uuid, Path, description = "Match identifier")),
    request_body = MatchRequest,
    responses(
        (status = 200, description = "Match updated", body = MatchSummary),
        (status = 404, description = "Match or group not found")
    )
)]
pub async fn update_match(
    State(state): State<SharedState>,
    Extension(access): Extension<Access>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MatchRequest>,
) -> Result<Json<MatchSummary>, AppError> {
    payload.validate()?;
    let summary = admin_service::update_match(&state, access, id, payload).await?;
    Ok(Json(summary))
}

/// Record (or overwrite) the final score of a match.
#[utoipa::path(
    post,
    path = "/admin/matches/{id}/score",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin token from the server configuration"),
    ("id" = Uuid, Path, description = "Match identifier")),
    request_body = RecordScoreRequest,
    responses(
        (status = 200, description = "Score recorded", body = MatchSummary),
        (status = 400, description = "Scores must be non-negative"),
        (status = 404, description = "Match not found")
    )
)]
pub async fn record_score(
    State(state): State<SharedState>,
    Extension(access): Extension<Access>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RecordScoreRequest>,
) -> Result<Json<MatchSummary>, AppError> {
    let summary = admin_service::record_score(&state, access, id, payload).await?;
    Ok(Json(summary))
}

/// Delete a match entirely.
#[utoipa::path(
    delete,
    path = "/admin/matches/{id}",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Admin token from the server configuration"),
    ("id" = Uuid, Path, description = "Match identifier")),
    responses((status = 200, description = "Match deleted", body = ActionResponse))
)]
pub async fn delete_match(
    State(state): State<SharedState>,
    Extension(access): Extension<Access>,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionResponse>, AppError> {
    admin_service::delete_match(&state, access, id).await?;
    Ok(Json(ActionResponse {
        message: format!("match {id} deleted"),
    }))
}

/// Resolve the admin token header into a mutation capability.
///
/// The roster itself only sees the resulting [`Access`] value; the token
/// never travels past this middleware.
async fn require_admin_token(
    State(state): State<SharedState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_owned())
        .ok_or_else(|| {
            AppError::Unauthorized("missing admin token header `X-Admin-Token`".into())
        })?;

    match state.config().admin_token() {
        Some(token) if token == provided => {
            req.extensions_mut().insert(Access::Admin);
            Ok(next.run(req).await)
        }
        Some(_) => Err(AppError::Unauthorized("invalid admin token".into())),
        None => Err(AppError::Unauthorized(
            "no admin token configured; mutations are disabled".into(),
        )),
    }
}
