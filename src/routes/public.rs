use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::{
        admin::NoQuery,
        public::{CalendarResponse, GroupsResponse, MatchesResponse, StandingsResponse},
    },
    error::AppError,
    services::public_service,
    state::SharedState,
};

/// Public read-only endpoints that expose the current tournament state.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/public/groups", get(get_groups))
        .route("/public/groups/{id}/standings", get(get_standings))
        .route("/public/groups/{id}/calendar", get(get_calendar))
        .route("/public/groups/{id}/matches", get(get_matches))
}

#[utoipa::path(
    get,
    path = "/public/groups",
    tag = "public",
    responses((status = 200, description = "All groups with their teams", body = GroupsResponse))
)]
/// Return every group of the tournament with its team list.
pub async fn get_groups(
    State(state): State<SharedState>,
    Query(_no_query): Query<NoQuery>,
) -> Result<Json<GroupsResponse>, AppError> {
    let payload = public_service::list_groups(&state).await?;
    Ok(Json(payload))
}

#[utoipa::path(
    get,
    path = "/public/groups/{id}/standings",
    tag = "public",
    params(("id" = String, Path, description = "Group label")),
    responses(
        (status = 200, description = "Computed standings table", body = StandingsResponse),
        (status = 404, description = "Group not found")
    )
)]
/// Return the standings table of one group, computed from its matches.
pub async fn get_standings(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(_no_query): Query<NoQuery>,
) -> Result<Json<StandingsResponse>, AppError> {
    let payload = public_service::get_standings(&state, id).await?;
    Ok(Json(payload))
}

#[utoipa::path(
    get,
    path = "/public/groups/{id}/calendar",
    tag = "public",
    params(("id" = String, Path, description = "Group label")),
    responses(
        (status = 200, description = "Calendar of the group", body = CalendarResponse),
        (status = 404, description = "Group not found")
    )
)]
/// Return the jornadas of one group.
pub async fn get_calendar(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(_no_query): Query<NoQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let payload = public_service::get_calendar(&state, id).await?;
    Ok(Json(payload))
}

#[utoipa::path(
    get,
    path = "/public/groups/{id}/matches",
    tag = "public",
    params(("id" = String, Path, description = "Group label")),
    responses(
        (status = 200, description = "Matches of the group", body = MatchesResponse),
        (status = 404, description = "Group not found")
    )
)]
/// Return the matches of one group in insertion order.
pub async fn get_matches(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(_no_query): Query<NoQuery>,
) -> Result<Json<MatchesResponse>, AppError> {
    let payload = public_service::list_matches(&state, id).await?;
    Ok(Json(payload))
}
