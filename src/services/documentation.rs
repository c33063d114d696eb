use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Torneo Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::public::get_groups,
        crate::routes::public::get_standings,
        crate::routes::public::get_calendar,
        crate::routes::public::get_matches,
        crate::routes::admin::create_group,
        crate::routes::admin::delete_group,
        crate::routes::admin::create_team,
        crate::routes::admin::rename_team,
        crate::routes::admin::delete_team,
        crate::routes::admin::create_jornada,
        crate::routes::admin::delete_jornada,
        crate::routes::admin::create_match,
        crate::routes::admin::update_match,
        crate::routes::admin::record_score,
        crate::routes::admin::delete_match,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::public::GroupsResponse,
            crate::dto::public::StandingsResponse,
            crate::dto::public::CalendarResponse,
            crate::dto::public::MatchesResponse,
            crate::dto::tournament::GroupSummary,
            crate::dto::tournament::MatchSummary,
            crate::dto::tournament::JornadaSummary,
            crate::dto::tournament::FixtureSummary,
            crate::dto::tournament::StandingsRowDto,
            crate::dto::admin::CreateGroupRequest,
            crate::dto::admin::CreateTeamRequest,
            crate::dto::admin::RenameTeamRequest,
            crate::dto::admin::CreateJornadaRequest,
            crate::dto::admin::FixtureInput,
            crate::dto::admin::MatchRequest,
            crate::dto::admin::RecordScoreRequest,
            crate::dto::admin::ActionResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "public", description = "Read-only tournament views"),
        (name = "admin", description = "Token-gated tournament management"),
    )
)]
pub struct ApiDoc;
