/// Admin service for roster management operations.
pub mod admin_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Public service for read-only tournament information.
pub mod public_service;
/// Roster hydration from the document store.
pub mod roster_sync;
/// Storage persistence coordinator with reconnect handling.
pub mod storage_supervisor;
