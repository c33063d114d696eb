/// Database model definitions.
pub mod models;
/// Storage abstraction layer for database operations.
pub mod storage;
/// Tournament state storage and retrieval operations.
pub mod tournament_store;
