//! Type aliases shared across the workspace.

/// Primary key type for all entities. Generated application-side
/// (UUIDv4), never by the database.
pub type DbId = uuid::Uuid;

/// UTC timestamp type used for all server-set time columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
