/// All database primary keys are UUIDs, matching the source dataset.
pub type DbId = uuid::Uuid;
