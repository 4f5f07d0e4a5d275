use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Page {page} is out of range for {total_pages} page(s)")]
    PageOutOfRange { page: i64, total_pages: i64 },
}
