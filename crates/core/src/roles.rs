//! The role vocabulary for person/film associations.
//!
//! Role names must match the values allowed by the `person_film_works.role`
//! check constraint in the database schema.

use serde::{Deserialize, Serialize};

/// The function a person performed on a film.
///
/// A person may hold more than one role on the same film (e.g. an actor
/// who also directed). Stored as a lowercase string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Actor,
    Director,
    Writer,
}

impl Role {
    /// All roles, in the order their name lists appear in the aggregate row.
    pub const ALL: [Role; 3] = [Role::Actor, Role::Director, Role::Writer];

    /// The role name as stored in the `person_film_works.role` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Director => "director",
            Self::Writer => "writer",
        }
    }
}
