//! Author model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Author as returned by `/api/authors`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub biography: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Author summary embedded in a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorShort {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl AuthorShort {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create/update author request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorPayload {
    pub first_name: String,
    pub last_name: String,
    pub biography: Option<String>,
}

impl From<&Author> for AuthorPayload {
    fn from(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            // an empty string is stored the same as no biography
            biography: author.biography.clone().filter(|v| !v.is_empty()),
        }
    }
}
