//! Category model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Category as returned by `/api/categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Category summary embedded in a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShort {
    pub id: i32,
    pub name: String,
}

/// Create/update category request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: Option<String>,
}

impl From<&Category> for CategoryPayload {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            // an empty string is stored the same as no description
            description: category.description.clone().filter(|v| !v.is_empty()),
        }
    }
}
