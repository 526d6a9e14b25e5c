//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::author::AuthorShort;
use super::category::CategoryShort;
use super::timestamp;

/// Book as returned by `/api/books`
///
/// Relationships come back as summaries but are written as id lists, see
/// [`BookPayload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: Option<String>,
    pub publication_year: Option<i32>,
    pub isbn: Option<String>,
    pub quantity: Option<i32>,
    #[serde(default)]
    pub authors: Vec<AuthorShort>,
    #[serde(default)]
    pub categories: Vec<CategoryShort>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update book request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPayload {
    pub title: String,
    pub publication_year: Option<i32>,
    pub isbn: String,
    pub quantity: i32,
    pub author_ids: Vec<i32>,
    pub category_ids: Vec<i32>,
}

impl From<&Book> for BookPayload {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone().unwrap_or_default(),
            publication_year: book.publication_year,
            isbn: book.isbn.clone().unwrap_or_default(),
            quantity: book.quantity.unwrap_or(1),
            author_ids: book.authors.iter().map(|a| a.id).collect(),
            category_ids: book.categories.iter().map(|c| c.id).collect(),
        }
    }
}
