//! Borrowed book (loan) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Borrow record as returned by `/api/borrowed-books`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowedBook {
    pub id: i32,
    pub book_id: i32,
    pub user_id: i32,
    #[serde(with = "timestamp")]
    pub borrow_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub due_date: DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    pub return_date: Option<DateTime<Utc>>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Borrow a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBorrow {
    pub book_id: i32,
    pub user_id: i32,
    #[serde(with = "timestamp::option")]
    pub return_date: Option<DateTime<Utc>>,
}

/// Update a borrow; book and user are fixed once the record exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBorrow {
    #[serde(with = "timestamp::option")]
    pub return_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BorrowPayload {
    Create(CreateBorrow),
    Update(UpdateBorrow),
}

impl From<&BorrowedBook> for UpdateBorrow {
    fn from(borrow: &BorrowedBook) -> Self {
        Self {
            return_date: borrow.return_date,
        }
    }
}
