//! Data models for the library API

pub mod author;
pub mod book;
pub mod borrowed_book;
pub mod category;
pub mod timestamp;
pub mod user;

// Re-export commonly used types
pub use author::{Author, AuthorPayload, AuthorShort};
pub use book::{Book, BookPayload};
pub use borrowed_book::{BorrowPayload, BorrowedBook, CreateBorrow, UpdateBorrow};
pub use category::{Category, CategoryPayload, CategoryShort};
pub use user::{User, UserPayload};
