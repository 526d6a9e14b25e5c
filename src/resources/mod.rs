//! Per-resource configuration
//!
//! Each managed entity is described once by a [`Resource`] impl: where it
//! lives on the API, how its form is laid out, how a record is displayed and
//! how form values become a payload. The generic controller does the rest.

pub mod authors;
pub mod books;
pub mod borrowed_books;
pub mod categories;
pub mod users;

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::AppResult,
    form::{FieldSpec, Form, FormMode},
};

pub use authors::Authors;
pub use books::Books;
pub use borrowed_books::BorrowedBooks;
pub use categories::Categories;
pub use users::Users;

/// User-facing wording for one resource
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    /// Singular noun used in messages, e.g. "author"
    pub noun: &'static str,
    /// Plural noun used in messages, e.g. "authors"
    pub plural: &'static str,
    pub create_title: &'static str,
    pub update_title: &'static str,
    /// Shown after a successful create
    pub created: &'static str,
    /// Noun used in delete confirmations and messages
    pub delete_noun: &'static str,
}

pub trait Resource: Send + Sync + 'static {
    type Record: DeserializeOwned + Debug + Clone + Send + Sync;
    type Payload: Serialize + Debug + Send + Sync;

    /// Base path on the API, e.g. `/api/authors`
    const BASE_PATH: &'static str;
    const LABELS: Labels;
    const COLUMNS: &'static [&'static str];
    const FIELDS: &'static [FieldSpec];
    /// Fields locked once the record exists
    const IMMUTABLE_ON_EDIT: &'static [&'static str] = &[];

    fn id(record: &Self::Record) -> i32;

    /// Display cells, one per entry in `COLUMNS`
    fn cells(record: &Self::Record) -> Vec<String>;

    fn payload(form: &Form, mode: FormMode) -> AppResult<Self::Payload>;

    fn fill(form: &mut Form, record: &Self::Record);
}

/// Capitalize the first letter of a message noun
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
