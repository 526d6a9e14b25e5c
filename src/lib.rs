//! Library administration client
//!
//! Manages the authors, books, borrowed books, categories and users of a
//! library management REST API. One generic [`controller::ResourceController`]
//! drives every resource; what differs between them lives in
//! [`resources`].

pub mod client;
pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod form;
pub mod models;
pub mod prompt;
pub mod resources;
pub mod table;

pub use crate::config::AppConfig;
pub use crate::error::{AppError, AppResult};
