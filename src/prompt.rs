//! User-facing notifications and confirmations

/// Blocking notification/confirmation surface (the `alert`/`confirm` pair)
#[cfg_attr(test, mockall::automock)]
pub trait Prompt: Send {
    /// Tell the user something went well
    fn info(&self, message: &str);

    /// Tell the user something failed
    fn error(&self, message: &str);

    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> bool;
}
