//! # Flows
//!
//! Each user action is one function here: it takes the store and the view
//! explicitly, runs to completion, and leaves the two consistent.
//!
//! - [`load`]: page load, draws the stored collection.
//! - [`submit`]: the entry form's submit action.
//! - [`remove`]: a click on the list (delegated at the container).
//! - [`config`]: show or change settings; unrelated to the view.

use crate::error::ValidationError;
use crate::model::Book;
use crate::view::Row;

pub mod config;
pub mod load;
pub mod remove;
pub mod submit;

pub const MSG_ADDED: &str = "Book added to the catalog";
pub const MSG_REMOVED: &str = "Book removed";

/// Terminal state of the submit flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(Book),
    Rejected(ValidationError),
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted(_))
    }
}

/// Outcome of a delete-control click that hit a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// The row taken off the table.
    pub row: Row,
    /// How many stored books carried the row's isbn.
    pub removed: usize,
}
