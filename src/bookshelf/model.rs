use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry. Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }
}

/// The three inputs of the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Isbn,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Author, Field::Isbn];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Isbn => "isbn",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
