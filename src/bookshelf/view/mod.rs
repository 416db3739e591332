//! # View
//!
//! The visible document of the catalog, held as plain data so that any
//! front-end can draw it: the table of [`Row`]s, the stack of transient
//! [`Banner`]s above the form, and the three-field entry [`Form`].
//!
//! Nothing here writes to a terminal. The CLI reads this state and renders it.
//!
//! ## Row identity
//!
//! Every row carries the isbn of the book it shows as structured data
//! ([`Row::isbn`]). Deletion uses that key, never the rendered cell text.
//!
//! ## Banner timing
//!
//! Time is passed in explicitly (`now`). Each banner owns its own deadline, and
//! [`View::dismiss_expired`] removes exactly the banners that are past it, so a
//! second notification can never cause the first one's timer to remove it.

use crate::error::Result;
use crate::model::{Book, Field};
use crate::store::DataStore;
use chrono::{DateTime, Duration, Utc};

pub mod banner;

pub use banner::{Banner, BannerId, Severity, DEFAULT_NOTICE_SECS};

/// Column headings, in display order.
pub const COLUMNS: [&str; 3] = ["Title", "Author", "ISBN"];

/// One displayed table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Key of the book this row shows.
    pub isbn: String,
    /// Rendered cells, one per entry in [`COLUMNS`].
    pub cells: [String; 3],
}

impl Row {
    fn from_book(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            cells: [book.title.clone(), book.author.clone(), book.isbn.clone()],
        }
    }
}

/// What a click on the list landed on. Row positions are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The per-row delete control.
    DeleteControl { row: usize },
    /// Any data cell of a row.
    Cell { row: usize, column: usize },
    /// The list container itself, outside any row.
    Container,
}

/// The entry form's three inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Form {
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

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Isbn => &self.isbn,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Author => self.author = value,
            Field::Isbn => self.isbn = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct View {
    rows: Vec<Row>,
    banners: Vec<Banner>,
    pub form: Form,
    notice_ttl: Duration,
    next_banner: u64,
}

impl Default for View {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_SECS)
    }
}

impl View {
    pub fn new(notice_secs: u64) -> Self {
        let secs = i64::try_from(notice_secs).unwrap_or(i64::MAX);
        Self {
            rows: Vec::new(),
            banners: Vec::new(),
            form: Form::default(),
            notice_ttl: Duration::try_seconds(secs).unwrap_or(Duration::MAX),
            next_banner: 1,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Banners in insertion order; the last one sits closest to the form.
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn notice_ttl(&self) -> Duration {
        self.notice_ttl
    }

    /// Fetch the whole collection and append one row per book, in fetch order.
    pub fn render_all<S: DataStore>(&mut self, store: &S) -> Result<()> {
        let books = store.fetch_all()?;
        self.rows.reserve(books.len());
        for book in &books {
            self.render_one(book);
        }
        Ok(())
    }

    /// Append a single row without touching the store.
    pub fn render_one(&mut self, book: &Book) {
        self.rows.push(Row::from_book(book));
    }

    /// Remove the targeted row, but only when the click hit its delete control.
    pub fn remove_row(&mut self, target: ClickTarget) -> Option<Row> {
        match target {
            ClickTarget::DeleteControl { row } if row < self.rows.len() => {
                Some(self.rows.remove(row))
            }
            _ => None,
        }
    }

    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: DateTime<Utc>,
    ) -> BannerId {
        let id = BannerId(self.next_banner);
        self.next_banner += 1;
        self.banners
            .push(Banner::new(id, message.into(), severity, now, self.notice_ttl));
        id
    }

    /// Drop every banner whose own deadline has passed. Returns how many went.
    pub fn dismiss_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.banners.len();
        self.banners.retain(|b| !b.is_expired(now));
        before - self.banners.len()
    }

    pub fn clear_form(&mut self) {
        self.form = Form::default();
    }
}
