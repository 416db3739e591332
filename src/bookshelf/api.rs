//! # API Facade
//!
//! `CatalogApi<S: DataStore>` is the single entry point front-ends talk to. It
//! owns the store and the [`View`], and forwards each user action to its flow
//! in `commands/`.
//!
//! Generic over the store:
//! - Production: `CatalogApi<SlotStore<FsBackend>>`
//! - Testing: `CatalogApi<SlotStore<MemBackend>>`
//!
//! ## Errors
//!
//! Validation problems never reach the caller as `Err`; they are banners. A
//! storage error does come back as `Err`, and a corrupt slot additionally
//! raises a danger banner so a long-lived front-end can keep running and
//! show it.

use crate::commands::{self, Removal, Submission};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use crate::store::DataStore;
use crate::view::{ClickTarget, Form, Severity, View};
use chrono::{DateTime, Utc};

pub struct CatalogApi<S: DataStore> {
    store: S,
    view: View,
}

impl<S: DataStore> CatalogApi<S> {
    pub fn new(store: S, view: View) -> Self {
        Self { store, view }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Draw the stored collection.
    pub fn load(&mut self, now: DateTime<Utc>) -> Result<()> {
        let result = commands::load::run(&self.store, &mut self.view);
        self.surface(result, now)
    }

    /// Put `form` into the entry form and submit it.
    pub fn submit(&mut self, form: Form, now: DateTime<Utc>) -> Result<Submission> {
        self.view.form = form;
        let result = commands::submit::run(&mut self.store, &mut self.view, now);
        self.surface(result, now)
    }

    pub fn click(&mut self, target: ClickTarget, now: DateTime<Utc>) -> Result<Option<Removal>> {
        let result = commands::remove::run(&mut self.store, &mut self.view, target, now);
        self.surface(result, now)
    }

    /// Drop banners that have outlived their delay.
    pub fn tick(&mut self, now: DateTime<Utc>) -> usize {
        self.view.dismiss_expired(now)
    }

    /// The persisted collection, read fresh.
    pub fn books(&self) -> Result<Vec<Book>> {
        self.store.fetch_all()
    }

    fn surface<T>(&mut self, result: Result<T>, now: DateTime<Utc>) -> Result<T> {
        if let Err(e @ ShelfError::CorruptStore { .. }) = &result {
            self.view.notify(e.to_string(), Severity::Danger, now);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::model::Field;
    use crate::store::mem_backend::MemBackend;
    use crate::store::SlotStore;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn api_with(backend: MemBackend) -> CatalogApi<SlotStore<MemBackend>> {
        CatalogApi::new(SlotStore::with_backend(backend), View::default())
    }

    #[test]
    fn accepted_book_is_visible_in_view_and_store() {
        let mut api = api_with(MemBackend::new());
        api.load(t0()).unwrap();

        let outcome = api.submit(Form::new("Dune", "Herbert", "123"), t0()).unwrap();

        assert!(outcome.is_accepted());
        assert_eq!(api.view().rows().len(), 1);
        assert_eq!(api.books().unwrap(), vec![Book::new("Dune", "Herbert", "123")]);
    }

    #[test]
    fn view_and_store_stay_in_step_across_actions() {
        let mut api = api_with(MemBackend::new());
        api.load(t0()).unwrap();

        api.submit(Form::new("Dune", "Herbert", "123"), t0()).unwrap();
        api.submit(Form::new("Emma", "Austen", "456"), t0()).unwrap();
        api.submit(Form::new("Dune again", "Herbert", "123"), t0()).unwrap();
        api.submit(Form::new("", "Nobody", "789"), t0()).unwrap();
        api.click(ClickTarget::DeleteControl { row: 0 }, t0()).unwrap();

        let row_keys: Vec<_> = api.view().rows().iter().map(|r| r.isbn.clone()).collect();
        let stored: Vec<_> = api.books().unwrap().into_iter().map(|b| b.isbn).collect();
        assert_eq!(row_keys, stored);
        assert_eq!(stored, vec!["456"]);
    }

    #[test]
    fn rejection_is_not_an_error() {
        let mut api = api_with(MemBackend::new());
        let outcome = api.submit(Form::new("Dune", "", "123"), t0()).unwrap();
        assert_eq!(
            outcome,
            Submission::Rejected(ValidationError::MissingField(Field::Author))
        );
    }

    #[test]
    fn corrupt_store_surfaces_as_danger_banner() {
        let mut api = api_with(MemBackend::new().with_slot("books", "]["));

        assert!(api.load(t0()).is_err());
        assert_eq!(api.view().banners().len(), 1);
        assert_eq!(api.view().banners()[0].severity, Severity::Danger);
        assert!(api.view().banners()[0].message.contains("unreadable"));
    }

    #[test]
    fn tick_drops_expired_banners() {
        let mut api = api_with(MemBackend::new());
        api.submit(Form::new("Dune", "Herbert", "123"), t0()).unwrap();

        assert_eq!(api.tick(t0() + Duration::seconds(1)), 0);
        assert_eq!(api.tick(t0() + Duration::seconds(3)), 1);
        assert!(api.view().banners().is_empty());
    }
}
