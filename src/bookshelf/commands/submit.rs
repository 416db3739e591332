use super::{Submission, MSG_ADDED};
use crate::error::{Result, ValidationError};
use crate::model::{Book, Field};
use crate::store::DataStore;
use crate::view::{Severity, View};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Validate the form and, when it holds a new isbn, store and show the book.
///
/// Rejections are not errors: they leave the store, the rows and the form
/// untouched and raise a danger banner. `Err` is reserved for storage failures.
pub fn run<S: DataStore>(
    store: &mut S,
    view: &mut View,
    now: DateTime<Utc>,
) -> Result<Submission> {
    let book = match book_from_form(view) {
        Ok(book) => book,
        Err(rejection) => return Ok(reject(view, rejection, now)),
    };

    if store.exists(&book.isbn)? {
        return Ok(reject(view, ValidationError::DuplicateIsbn(book.isbn), now));
    }

    store.add(&book)?;
    view.render_one(&book);
    view.notify(MSG_ADDED, Severity::Success, now);
    view.clear_form();

    info!(isbn = %book.isbn, "book added");
    Ok(Submission::Accepted(book))
}

/// The first empty field, in form order, is reported. Values are kept as typed.
fn book_from_form(view: &View) -> std::result::Result<Book, ValidationError> {
    if let Some(missing) = Field::ALL
        .into_iter()
        .find(|f| view.form.get(*f).is_empty())
    {
        return Err(ValidationError::MissingField(missing));
    }

    Ok(Book::new(
        view.form.title.as_str(),
        view.form.author.as_str(),
        view.form.isbn.as_str(),
    ))
}

fn reject(view: &mut View, rejection: ValidationError, now: DateTime<Utc>) -> Submission {
    debug!(reason = %rejection, "submission rejected");
    view.notify(rejection.to_string(), Severity::Danger, now);
    Submission::Rejected(rejection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::store::slot_store::fixtures::StoreFixture;
    use crate::view::Form;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 15, 9, 26).unwrap()
    }

    fn filled(title: &str, author: &str, isbn: &str) -> View {
        let mut view = View::default();
        view.form = Form::new(title, author, isbn);
        view
    }

    #[test]
    fn accepts_fresh_isbn() {
        let mut store = StoreFixture::new().store;
        let mut view = filled("Dune", "Herbert", "123");

        let outcome = run(&mut store, &mut view, now()).unwrap();

        let dune = Book::new("Dune", "Herbert", "123");
        assert_eq!(outcome, Submission::Accepted(dune.clone()));
        assert_eq!(store.fetch_all().unwrap(), vec![dune]);
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].isbn, "123");
        assert_eq!(view.banners().len(), 1);
        assert_eq!(view.banners()[0].severity, Severity::Success);
        assert_eq!(view.banners()[0].message, MSG_ADDED);
        assert!(view.form.is_empty());
    }

    #[test]
    fn rejects_each_missing_field() {
        for field in Field::ALL {
            let mut store = StoreFixture::new().store;
            let mut view = filled("Dune", "Herbert", "123");
            view.form.set(field, "");

            let outcome = run(&mut store, &mut view, now()).unwrap();

            assert_eq!(
                outcome,
                Submission::Rejected(ValidationError::MissingField(field))
            );
            assert!(store.fetch_all().unwrap().is_empty());
            assert!(view.rows().is_empty());
            assert_eq!(view.banners()[0].severity, Severity::Danger);
            // The form keeps what the user typed.
            assert!(!view.form.is_empty());
        }
    }

    #[test]
    fn whitespace_field_is_not_missing() {
        let mut store = StoreFixture::new().store;
        let mut view = filled("Dune", " ", "123");

        let outcome = run(&mut store, &mut view, now()).unwrap();

        let book = Book::new("Dune", " ", "123");
        assert_eq!(outcome, Submission::Accepted(book.clone()));
        assert_eq!(store.fetch_all().unwrap(), vec![book]);
    }

    #[test]
    fn stores_values_as_typed() {
        let mut store = StoreFixture::new().store;
        let mut view = filled("  Dune ", "Herbert", " 123 ");

        run(&mut store, &mut view, now()).unwrap();
        assert_eq!(
            store.fetch_all().unwrap(),
            vec![Book::new("  Dune ", "Herbert", " 123 ")]
        );
    }

    #[test]
    fn rejects_duplicate_isbn_without_mutation() {
        let mut store = StoreFixture::new().with_book("Dune", "Herbert", "123").store;
        let mut view = View::default();
        view.render_all(&store).unwrap();
        view.form = Form::new("Other", "Someone", "123");
        let before = store.fetch_all().unwrap();

        let outcome = run(&mut store, &mut view, now()).unwrap();

        assert_eq!(
            outcome,
            Submission::Rejected(ValidationError::DuplicateIsbn("123".into()))
        );
        assert_eq!(store.fetch_all().unwrap(), before);
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.banners().len(), 1);
        assert_eq!(view.banners()[0].severity, Severity::Danger);
        assert!(view.banners()[0].message.contains("123"));
        // The rejected input stays in the form for correction.
        assert_eq!(view.form.title, "Other");
    }

    #[test]
    fn duplicate_check_matches_isbn_exactly() {
        let mut store = StoreFixture::new().with_book("Dune", "Herbert", "123").store;
        let mut view = filled(" Dune", "Herbert", " 123");

        let outcome = run(&mut store, &mut view, now()).unwrap();

        assert!(outcome.is_accepted());
        assert_eq!(store.fetch_all().unwrap().len(), 2);
        assert!(store.exists(" 123").unwrap());
    }

    #[test]
    fn dune_scenario() {
        let mut store = StoreFixture::new().store;
        let mut view = View::default();

        view.form = Form::new("Dune", "Herbert", "123");
        assert!(run(&mut store, &mut view, now()).unwrap().is_accepted());
        assert_eq!(
            store.fetch_all().unwrap(),
            vec![Book::new("Dune", "Herbert", "123")]
        );

        view.form = Form::new("Dune", "Herbert", "123");
        assert!(!run(&mut store, &mut view, now()).unwrap().is_accepted());
        assert_eq!(store.fetch_all().unwrap().len(), 1);

        store.remove_by_isbn("123").unwrap();
        assert!(store.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn corrupt_store_is_an_error_not_a_rejection() {
        let mut store = StoreFixture::new().with_raw_slot("nope").store;
        let mut view = filled("Dune", "Herbert", "123");

        let result = run(&mut store, &mut view, now());

        assert!(matches!(result, Err(ShelfError::CorruptStore { .. })));
        assert!(view.rows().is_empty());
        assert_eq!(view.form.title, "Dune");
    }
}
