use crate::api::CatalogApi;
use crate::config::{check_slot, ShelfConfig};
use crate::error::{Result, ShelfError};
use crate::store::fs_backend::FsBackend;
use crate::store::SlotStore;
use crate::view::View;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "BOOKSHELF_DATA";

pub type FsCatalog = CatalogApi<SlotStore<FsBackend>>;

/// Pick the data directory: environment, then explicit flag, then the
/// platform's per-user data dir.
pub fn resolve_data_dir(
    env_override: Option<PathBuf>,
    flag: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(dir) = env_override.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Config("Could not determine data directory".to_string()))
}

/// Build the file-backed catalog rooted at `data_dir`.
pub fn initialize(data_dir: &Path) -> Result<FsCatalog> {
    let config = ShelfConfig::load(data_dir)?;
    check_slot(&config.slot)?;
    debug!(
        data_dir = %data_dir.display(),
        slot = %config.slot,
        notice_secs = config.notice_secs,
        "initializing catalog"
    );

    let store = SlotStore::with_backend(FsBackend::new(data_dir.to_path_buf()))
        .with_slot(config.slot.clone());
    let view = View::new(config.notice_secs);
    Ok(CatalogApi::new(store, view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use crate::store::DataStore;
    use crate::view::Form;
    use chrono::Utc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn env_override_wins_over_flag() {
        let dir = resolve_data_dir(Some("/env".into()), Some(Path::new("/flag"))).unwrap();
        assert_eq!(dir, PathBuf::from("/env"));
    }

    #[test]
    fn empty_env_override_is_ignored() {
        let dir = resolve_data_dir(Some(PathBuf::new()), Some(Path::new("/flag"))).unwrap();
        assert_eq!(dir, PathBuf::from("/flag"));
    }

    #[test]
    fn initialize_uses_configured_slot_and_delay() {
        let temp = TempDir::new().unwrap();
        let mut config = ShelfConfig::default();
        config.set("slot", "libros").unwrap();
        config.set("notice-secs", "1").unwrap();
        config.save(temp.path()).unwrap();

        let mut api = initialize(temp.path()).unwrap();
        api.submit(Form::new("Dune", "Herbert", "123"), Utc::now())
            .unwrap();

        assert!(temp.path().join("libros.json").exists());
        assert_eq!(api.view().notice_ttl(), chrono::Duration::seconds(1));
        assert_eq!(api.store().slot(), "libros");
    }

    #[test]
    fn refuses_slot_that_would_overwrite_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), r#"{"slot":"config"}"#).unwrap();

        let result = initialize(temp.path());

        assert!(matches!(result, Err(ShelfError::Config(_))));
        let raw = fs::read_to_string(temp.path().join("config.json")).unwrap();
        assert_eq!(raw, r#"{"slot":"config"}"#);
    }

    #[test]
    fn catalog_survives_reopening() {
        let temp = TempDir::new().unwrap();

        let mut first = initialize(temp.path()).unwrap();
        first
            .submit(Form::new("Dune", "Herbert", "123"), Utc::now())
            .unwrap();

        let mut second = initialize(temp.path()).unwrap();
        second.load(Utc::now()).unwrap();
        assert_eq!(second.view().rows().len(), 1);
        assert_eq!(
            second.store().fetch_all().unwrap(),
            vec![Book::new("Dune", "Herbert", "123")]
        );

        let raw = fs::read_to_string(temp.path().join("books.json")).unwrap();
        assert!(raw.starts_with(r#"[{"title":"Dune""#));
    }
}
