use crate::config::{ShelfConfig, CONFIG_KEYS};
use crate::error::{Result, ShelfError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// `(key, value)` pairs to display, plus what changed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConfigReport {
    pub entries: Vec<(String, String)>,
    pub updated: Option<String>,
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<ConfigReport> {
    let mut config = ShelfConfig::load(dir)?;
    match action {
        ConfigAction::ShowAll => Ok(ConfigReport {
            entries: CONFIG_KEYS
                .iter()
                .filter_map(|k| config.get(k).map(|v| (k.to_string(), v)))
                .collect(),
            updated: None,
        }),
        ConfigAction::ShowKey(key) => {
            let value = config
                .get(&key)
                .ok_or_else(|| ShelfError::Config(format!("Unknown config key: {}", key)))?;
            Ok(ConfigReport {
                entries: vec![(key, value)],
                updated: None,
            })
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(dir)?;
            let shown = config.get(&key).unwrap_or(value);
            Ok(ConfigReport {
                updated: Some(format!("{} set to {}", key, shown)),
                entries: vec![(key, shown)],
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn show_all_lists_every_key_with_defaults() {
        let temp = TempDir::new().unwrap();
        let report = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(
            report.entries,
            vec![
                ("slot".to_string(), "books".to_string()),
                ("notice-secs".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(report.updated, None);
    }

    #[test]
    fn set_persists_and_reports() {
        let temp = TempDir::new().unwrap();
        let report = run(
            temp.path(),
            ConfigAction::Set("notice-secs".into(), "1".into()),
        )
        .unwrap();
        assert_eq!(report.updated.as_deref(), Some("notice-secs set to 1"));

        let shown = run(temp.path(), ConfigAction::ShowKey("notice-secs".into())).unwrap();
        assert_eq!(shown.entries, vec![("notice-secs".into(), "1".into())]);
    }

    #[test]
    fn unknown_key_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            run(temp.path(), ConfigAction::ShowKey("colour".into())),
            Err(ShelfError::Config(_))
        ));
    }

    #[test]
    fn invalid_value_does_not_write() {
        let temp = TempDir::new().unwrap();
        assert!(run(
            temp.path(),
            ConfigAction::Set("notice-secs".into(), "x".into())
        )
        .is_err());
        assert!(!temp.path().join("config.json").exists());
    }
}
