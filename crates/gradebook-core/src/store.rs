//! Store management for gradebook
//!
//! The store is the directory holding one ledger and its config.
//! Default location: `.gradebook/` (hidden, git-trackable)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assessment::Assessment;
use crate::config::StoreConfig;
use crate::error::{GradebookError, Result};
use crate::ledger::Ledger;

/// Default (hidden) store directory name
pub const DEFAULT_STORE_DIR: &str = ".gradebook";
/// Visible store directory name (init --visible)
pub const VISIBLE_STORE_DIR: &str = "gradebook";
/// Config file name within the store
pub const CONFIG_FILE: &str = "config.toml";
/// Ledger file name within the store
pub const LEDGER_FILE: &str = "ledger.json";

/// Current ledger file format version
pub const LEDGER_FORMAT_VERSION: u32 = 1;

/// Options for store initialization
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Use visible store directory (gradebook/ instead of .gradebook/)
    pub visible: bool,
    /// Course title to record in the config
    pub course: Option<String>,
}

/// On-disk serialization of a ledger
#[derive(Debug, Serialize, Deserialize)]
struct LedgerFile {
    version: u32,
    next_id: u64,
    assessments: Vec<Assessment>,
}

/// The gradebook store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store
    root: PathBuf,
    /// Store configuration
    config: StoreConfig,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let mut current = root.to_path_buf();

        loop {
            // Check for default hidden store
            let store_path = current.join(DEFAULT_STORE_DIR);
            if store_path.is_dir() {
                return Self::open(&store_path);
            }

            // Check for visible store
            let visible_path = current.join(VISIBLE_STORE_DIR);
            if visible_path.is_dir() {
                return Self::open(&visible_path);
            }

            // Move up to parent directory
            match current.parent() {
                Some(parent) if parent != current => {
                    current = parent.to_path_buf();
                }
                _ => {
                    // Reached filesystem root
                    return Err(GradebookError::StoreNotFound {
                        search_root: root.to_path_buf(),
                    });
                }
            }
        }
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(GradebookError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        if !path.join(LEDGER_FILE).is_file() {
            return Err(GradebookError::invalid_store(format!(
                "missing {} in {}",
                LEDGER_FILE,
                path.display()
            )));
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            // Sensible defaults when the config was never written
            StoreConfig::default()
        };

        Ok(Store {
            root: path.to_path_buf(),
            config,
        })
    }

    /// Initialize a new store under the given project root.
    pub fn init(project_root: &Path, options: InitOptions) -> Result<Self> {
        let store_name = if options.visible {
            VISIBLE_STORE_DIR
        } else {
            DEFAULT_STORE_DIR
        };

        let store_path = project_root.join(store_name);
        Self::init_at(&store_path, options)
    }

    /// Initialize a store at an explicit store root path.
    ///
    /// Idempotent: an existing layout is kept, an existing ledger file
    /// is never rewritten.
    pub fn init_at(store_root: &Path, options: InitOptions) -> Result<Self> {
        fs::create_dir_all(store_root)?;

        // Create default config if missing (avoid rewriting on subsequent init)
        let config_path = store_root.join(CONFIG_FILE);
        let config_existed = config_path.exists();
        let mut config = if config_existed {
            StoreConfig::load(&config_path)?
        } else {
            StoreConfig::default()
        };

        if options.course.is_some() {
            config.course = options.course.clone();
        }

        // Save config if it's new or if a course title was set
        if !config_existed || options.course.is_some() {
            config.save(&config_path)?;
        }

        let store = Store {
            root: store_root.to_path_buf(),
            config,
        };

        if !store.ledger_path().exists() {
            store.save_ledger(&Ledger::new())?;
        }

        Ok(store)
    }

    /// Get the store root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Get the ledger file path
    pub fn ledger_path(&self) -> PathBuf {
        self.root.join(LEDGER_FILE)
    }

    /// Load the ledger from disk
    pub fn load_ledger(&self) -> Result<Ledger> {
        let content = fs::read_to_string(self.ledger_path())?;
        let file: LedgerFile = serde_json::from_str(&content)
            .map_err(|e| GradebookError::invalid_store(format!("malformed ledger file: {e}")))?;

        if file.version != LEDGER_FORMAT_VERSION {
            return Err(GradebookError::invalid_store(format!(
                "unsupported ledger version {} (expected {})",
                file.version, LEDGER_FORMAT_VERSION
            )));
        }

        Ledger::from_parts(file.next_id, file.assessments)
    }

    /// Write the ledger to disk (temp file + rename, so a crash mid-write
    /// leaves the previous ledger intact)
    pub fn save_ledger(&self, ledger: &Ledger) -> Result<()> {
        let file = LedgerFile {
            version: LEDGER_FORMAT_VERSION,
            next_id: ledger.next_id(),
            assessments: ledger.assessments().cloned().collect(),
        };
        let content = serde_json::to_string_pretty(&file)?;

        let path = self.ledger_path();
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Draft;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn draft(title: &str, weight: f64) -> Draft {
        Draft {
            title: title.to_string(),
            weight_pct: weight,
            due_date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            score_pct: None,
        }
    }

    #[test]
    fn test_init_creates_layout() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        assert_eq!(store.root(), dir.path().join(DEFAULT_STORE_DIR));
        assert!(store.config_path().is_file());
        assert!(store.ledger_path().is_file());
        assert!(store.load_ledger().unwrap().is_empty());
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        let mut ledger = store.load_ledger().unwrap();
        ledger.add(draft("Midterm", 20.0)).unwrap();
        store.save_ledger(&ledger).unwrap();

        // A second init keeps the existing ledger
        let again = Store::init(dir.path(), InitOptions::default()).unwrap();
        assert_eq!(again.load_ledger().unwrap().len(), 1);
    }

    #[test]
    fn test_init_records_course() {
        let dir = tempdir().unwrap();
        let store = Store::init(
            dir.path(),
            InitOptions {
                visible: false,
                course: Some("Systems Programming".to_string()),
            },
        )
        .unwrap();
        assert_eq!(store.config().course.as_deref(), Some("Systems Programming"));

        let reopened = Store::open(store.root()).unwrap();
        assert_eq!(
            reopened.config().course.as_deref(),
            Some("Systems Programming")
        );
    }

    #[test]
    fn test_discover_from_nested_directory() {
        let dir = tempdir().unwrap();
        Store::init(dir.path(), InitOptions::default()).unwrap();

        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let discovered = Store::discover(&nested).unwrap();
        assert_eq!(discovered.root(), dir.path().join(DEFAULT_STORE_DIR));
    }

    #[test]
    fn test_discover_visible_store() {
        let dir = tempdir().unwrap();
        Store::init(
            dir.path(),
            InitOptions {
                visible: true,
                course: None,
            },
        )
        .unwrap();

        let discovered = Store::discover(dir.path()).unwrap();
        assert_eq!(discovered.root(), dir.path().join(VISIBLE_STORE_DIR));
    }

    #[test]
    fn test_discover_missing_store() {
        let dir = tempdir().unwrap();
        let err = Store::discover(dir.path()).unwrap_err();
        assert!(matches!(err, GradebookError::StoreNotFound { .. }));
    }

    #[test]
    fn test_ledger_round_trip() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();

        let mut ledger = store.load_ledger().unwrap();
        let id = ledger.add(draft("Midterm", 20.0)).unwrap().id;
        ledger.add(draft("Final", 40.0)).unwrap();
        store.save_ledger(&ledger).unwrap();

        let reloaded = store.load_ledger().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get(id).unwrap().title, "Midterm");
        assert_eq!(reloaded.next_id(), ledger.next_id());
    }

    #[test]
    fn test_open_rejects_malformed_ledger() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();
        fs::write(store.ledger_path(), "not json").unwrap();

        let err = store.load_ledger().unwrap_err();
        assert!(matches!(err, GradebookError::InvalidStore { .. }));
    }

    #[test]
    fn test_load_rejects_unsupported_version() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path(), InitOptions::default()).unwrap();
        fs::write(
            store.ledger_path(),
            r#"{"version": 99, "next_id": 1, "assessments": []}"#,
        )
        .unwrap();

        let err = store.load_ledger().unwrap_err();
        assert!(matches!(err, GradebookError::InvalidStore { .. }));
    }
}
