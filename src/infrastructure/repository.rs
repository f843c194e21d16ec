//! File system repository
//!
//! A journal is a directory holding `.moodjour/config.toml`,
//! `.moodjour/goals.toml` and one TOML file per day under `entries/`, named
//! `YYYY-MM-DD.toml`.

use crate::domain::{GoalBook, JournalEntry};
use crate::error::{MoodjourError, Result};
use crate::infrastructure::config::{Config, META_DIR};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Directory (relative to the root) holding entry files
pub const ENTRIES_DIR: &str = "entries";

/// Goal list file inside the metadata directory
pub const GOALS_FILE: &str = "goals.toml";

/// Environment variable pointing at a journal root
pub const ROOT_ENV: &str = "MOODJOUR_ROOT";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodjour/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodjour/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodjour directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodjour and entries directories
    fn initialize(&self) -> Result<()>;

    /// Load the entry for a date, if one was written
    /// Load stored goals; an absent file means no goals
    fn load_goals(&self) -> Result<GoalBook>;

    /// Persist the goal list
    fn save_goals(&self, goals: &GoalBook) -> Result<()>;

    fn load_entry(&self, date: NaiveDate) -> Result<Option<JournalEntry>>;

    /// Create or replace the entry for its date
    fn save_entry(&self, entry: &JournalEntry) -> Result<()>;

    /// Entries within an inclusive date range, newest first
    fn list_entries(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Result<Vec<JournalEntry>>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODJOUR_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_meta_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodjourError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'moodjour init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    META_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_meta_dir(&current) {
                debug!(root = %current.display(), "found journal root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(MoodjourError::NotJournalDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_meta_dir(path: &Path) -> bool {
        path.join(META_DIR).is_dir()
    }

    /// Path of the entry file for a date
    pub fn entry_path(&self, date: NaiveDate) -> PathBuf {
        self.root
            .join(ENTRIES_DIR)
            .join(format!("{}.toml", date.format("%Y-%m-%d")))
    }

    /// Path of the goal list
    pub fn goals_path(&self) -> PathBuf {
        self.root.join(META_DIR).join(GOALS_FILE)
    }

    /// Path used for editor drafts
    pub fn draft_path(&self) -> PathBuf {
        self.root.join(META_DIR).join("draft.txt")
    }

    fn date_from_filename(name: &str) -> Option<NaiveDate> {
        let stem = name.strip_suffix(".toml")?;
        NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
    }

    fn read_entry_file(path: &Path) -> Result<JournalEntry> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Write using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.moodjour-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("entry.toml"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_meta_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let meta_dir = self.root.join(META_DIR);

        if meta_dir.exists() {
            return Err(MoodjourError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&meta_dir)?;
        fs::create_dir_all(self.root.join(ENTRIES_DIR))?;
        Ok(())
    }

    fn load_goals(&self) -> Result<GoalBook> {
        let path = self.goals_path();
        if !path.exists() {
            return Ok(GoalBook::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn save_goals(&self, goals: &GoalBook) -> Result<()> {
        let path = self.goals_path();
        Self::write_atomic(&path, &toml::to_string_pretty(goals)?)?;
        debug!(count = goals.goals.len(), "saved goals");
        Ok(())
    }

    fn load_entry(&self, date: NaiveDate) -> Result<Option<JournalEntry>> {
        let path = self.entry_path(date);
        if !path.exists() {
            return Ok(None);
        }
        Self::read_entry_file(&path).map(Some)
    }

    fn save_entry(&self, entry: &JournalEntry) -> Result<()> {
        let path = self.entry_path(entry.date);
        let contents = toml::to_string_pretty(entry)?;
        Self::write_atomic(&path, &contents)?;
        debug!(path = %path.display(), "saved entry");
        Ok(())
    }

    fn list_entries(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Result<Vec<JournalEntry>> {
        let entries_dir = self.root.join(ENTRIES_DIR);
        if !entries_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut dated: Vec<(NaiveDate, PathBuf)> = Vec::new();
        for item in WalkDir::new(&entries_dir).min_depth(1).max_depth(1) {
            let Ok(item) = item else {
                continue;
            };
            if !item.file_type().is_file() {
                continue;
            }
            let Some(date) = item.file_name().to_str().and_then(Self::date_from_filename) else {
                continue;
            };
            if from.is_some_and(|f| date < f) || to.is_some_and(|t| date > t) {
                continue;
            }
            dated.push((date, item.into_path()));
        }

        // Newest first
        dated.sort_by(|a, b| b.0.cmp(&a.0));

        let mut entries = Vec::with_capacity(dated.len());
        for (date, path) in dated {
            if limit.is_some_and(|n| entries.len() >= n) {
                break;
            }
            match Self::read_entry_file(&path) {
                Ok(mut entry) => {
                    // The filename is authoritative for the day
                    entry.date = date;
                    entries.push(entry);
                }
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable entry"),
            }
        }

        debug!(count = entries.len(), "loaded entries");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn init_repo() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        (temp, repo)
    }

    fn write_entry(repo: &FileSystemRepository, d: NaiveDate, mood: &str) {
        let mut entry = JournalEntry::new(d, format!("Entry for {}", d));
        entry.mood_suggested = Some(mood.to_string());
        repo.save_entry(&entry).unwrap();
    }

    #[test]
    fn test_initialize_creates_dirs() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert!(!repo.is_initialized());

        repo.initialize().unwrap();

        assert!(repo.is_initialized());
        assert!(temp.path().join(".moodjour").is_dir());
        assert!(temp.path().join("entries").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_temp, repo) = init_repo();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (temp, _repo) = init_repo();
        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let found = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_not_initialized() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()).unwrap_err() {
            MoodjourError::NotJournalDirectory(_) => {}
            other => panic!("Expected NotJournalDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let (_temp, repo) = init_repo();
        let mut config = Config::new();
        config.top_themes = 2;
        repo.save_config(&config).unwrap();

        assert_eq!(repo.load_config().unwrap().top_themes, 2);
    }

    #[test]
    fn test_goals_default_to_empty_and_roundtrip() {
        let (temp, repo) = init_repo();
        assert_eq!(repo.load_goals().unwrap(), GoalBook::default());

        let mut book = GoalBook::default();
        let created = chrono::DateTime::from_timestamp(1_737_100_800, 0).unwrap();
        book.add(crate::domain::GoalPeriod::Monthly, "Finish the course", created)
            .unwrap();
        repo.save_goals(&book).unwrap();

        assert!(temp.path().join(".moodjour/goals.toml").exists());
        assert_eq!(repo.load_goals().unwrap(), book);
    }

    #[test]
    fn test_save_and_load_entry() {
        let (temp, repo) = init_repo();
        let d = date(2025, 1, 17);
        let mut entry = JournalEntry::new(d, "Met a friend for coffee");
        entry.mood_suggested = Some("Content".to_string());
        entry.sleep_hours = Some(7.5);
        repo.save_entry(&entry).unwrap();

        assert!(temp.path().join("entries/2025-01-17.toml").exists());
        assert_eq!(repo.load_entry(d).unwrap(), Some(entry));
        assert_eq!(repo.load_entry(date(2025, 1, 18)).unwrap(), None);
    }

    #[test]
    fn test_save_entry_overwrites_without_leftovers() {
        let (temp, repo) = init_repo();
        let d = date(2025, 1, 17);
        write_entry(&repo, d, "Calm");
        write_entry(&repo, d, "Tired");

        let loaded = repo.load_entry(d).unwrap().unwrap();
        assert_eq!(loaded.mood_suggested.as_deref(), Some("Tired"));

        let files: Vec<_> = fs::read_dir(temp.path().join("entries")).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_list_entries_newest_first() {
        let (_temp, repo) = init_repo();
        write_entry(&repo, date(2025, 1, 15), "Calm");
        write_entry(&repo, date(2025, 1, 20), "Tired");
        write_entry(&repo, date(2025, 1, 10), "Hopeful");

        let dates: Vec<NaiveDate> = repo
            .list_entries(None, None, None)
            .unwrap()
            .into_iter()
            .map(|e| e.date)
            .collect();
        assert_eq!(
            dates,
            vec![date(2025, 1, 20), date(2025, 1, 15), date(2025, 1, 10)]
        );
    }

    #[test]
    fn test_list_entries_with_range_and_limit() {
        let (_temp, repo) = init_repo();
        for day in 10..=20 {
            write_entry(&repo, date(2025, 1, day), "Calm");
        }

        let ranged = repo
            .list_entries(Some(date(2025, 1, 12)), Some(date(2025, 1, 14)), None)
            .unwrap();
        assert_eq!(ranged.len(), 3);

        let limited = repo.list_entries(None, None, Some(4)).unwrap();
        assert_eq!(limited.len(), 4);
        assert_eq!(limited[0].date, date(2025, 1, 20));
    }

    #[test]
    fn test_list_entries_skips_foreign_and_broken_files() {
        let (temp, repo) = init_repo();
        write_entry(&repo, date(2025, 1, 17), "Calm");
        fs::write(temp.path().join("entries/notes.txt"), "hello").unwrap();
        fs::write(temp.path().join("entries/2025-01-18.toml"), "text = [").unwrap();
        fs::create_dir(temp.path().join("entries/2025-01-19.toml")).unwrap();

        let entries = repo.list_entries(None, None, None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, date(2025, 1, 17));
    }

    #[test]
    fn test_list_entries_uninitialized_entries_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert!(repo.list_entries(None, None, None).unwrap().is_empty());
    }

    #[test]
    fn test_discover_with_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);
        let (temp, _repo) = init_repo();

        std::env::set_var(ROOT_ENV, temp.path());
        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_root_env_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);
        let temp = TempDir::new().unwrap();

        std::env::set_var(ROOT_ENV, temp.path());
        match FileSystemRepository::discover().unwrap_err() {
            MoodjourError::Config(msg) => assert!(msg.contains("MOODJOUR_ROOT")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
