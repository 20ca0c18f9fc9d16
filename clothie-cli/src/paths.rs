//! Where clothie keeps its session and logs.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "clothie";
const APPLICATION: &str = "clothie";

const SESSION_FILE: &str = "session.json";
const LOG_PREFIX: &str = "clothie";

/// Archived logs kept next to the current one.
const KEEP_LOGS: usize = 10;

#[derive(Debug, Clone)]
pub struct Paths {
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl Paths {
    pub fn new(data_dir: impl Into<PathBuf>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Platform directories, or `None` if there is no home directory.
    ///
    /// The session lives in the data dir (`~/.local/share/clothie` on Linux),
    /// logs in the cache dir (`~/.cache/clothie`).
    pub fn from_project_dirs() -> Option<Self> {
        let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)?;
        Some(Self::new(dirs.data_dir(), dirs.cache_dir()))
    }

    pub fn session_file(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }

    /// The log file of the current run.
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(format!("{}.log", LOG_PREFIX))
    }

    /// Archive the previous run's log as `clothie-<timestamp>.log` and prune
    /// archives beyond [`KEEP_LOGS`], oldest first.
    ///
    /// Archive names sort chronologically, so pruning goes by name.
    pub fn rotate_logs(&self) -> io::Result<()> {
        let current = self.log_file();
        if current.exists() {
            let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S%.3f");
            fs::rename(&current, self.log_dir.join(format!("{}-{}.log", LOG_PREFIX, stamp)))?;
        }

        let mut archived = self.archived_logs()?;
        archived.sort();
        let excess = archived.len().saturating_sub(KEEP_LOGS);
        for path in &archived[..excess] {
            log::debug!("removing old log {}", path.display());
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn archived_logs(&self) -> io::Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.log_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let prefix = format!("{}-", LOG_PREFIX);

        let mut logs = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let is_archive = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&prefix) && name.ends_with(".log"));
            if is_archive {
                logs.push(path);
            }
        }
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_temp() -> (tempfile::TempDir, Paths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::new(dir.path().join("data"), dir.path().join("logs"));
        (dir, paths)
    }

    fn log_names(paths: &Paths) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&paths.log_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_layout() {
        let paths = Paths::new("/d", "/l");
        assert_eq!(paths.session_file(), PathBuf::from("/d/session.json"));
        assert_eq!(paths.log_file(), PathBuf::from("/l/clothie.log"));
    }

    #[test]
    fn test_rotate_without_log_dir() {
        let (_dir, paths) = in_temp();
        paths.rotate_logs().unwrap();
        assert!(!paths.log_dir.exists());
    }

    #[test]
    fn test_rotate_archives_current_log() {
        let (_dir, paths) = in_temp();
        fs::create_dir_all(&paths.log_dir).unwrap();
        fs::write(paths.log_file(), "previous run").unwrap();

        paths.rotate_logs().unwrap();

        assert!(!paths.log_file().exists());
        let names = log_names(&paths);
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("clothie-") && names[0].ends_with(".log"));
        assert_eq!(fs::read_to_string(paths.log_dir.join(&names[0])).unwrap(), "previous run");
    }

    #[test]
    fn test_rotate_prunes_oldest_archives() {
        let (_dir, paths) = in_temp();
        fs::create_dir_all(&paths.log_dir).unwrap();
        for day in 1..=12 {
            fs::write(paths.log_dir.join(format!("clothie-202601{:02}-120000.000.log", day)), "").unwrap();
        }
        fs::write(paths.log_dir.join("notes.log"), "").unwrap();

        paths.rotate_logs().unwrap();

        let names = log_names(&paths);
        assert_eq!(names.len(), KEEP_LOGS + 1);
        assert!(!names.contains(&"clothie-20260101-120000.000.log".to_string()));
        assert!(!names.contains(&"clothie-20260102-120000.000.log".to_string()));
        assert!(names.contains(&"clothie-20260103-120000.000.log".to_string()));
        assert!(names.contains(&"notes.log".to_string()));
    }
}
