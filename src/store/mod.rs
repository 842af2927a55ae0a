//! Learner progress and preferences.
//!
//! A [`Store`] holds the set of completed commands, the last visited
//! tutorial and the theme. Every change is written through to a [`Storage`]
//! backend and broadcast to subscribers over a `tokio::sync::watch` channel.
//!
//! # Example
//!
//! ```rust
//! use gitfit::store::{MemoryStorage, Store};
//!
//! let store = Store::open(MemoryStorage::new()).unwrap();
//! let mut updates = store.subscribe();
//!
//! assert!(store.toggle("git add").unwrap());
//! assert!(updates.has_changed().unwrap());
//! assert!(updates.borrow_and_update().completed_commands.contains("git add"));
//! ```

mod error;
mod storage;
mod theme;

pub use error::StoreError;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use theme::Theme;

use crate::core::Vocabulary;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tokio::sync::watch;
use tracing::{debug, warn};

pub const COMPLETED_KEY: &str = "git-fit-completed-commands";
pub const LAST_TUTORIAL_KEY: &str = "git-fit-last-tutorial";
pub const THEME_KEY: &str = "git-fit-theme";

/// Snapshot of everything the store tracks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub completed_commands: BTreeSet<String>,
    pub last_visited_tutorial: u32,
    pub theme: Theme,
}

pub struct Store<S: Storage> {
    storage: S,
    state: watch::Sender<Progress>,
}

impl<S: Storage> Store<S> {
    /// Load progress from `storage`.
    ///
    /// Missing keys take their defaults. Malformed values are logged and
    /// replaced by defaults; only backend failures are errors.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        let mut progress = Progress::default();

        if let Some(raw) = storage.get(COMPLETED_KEY)? {
            match serde_json::from_str::<BTreeSet<String>>(&raw) {
                Ok(completed) => progress.completed_commands = completed,
                Err(err) => {
                    warn!(key = COMPLETED_KEY, %err, "malformed stored value, using default")
                }
            }
        }
        if let Some(raw) = storage.get(LAST_TUTORIAL_KEY)? {
            match raw.trim().parse::<u32>() {
                Ok(id) => progress.last_visited_tutorial = id,
                Err(err) => {
                    warn!(key = LAST_TUTORIAL_KEY, %err, "malformed stored value, using default")
                }
            }
        }
        if let Some(raw) = storage.get(THEME_KEY)? {
            match Theme::parse(raw.trim()) {
                Some(theme) => progress.theme = theme,
                None => warn!(key = THEME_KEY, value = %raw, "unknown theme, using default"),
            }
        }

        debug!(completed = progress.completed_commands.len(), "progress loaded");
        let (state, _) = watch::channel(progress);
        Ok(Self { storage, state })
    }

    pub fn snapshot(&self) -> Progress {
        self.state.borrow().clone()
    }

    /// Receiver notified after every change.
    pub fn subscribe(&self) -> watch::Receiver<Progress> {
        self.state.subscribe()
    }

    pub fn is_completed(&self, command: &str) -> bool {
        self.state.borrow().completed_commands.contains(command)
    }

    pub fn completed_count(&self) -> usize {
        self.state.borrow().completed_commands.len()
    }

    /// Flip `command`'s completion, returning the new state.
    pub fn toggle(&self, command: &str) -> Result<bool, StoreError> {
        let completed = !self.is_completed(command);
        self.set_completed(command, completed)?;
        Ok(completed)
    }

    /// Mark `command` as completed or not. Returns whether anything changed.
    pub fn set_completed(&self, command: &str, completed: bool) -> Result<bool, StoreError> {
        self.update(|progress| {
            if completed {
                progress.completed_commands.insert(command.to_string());
            } else {
                progress.completed_commands.remove(command);
            }
        })
    }

    pub fn last_visited_tutorial(&self) -> u32 {
        self.state.borrow().last_visited_tutorial
    }

    pub fn set_last_visited_tutorial(&self, id: u32) -> Result<bool, StoreError> {
        self.update(|progress| progress.last_visited_tutorial = id)
    }

    pub fn theme(&self) -> Theme {
        self.state.borrow().theme
    }

    pub fn set_theme(&self, theme: Theme) -> Result<bool, StoreError> {
        self.update(|progress| progress.theme = theme)
    }

    /// Forget completed commands and the last tutorial. The theme is kept.
    pub fn reset(&self) -> Result<bool, StoreError> {
        self.update(|progress| {
            progress.completed_commands.clear();
            progress.last_visited_tutorial = 0;
        })
    }

    /// Apply `change`, then notify and persist only if it changed something.
    /// The in-memory state stays updated even if persisting fails.
    fn update(&self, change: impl FnOnce(&mut Progress)) -> Result<bool, StoreError> {
        let mut previous = None;
        self.state.send_if_modified(|progress| {
            let before = progress.clone();
            change(progress);
            let modified = *progress != before;
            if modified {
                previous = Some(before);
            }
            modified
        });

        let Some(before) = previous else {
            return Ok(false);
        };
        let after = self.snapshot();
        self.persist(&before, &after)?;
        Ok(true)
    }

    fn persist(&self, before: &Progress, after: &Progress) -> Result<(), StoreError> {
        if before.completed_commands != after.completed_commands {
            let json = serde_json::to_string(&after.completed_commands)?;
            self.storage.set(COMPLETED_KEY, &json)?;
        }
        if before.last_visited_tutorial != after.last_visited_tutorial {
            self.storage
                .set(LAST_TUTORIAL_KEY, &after.last_visited_tutorial.to_string())?;
        }
        if before.theme != after.theme {
            self.storage.set(THEME_KEY, after.theme.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_persists_as_json_array() {
        let storage = MemoryStorage::new();
        let store = Store::open(storage.clone()).unwrap();

        assert!(store.toggle("git commit").unwrap());
        assert!(store.toggle("git add").unwrap());
        assert_eq!(
            storage.get(COMPLETED_KEY).unwrap().as_deref(),
            Some(r#"["git add","git commit"]"#)
        );

        assert!(!store.toggle("git add").unwrap());
        assert!(!store.is_completed("git add"));
        assert_eq!(store.completed_count(), 1);
    }

    #[test]
    fn unchanged_values_are_not_written() {
        let storage = MemoryStorage::new();
        let store = Store::open(storage.clone()).unwrap();

        assert!(!store.set_completed("git push", false).unwrap());
        assert!(!store.set_last_visited_tutorial(0).unwrap());
        assert!(storage.is_empty());

        assert!(store.set_theme(Theme::Dark).unwrap());
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn open_reads_existing_values() {
        let storage = MemoryStorage::new()
            .with_entry(COMPLETED_KEY, r#"["git init"]"#)
            .with_entry(LAST_TUTORIAL_KEY, "3")
            .with_entry(THEME_KEY, "high-contrast");
        let store = Store::open(storage).unwrap();

        assert!(store.is_completed("git init"));
        assert_eq!(store.last_visited_tutorial(), 3);
        assert_eq!(store.theme(), Theme::HighContrast);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let storage = MemoryStorage::new()
            .with_entry(COMPLETED_KEY, "{oops")
            .with_entry(LAST_TUTORIAL_KEY, "three")
            .with_entry(THEME_KEY, "neon");
        let store = Store::open(storage).unwrap();
        assert_eq!(store.snapshot(), Progress::default());
    }

    #[test]
    fn reset_keeps_theme() {
        let storage = MemoryStorage::new();
        let store = Store::open(storage.clone()).unwrap();
        store.toggle("git add").unwrap();
        store.set_last_visited_tutorial(4).unwrap();
        store.set_theme(Theme::Light).unwrap();

        assert!(store.reset().unwrap());
        assert_eq!(store.completed_count(), 0);
        assert_eq!(store.last_visited_tutorial(), 0);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(storage.get(COMPLETED_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.get(LAST_TUTORIAL_KEY).unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn subscribers_see_changes_only() {
        let store = Store::open(MemoryStorage::new()).unwrap();
        let mut rx = store.subscribe();

        store.set_completed("git add", false).unwrap();
        assert!(!rx.has_changed().unwrap());

        store.set_last_visited_tutorial(2).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().last_visited_tutorial, 2);
    }

    #[test]
    fn file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let store = Store::open(FileStorage::new(&path)).unwrap();
        store.toggle("git merge").unwrap();
        store.set_theme(Theme::Dark).unwrap();
        drop(store);

        let store = Store::open(FileStorage::new(&path)).unwrap();
        assert!(store.is_completed("git merge"));
        assert_eq!(store.theme(), Theme::Dark);
    }
}
