use crate::errors::StateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Which collapsible entries the reader has folded away. Keys look like
/// `experience:<title> at <company>`, `project:<name>`, `contribution:<name>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionState {
    #[serde(default)]
    collapsed: BTreeSet<String>,
}

impl SectionState {
    pub fn is_collapsed(&self, key: &str) -> bool {
        self.collapsed.contains(key)
    }

    pub fn set_collapsed(&mut self, key: &str, collapsed: bool) {
        if collapsed {
            self.collapsed.insert(key.to_string());
        } else {
            self.collapsed.remove(key);
        }
    }

    /// Flips one entry and returns whether it is now collapsed.
    pub fn toggle(&mut self, key: &str) -> bool {
        let collapsed = !self.is_collapsed(key);
        self.set_collapsed(key, collapsed);
        collapsed
    }

    pub fn collapsed_count(&self) -> usize {
        self.collapsed.len()
    }

    /// A missing file is an empty state, not an error.
    pub fn load(path: &Path) -> Result<Self, StateError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| StateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| StateError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like `load`, but a broken store only costs the saved preferences.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(state) => {
                tracing::debug!(path = %path.display(), collapsed = state.collapsed_count(), "section state loaded");
                state
            }
            Err(err) => {
                tracing::warn!(%err, "ignoring unreadable section state");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        let io_err = |source| StateError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| StateError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_toggle() {
        let mut state = SectionState::default();
        assert!(state.toggle("project:Tool"));
        assert!(state.is_collapsed("project:Tool"));
        assert!(!state.toggle("project:Tool"));
        assert!(!state.is_collapsed("project:Tool"));
    }

    #[test]
    fn test_missing_file_is_empty_state() {
        let dir = TempDir::new().unwrap();
        let state = SectionState::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(state, SectionState::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut state = SectionState::default();
        state.set_collapsed("experience:Engineer at Acme", true);
        state.save(&path).unwrap();

        let loaded = SectionState::load(&path).unwrap();
        assert!(loaded.is_collapsed("experience:Engineer at Acme"));
        assert_eq!(loaded.collapsed_count(), 1);
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(SectionState::load(&path), Err(StateError::Json { .. })));
        assert_eq!(SectionState::load_or_default(&path), SectionState::default());
    }
}
