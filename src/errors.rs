use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Resume file not found (looked in: {})", display_paths(.tried))]
    NotFound { tried: Vec<PathBuf> },

    #[error("Could not read resume file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Resume file {} is malformed: {detail}", .path.display())]
    Malformed { path: PathBuf, detail: String },
}

#[derive(Error, Debug)]
pub enum StateError {
    #[error("I/O error on state file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("State file {} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_every_path() {
        let err = LoadError::NotFound {
            tried: vec![
                PathBuf::from("Resources/resume.yaml"),
                PathBuf::from("resume.yaml"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Resume file not found (looked in: Resources/resume.yaml, resume.yaml)"
        );
    }

    #[test]
    fn test_malformed_names_path_and_detail() {
        let err = LoadError::Malformed {
            path: PathBuf::from("resume.yaml"),
            detail: "missing field `company`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Resume file resume.yaml is malformed: missing field `company`"
        );
    }
}
