use crate::errors::LoadError;
use crate::model::{Resume, Skill};
use config::{Config as ConfigCrate, File, FileFormat};
use std::fs;
use std::path::{Path, PathBuf};

/// Probed in order, relative to the working directory, when no path is configured.
pub const DEFAULT_LOCATIONS: [&str; 2] = ["Resources/resume.yaml", "resume.yaml"];

/// Finds the resume document. An explicit path is never second-guessed:
/// if it does not exist the fallbacks are not consulted.
pub fn locate(explicit: Option<&Path>, base: &Path) -> Result<PathBuf, LoadError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(LoadError::NotFound {
            tried: vec![path.to_path_buf()],
        });
    }

    let tried: Vec<PathBuf> = DEFAULT_LOCATIONS.iter().map(|p| base.join(p)).collect();
    if let Some(found) = tried.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }
    Err(LoadError::NotFound { tried })
}

/// Locates and loads the resume, returning the path it came from.
pub fn load(explicit: Option<&Path>) -> Result<(Resume, PathBuf), LoadError> {
    let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let path = locate(explicit, &base)?;
    let resume = load_file(&path)?;
    Ok((resume, path))
}

pub fn load_file(path: &Path) -> Result<Resume, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let resume = parse_str(&content, format_for(path)).map_err(|detail| LoadError::Malformed {
        path: path.to_path_buf(),
        detail,
    })?;

    tracing::info!(
        path = %path.display(),
        experience = resume.experience.len(),
        projects = resume.personal_projects.len(),
        contributions = resume.open_source_contributions.len(),
        "resume loaded"
    );
    Ok(resume)
}

/// Decodes and validates a document. The error string names the offending
/// field or record so it can be shown to the user as is.
pub fn parse_str(content: &str, format: FileFormat) -> Result<Resume, String> {
    let resume: Resume = ConfigCrate::builder()
        .add_source(File::from_str(content, format))
        .build()
        .and_then(|c| c.try_deserialize::<Resume>())
        .map_err(|e| e.to_string())?;

    validate(&resume)?;
    Ok(resume)
}

pub fn format_for(path: &Path) -> FileFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("json") => FileFormat::Json,
        Some("toml") => FileFormat::Toml,
        _ => FileFormat::Yaml,
    }
}

fn validate(resume: &Resume) -> Result<(), String> {
    if resume.name.trim().is_empty() {
        return Err("name is empty".to_string());
    }
    check_skill_names("skills.programming_languages", &resume.skills.programming_languages)?;
    check_skill_names("skills.sdks_apis", &resume.skills.sdks_apis)?;
    Ok(())
}

fn check_skill_names(list: &str, skills: &[Skill]) -> Result<(), String> {
    match skills.iter().position(|s| s.name.trim().is_empty()) {
        Some(index) => Err(format!("{list}[{index}].name is empty")),
        None => Ok(()),
    }
}
