use anyhow::Result;
use std::path::{Path, PathBuf};

/// Normalize a path for lookup (resolve to absolute, canonicalize if possible)
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}

/// Resolve the project path based on priority:
/// 1. Explicit value (--project-path flag)
/// 2. PROJECT_PATH environment variable
/// 3. Current working directory
pub fn resolve_project_path(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(normalize_path(Path::new(path)));
    }

    if let Ok(env_path) = std::env::var("PROJECT_PATH") {
        return Ok(normalize_path(Path::new(&env_path)));
    }

    let cwd = std::env::current_dir()?;
    Ok(cwd)
}
