use crate::encode::encode_project_dir;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Reserved prefix for sub-agent logs, which are never user-visible sessions
const AGENT_FILE_PREFIX: &str = "agent-";

/// Well-known root holding one encoded directory per project
pub fn sessions_root() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| Error::Config("could not determine home directory".to_string()))?;
    Ok(home.join(".claude").join("projects"))
}

/// Resolve the session directory for a project under `~/.claude/projects`
pub fn find_session_dir(project_path: &Path) -> Result<PathBuf> {
    find_session_dir_under(&sessions_root()?, project_path)
}

/// Resolve the session directory for a project under an explicit root
pub fn find_session_dir_under(projects_root: &Path, project_path: &Path) -> Result<PathBuf> {
    let session_dir = projects_root.join(encode_project_dir(project_path));

    if !session_dir.is_dir() {
        return Err(Error::SessionDirNotFound {
            searched: session_dir,
            project: project_path.to_path_buf(),
        });
    }

    Ok(session_dir)
}

/// List eligible session files directly under a session directory.
///
/// Eligible means a `.jsonl` extension and no `agent-` prefix.
pub fn list_session_files(session_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(session_dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if path.extension().is_none_or(|e| e != "jsonl") {
            continue;
        }
        if entry
            .file_name()
            .to_string_lossy()
            .starts_with(AGENT_FILE_PREFIX)
        {
            continue;
        }

        files.push(path);
    }

    Ok(files)
}

/// Select the most recently modified eligible session file.
///
/// Equal modification times fall back to the lexicographically greatest
/// filename so repeated calls on an unchanged directory agree.
pub fn find_latest_session(session_dir: &Path) -> Result<PathBuf> {
    let mut latest: Option<(SystemTime, PathBuf)> = None;

    for path in list_session_files(session_dir)? {
        let modified = std::fs::metadata(&path)?.modified()?;

        let newer = match &latest {
            None => true,
            Some((best_time, best_path)) => {
                modified > *best_time || (modified == *best_time && path > *best_path)
            }
        };
        if newer {
            latest = Some((modified, path));
        }
    }

    latest
        .map(|(_, path)| path)
        .ok_or_else(|| Error::NoSessionFiles {
            dir: session_dir.to_path_buf(),
        })
}
