use std::path::Path;

/// Encode a project path to its Claude Code log-directory name.
///
/// Claude Code stores sessions under `~/.claude/projects/<encoded>` where the
/// encoded name is derived from the absolute project path: a separator
/// followed by a dot (the start of a hidden segment) becomes `--`, every
/// remaining separator becomes `-`, everything else passes through.
///
/// - `/home/user/project`        -> `-home-user-project`
/// - `/home/user/.claude/skills` -> `-home-user--claude-skills`
///
/// The scheme is ambiguous for segments that contain literal hyphens
/// (`/a/b` and `/a-b` collide); no decoder exists for that reason.
pub fn encode_project_dir(project_path: &Path) -> String {
    let path_str = project_path.to_string_lossy();
    let encoded = path_str.replace("/.", "--").replace('/', "-");
    format!("-{}", encoded.trim_start_matches('-'))
}
