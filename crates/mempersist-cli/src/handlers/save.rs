use crate::config::Config;
use crate::views::save as view;
use anyhow::Result;
use mempersist_client::ApiClient;
use mempersist_session as session;

pub fn handle(title: Option<&str>, project_path: Option<&str>, debug: bool) -> Result<()> {
    let config = Config::from_env(project_path)?;

    view::print_header();

    let session_dir = session::find_session_dir(&config.project_path)?;
    if debug {
        view::print_debug(&format!("session dir: {}", session_dir.display()));
    }

    let session_file = session::find_latest_session(&session_dir)?;
    let size_bytes = std::fs::metadata(&session_file)?.len();
    view::print_session(&config.project_path, &session_file, size_bytes);

    view::print_parsing(config.max_messages);
    let parsed = session::parse_session_file(&session_file, config.max_messages)?;
    view::print_extracted(
        parsed.messages.len(),
        parsed.total_lines,
        parsed.skipped_lines,
    );

    let payload =
        session::build_thread_payload(&config.project_path, &session_file, parsed, title)?;
    view::print_thread(&payload);

    view::print_uploading(&config.api_url);
    let client = ApiClient::new(&config.api_url, &config.auth_token);
    let response = client.save_thread(&payload)?;

    view::print_success(&response);
    Ok(())
}
