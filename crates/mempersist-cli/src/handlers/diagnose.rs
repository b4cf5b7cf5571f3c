use crate::config::Config;
use crate::views::diagnose as view;
use anyhow::Result;
use mempersist_client::ApiClient;
use mempersist_session as session;

pub fn handle(project_path: Option<&str>) -> Result<()> {
    let config = Config::from_env(project_path)?;
    let mut all_passed = true;

    view::print_header();

    view::print_section(&format!("Checking API connectivity: {}", config.api_url));
    let client = ApiClient::new(&config.api_url, &config.auth_token);
    let reachable = client.health_check();
    view::print_check("API is reachable and healthy", reachable);
    all_passed &= reachable;

    view::print_section("Checking authentication...");
    let authenticated = client.health_check();
    view::print_check("Authentication successful", authenticated);
    all_passed &= authenticated;

    view::print_section(&format!(
        "Checking project: {}",
        config.project_path.display()
    ));
    if config.project_path.exists() {
        view::print_check("Project directory exists", true);

        match session::find_session_dir(&config.project_path) {
            Ok(dir) => {
                view::print_check(&format!("Session directory found: {}", dir.display()), true);
                let count = session::list_session_files(&dir).map(|f| f.len()).unwrap_or(0);
                view::print_info(&format!("Found {} session file(s)", count));
            }
            Err(session::Error::SessionDirNotFound { searched, .. }) => {
                view::print_check("Session directory not found", false);
                view::print_info(&format!("Searched: {}", searched.display()));
                all_passed = false;
            }
            Err(err) => {
                view::print_check(&format!("Session lookup failed: {}", err), false);
                all_passed = false;
            }
        }
    } else {
        view::print_check("Project directory does not exist", false);
        all_passed = false;
    }

    view::print_summary(all_passed);

    if !all_passed {
        anyhow::bail!("some checks failed");
    }
    Ok(())
}
