use mempersist_client::SaveResponse;
use mempersist_types::ThreadPayload;
use owo_colors::OwoColorize;
use std::path::Path;

fn prefix() -> String {
    "[mem-persist]".blue().to_string()
}

pub fn print_header() {
    println!("{} Saving current session...", prefix());
    println!();
}

pub fn print_debug(message: &str) {
    println!("{} {}", prefix(), message.dimmed());
}

pub fn print_session(project_path: &Path, session_file: &Path, size_bytes: u64) {
    let project_name = project_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| project_path.display().to_string());
    let file_name = session_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| session_file.display().to_string());

    println!("Project: {}", project_name);
    println!("Session: {} ({:.1} KB)", file_name, size_bytes as f64 / 1024.0);
}

pub fn print_parsing(max_messages: usize) {
    println!();
    if max_messages == 0 {
        println!("{} Parsing session (no limit)...", prefix());
    } else {
        println!(
            "{} Parsing session (max {} messages)...",
            prefix(),
            max_messages
        );
    }
}

pub fn print_extracted(extracted: usize, total_lines: usize, skipped_lines: usize) {
    println!("Extracted {} messages from {} lines", extracted, total_lines);
    if skipped_lines > 0 {
        println!(
            "{}",
            format!("Skipped {} malformed line(s)", skipped_lines).yellow()
        );
    }
}

pub fn print_thread(payload: &ThreadPayload) {
    println!("Thread ID: {}", payload.thread_id);
    let title: String = payload.title.chars().take(60).collect();
    println!("Title: {}", title);
}

pub fn print_uploading(api_url: &str) {
    println!();
    println!("{} Uploading to Nowledge Mem ({})...", prefix(), api_url);
}

pub fn print_success(response: &SaveResponse) {
    println!();
    println!("{}", "✓ Thread saved successfully!".green().bold());
    println!();
    println!(
        "Thread ID: {}",
        response.thread.thread_id.as_deref().unwrap_or("N/A")
    );
    println!(
        "Server ID: {}",
        response.thread.id.as_deref().unwrap_or("N/A")
    );
    match response.thread.message_count {
        Some(count) => println!("Messages: {}", count),
        None => println!("Messages: N/A"),
    }
    println!();
    println!("{} Done! Conversation stored in Nowledge Mem.", prefix());
}
