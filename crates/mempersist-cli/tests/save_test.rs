use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::thread;
use tempfile::TempDir;

const USER_LINE: &str = r#"{"type":"user","message":{"role":"user","content":"what does the parser do"},"timestamp":"2025-11-02T10:00:00Z"}"#;
const ASSISTANT_LINE: &str = r#"{"type":"assistant","message":{"content":[{"type":"text","text":"it extracts messages"}]},"timestamp":"2025-11-02T10:00:01Z"}"#;
const TOOL_LINE: &str = r#"{"type":"tool_use","name":"Bash","input":{"command":"ls"}}"#;

/// Isolated HOME + project directory for one CLI invocation
struct TestFixture {
    _temp_dir: TempDir,
    home: PathBuf,
    project: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        let project = temp_dir.path().join("workspace").join("demo");
        fs::create_dir_all(&home).expect("Failed to create home dir");
        fs::create_dir_all(&project).expect("Failed to create project dir");

        Self {
            _temp_dir: temp_dir,
            home,
            project,
        }
    }

    /// Canonical project path, exactly as the CLI will resolve it
    fn project(&self) -> PathBuf {
        self.project
            .canonicalize()
            .expect("Failed to canonicalize project dir")
    }

    fn session_dir(&self) -> PathBuf {
        let encoded = mempersist_session::encode_project_dir(&self.project());
        self.home.join(".claude").join("projects").join(encoded)
    }

    fn write_session(&self, name: &str, lines: &[&str]) -> PathBuf {
        let dir = self.session_dir();
        fs::create_dir_all(&dir).expect("Failed to create session dir");
        let path = dir.join(name);
        fs::write(&path, lines.join("\n") + "\n").expect("Failed to write session file");
        path
    }

    fn command(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("mem-persist").expect("Failed to find mem-persist binary");
        cmd.env("HOME", &self.home)
            .env_remove("MEM_API_URL")
            .env_remove("MEM_AUTH_TOKEN")
            .env_remove("MAX_MESSAGES")
            .env_remove("PROJECT_PATH");
        cmd
    }
}

/// One-shot `/threads` endpoint asserting auth and message count
fn spawn_threads_server(expected_messages: usize) -> (String, thread::JoinHandle<()>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();

    let handle = thread::spawn(move || {
        let mut request = server.recv().unwrap();
        assert_eq!(request.url(), "/threads");

        let auth = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("Authorization"))
            .map(|h| h.value.as_str().to_string());
        assert_eq!(auth.as_deref(), Some("Bearer test-token"));

        let mut body = String::new();
        request.as_reader().read_to_string(&mut body).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value["messages"].as_array().unwrap().len(),
            expected_messages
        );

        let reply = format!(
            r#"{{"thread":{{"id":"srv-9","thread_id":{},"message_count":{}}}}}"#,
            value["thread_id"], expected_messages
        );
        request
            .respond(
                tiny_http::Response::from_string(reply)
                    .with_status_code(201)
                    .with_header(
                        tiny_http::Header::from_bytes(
                            &b"Content-Type"[..],
                            &b"application/json"[..],
                        )
                        .unwrap(),
                    ),
            )
            .unwrap();
    });

    (format!("http://127.0.0.1:{port}"), handle)
}

#[test]
fn save_uploads_latest_session() {
    let fixture = TestFixture::new();
    fixture.write_session("session-abc.jsonl", &[USER_LINE, TOOL_LINE, ASSISTANT_LINE]);
    let (api_url, handle) = spawn_threads_server(2);

    fixture
        .command()
        .env("MEM_API_URL", &api_url)
        .env("MEM_AUTH_TOKEN", "test-token")
        .arg("save")
        .arg("--project-path")
        .arg(fixture.project())
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 2 messages from 3 lines"))
        .stdout(predicate::str::contains("Thread saved successfully"))
        .stdout(predicate::str::contains("Server ID: srv-9"));

    handle.join().unwrap();
}

#[test]
fn save_sends_custom_title_verbatim() {
    let fixture = TestFixture::new();
    fixture.write_session("session-abc.jsonl", &[USER_LINE, ASSISTANT_LINE]);

    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let handle = thread::spawn(move || {
        let mut request = server.recv().unwrap();
        let mut body = String::new();
        request.as_reader().read_to_string(&mut body).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["title"], "Sprint review notes");
        request
            .respond(
                tiny_http::Response::from_string(r#"{"thread":{}}"#).with_status_code(201),
            )
            .unwrap();
    });

    fixture
        .command()
        .env("MEM_API_URL", format!("http://127.0.0.1:{port}"))
        .env("MEM_AUTH_TOKEN", "test-token")
        .arg("save")
        .arg("--title")
        .arg("Sprint review notes")
        .arg("--project-path")
        .arg(fixture.project())
        .assert()
        .success();

    handle.join().unwrap();
}

#[test]
fn save_respects_message_cap_from_env() {
    let fixture = TestFixture::new();
    fixture.write_session(
        "session-abc.jsonl",
        &[USER_LINE, ASSISTANT_LINE, USER_LINE, ASSISTANT_LINE],
    );
    let (api_url, handle) = spawn_threads_server(1);

    fixture
        .command()
        .env("MEM_API_URL", &api_url)
        .env("MEM_AUTH_TOKEN", "test-token")
        .env("MAX_MESSAGES", "1")
        .arg("save")
        .arg("--project-path")
        .arg(fixture.project())
        .assert()
        .success()
        .stdout(predicate::str::contains("max 1 messages"));

    handle.join().unwrap();
}

#[test]
fn project_path_env_is_used_when_no_flag_given() {
    let fixture = TestFixture::new();
    fixture.write_session("session-abc.jsonl", &[USER_LINE, ASSISTANT_LINE]);
    let (api_url, handle) = spawn_threads_server(2);

    fixture
        .command()
        .env("MEM_API_URL", &api_url)
        .env("MEM_AUTH_TOKEN", "test-token")
        .env("PROJECT_PATH", fixture.project())
        .arg("save")
        .assert()
        .success();

    handle.join().unwrap();
}

#[test]
fn explicit_project_path_beats_environment() {
    let fixture = TestFixture::new();
    fixture.write_session("session-abc.jsonl", &[USER_LINE, ASSISTANT_LINE]);
    let (api_url, handle) = spawn_threads_server(2);

    fixture
        .command()
        .env("MEM_API_URL", &api_url)
        .env("MEM_AUTH_TOKEN", "test-token")
        .env("PROJECT_PATH", "/nowhere/at/all")
        .arg("save")
        .arg("--project-path")
        .arg(fixture.project())
        .assert()
        .success();

    handle.join().unwrap();
}

#[test]
fn save_fails_when_no_session_directory() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("save")
        .arg("--project-path")
        .arg(fixture.project())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session directory not found"));
}

#[test]
fn save_rejects_session_without_messages() {
    let fixture = TestFixture::new();
    fixture.write_session("session-abc.jsonl", &[TOOL_LINE, TOOL_LINE]);

    fixture
        .command()
        .arg("save")
        .arg("--project-path")
        .arg(fixture.project())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No conversational messages found"));
}

#[test]
fn save_surfaces_api_error_status() {
    let fixture = TestFixture::new();
    fixture.write_session("session-abc.jsonl", &[USER_LINE, ASSISTANT_LINE]);

    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let handle = thread::spawn(move || {
        let request = server.recv().unwrap();
        request
            .respond(tiny_http::Response::from_string("boom").with_status_code(500))
            .unwrap();
    });

    fixture
        .command()
        .env("MEM_API_URL", format!("http://127.0.0.1:{port}"))
        .env("MEM_AUTH_TOKEN", "test-token")
        .arg("save")
        .arg("--project-path")
        .arg(fixture.project())
        .assert()
        .failure()
        .stderr(predicate::str::contains("API returned 500"));

    handle.join().unwrap();
}

#[test]
fn save_rejects_non_numeric_message_cap() {
    let fixture = TestFixture::new();
    fixture.write_session("session-abc.jsonl", &[USER_LINE, ASSISTANT_LINE]);

    fixture
        .command()
        .env("MAX_MESSAGES", "lots")
        .arg("save")
        .arg("--project-path")
        .arg(fixture.project())
        .assert()
        .failure()
        .stderr(predicate::str::contains("MAX_MESSAGES must be a number"));
}
