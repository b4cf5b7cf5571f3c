pub mod discovery;
pub mod encode;
pub mod error;
pub mod parser;
pub mod payload;
mod schema;

pub use discovery::{
    find_latest_session, find_session_dir, find_session_dir_under, list_session_files,
    sessions_root,
};
pub use encode::encode_project_dir;
pub use error::{Error, Result};
pub use parser::{MAX_CONTENT_CHARS, ParsedSession, parse_session_file};
pub use payload::build_thread_payload;
