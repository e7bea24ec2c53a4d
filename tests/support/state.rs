use std::io::Write;

use tempfile::NamedTempFile;

/// Write `contents` to a temporary `.json` file that lives as long as the handle.
pub fn write_state(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("pairvote-state-")
        .suffix(".json")
        .tempfile()
        .expect("create temp state");
    file.write_all(contents.as_bytes()).expect("write temp state");
    file
}

/// Write `contents` to a temporary `.toml` config file.
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("pairvote-config-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}
