//! Trailing media references
//!
//! A plain-text sidecar with one http(s) URL per line. Blank lines and
//! lines starting with `#` are ignored.

use lessonsmith_domain::InputError;
use std::fs;
use std::path::Path;
use url::Url;

/// Parse the content of a media list
pub fn parse_video_list(content: &str) -> Result<Vec<String>, InputError> {
    let mut videos = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let invalid = || InputError::InvalidMediaReference {
            line: number + 1,
            value: line.to_string(),
        };
        let url = Url::parse(line).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid());
        }
        videos.push(url.to_string());
    }
    Ok(videos)
}

/// Media references of `directory`, empty when the list file is absent
pub fn load_video_list(directory: &Path, file_name: &str) -> Result<Vec<String>, InputError> {
    let path = directory.join(file_name);
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path).map_err(|e| InputError::io(&path, e))?;
    parse_video_list(&content)
}
