#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::Request;

/// One decoded part of a multipart/form-data body.
#[derive(Debug)]
pub struct FormPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub value: String,
}

/// Splits a recorded multipart request into its parts, in wire order.
pub fn form_parts(request: &Request) -> Vec<FormPart> {
    let content_type = request
        .headers
        .get("content-type")
        .expect("multipart request without content type")
        .to_str()
        .unwrap()
        .to_string();
    let boundary = content_type
        .split("boundary=")
        .nth(1)
        .expect("content type without boundary")
        .trim_matches('"')
        .to_string();

    let body = String::from_utf8_lossy(&request.body).to_string();
    let delimiter = format!("--{}", boundary);

    body.split(&delimiter)
        .map(|segment| segment.trim_start_matches("\r\n"))
        .filter(|segment| !segment.is_empty() && !segment.starts_with("--"))
        .map(|segment| {
            let (headers, value) = segment
                .split_once("\r\n\r\n")
                .expect("part without header terminator");
            FormPart {
                name: header_param(headers, "; name=\"").expect("part without name"),
                file_name: header_param(headers, "; filename=\""),
                content_type: headers.lines().find_map(|line| {
                    let (key, value) = line.split_once(':')?;
                    key.eq_ignore_ascii_case("content-type")
                        .then(|| value.trim().to_string())
                }),
                value: value.strip_suffix("\r\n").unwrap_or(value).to_string(),
            }
        })
        .collect()
}

/// The `(name, value)` pairs of the text fields, in wire order.
pub fn text_fields(parts: &[FormPart]) -> Vec<(&str, &str)> {
    parts
        .iter()
        .filter(|part| part.file_name.is_none())
        .map(|part| (part.name.as_str(), part.value.as_str()))
        .collect()
}

fn header_param(headers: &str, marker: &str) -> Option<String> {
    let start = headers.find(marker)? + marker.len();
    let end = headers[start..].find('"')? + start;
    Some(headers[start..end].to_string())
}

/// Writes a small fake image into a fresh temporary directory.
pub fn write_image(file_name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(file_name);
    std::fs::File::create(&path)
        .unwrap()
        .write_all(content)
        .unwrap();
    (dir, path)
}

/// An address nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
