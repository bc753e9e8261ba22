use std::fs;

use crate::error::Error;

/// Reads a csv resource as text. An http(s) source is fetched once, no
/// retry and no timeout policy beyond the client's defaults; anything
/// else is treated as a local path. One error type either way, so the
/// caller decides whether the miss is fatal (prices) or shrugged off
/// (labs).
pub fn read_source(source: &str) -> Result<String, Error> {
    if is_url(source) {
        fetch(source)
    } else {
        fs::read_to_string(source).map_err(|e| unreadable(source, e.to_string()))
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn fetch(url: &str) -> Result<String, Error> {
    // Non-2xx statuses come back as Err from ureq, which is exactly the
    // "terminal load error" the dashboard wants.
    let mut response = ureq::get(url)
        .call()
        .map_err(|e| unreadable(url, e.to_string()))?;

    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| unreadable(url, e.to_string()))?;

    Ok(body)
}

fn unreadable(source: &str, detail: String) -> Error {
    Error::SourceUnreadable {
        source_name: source.to_owned(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_missing_local_file_reports_its_source_name() {
        let error = read_source("definitely/not/here.csv").unwrap_err();

        match error {
            Error::SourceUnreadable { source_name, .. } => {
                assert_eq!(source_name, "definitely/not/here.csv");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn url_detection_only_covers_http() {
        assert!(is_url("https://example.com/prices.csv"));
        assert!(is_url("http://example.com/prices.csv"));
        assert!(!is_url("ftp://example.com/prices.csv"));
        assert!(!is_url("./prices.csv"));
    }
}
