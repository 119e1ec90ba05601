//! HTTP source for the collisions CSV export.

use crate::error::{CollisionError, Result};
use crate::source::{CollisionSource, DATA_URL};
use log::info;
use reqwest::Client;

/// Streams the remote CSV and stops reading once enough rows have arrived.
///
/// No retries: a transport failure or a non-success status surfaces as
/// [`CollisionError::SourceUnavailable`].
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl Default for HttpSource {
    fn default() -> Self {
        HttpSource::with_url(DATA_URL)
    }
}

impl HttpSource {
    pub fn new() -> Self {
        HttpSource::default()
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        HttpSource {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Response body that stops accepting chunks after a fixed number of lines.
#[derive(Debug, Default)]
struct LineLimitedBody {
    wanted_lines: usize,
    lines: usize,
    body: Vec<u8>,
    full: bool,
}

impl LineLimitedBody {
    /// Room for the header line plus `n_rows` rows.
    fn for_rows(n_rows: usize) -> Self {
        LineLimitedBody {
            wanted_lines: n_rows.saturating_add(1),
            ..LineLimitedBody::default()
        }
    }

    /// Append `chunk`, cutting it right after the last wanted newline.
    /// Returns `true` once the body holds every wanted line.
    fn push(&mut self, chunk: &[u8]) -> bool {
        if self.full {
            return true;
        }
        for (pos, &byte) in chunk.iter().enumerate() {
            if byte != b'\n' {
                continue;
            }
            self.lines += 1;
            if self.lines >= self.wanted_lines {
                self.body.extend_from_slice(&chunk[..=pos]);
                self.full = true;
                return true;
            }
        }
        self.body.extend_from_slice(chunk);
        false
    }

    fn into_text(self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl CollisionSource for HttpSource {
    async fn fetch_csv(&self, n_rows: usize) -> Result<String> {
        let mut response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CollisionError::SourceUnavailable(format!(
                "{} responded with {}",
                self.url, status
            )));
        }

        let mut body = LineLimitedBody::for_rows(n_rows);
        while let Some(chunk) = response.chunk().await? {
            if body.push(&chunk) {
                break;
            }
        }

        info!(
            "fetched {} bytes ({} lines) from {}{}",
            body.body.len(),
            body.lines,
            self.url,
            if body.full { ", stopped early" } else { "" }
        );
        Ok(body.into_text())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(n_rows: usize, chunks: &[&[u8]]) -> (String, bool, usize) {
        let mut body = LineLimitedBody::for_rows(n_rows);
        let mut pushed = 0;
        for chunk in chunks {
            pushed += 1;
            if body.push(chunk) {
                break;
            }
        }
        let full = body.full;
        (body.into_text(), full, pushed)
    }

    #[test]
    fn test_body_stops_after_wanted_rows() {
        let (text, full, pushed) = collect(2, &[b"A,B\n1,", b"2\n3,4\n5,6\n", b"7,8\n"]);
        assert_eq!(text, "A,B\n1,2\n3,4\n");
        assert!(full);
        assert_eq!(pushed, 2);
    }

    #[test]
    fn test_body_drops_partial_trailing_row() {
        let (text, full, _) = collect(1, &[b"A,B\n1,2\n3,"]);
        assert_eq!(text, "A,B\n1,2\n");
        assert!(full);
    }

    #[test]
    fn test_body_keeps_short_response_whole() {
        let (text, full, pushed) = collect(10, &[b"A,B\n1,2\n", b"3,4"]);
        assert_eq!(text, "A,B\n1,2\n3,4");
        assert!(!full);
        assert_eq!(pushed, 2);
    }

    #[test]
    fn test_body_zero_rows_keeps_header() {
        let (text, full, _) = collect(0, &[b"A,B\n1,2\n"]);
        assert_eq!(text, "A,B\n");
        assert!(full);

        let mut body = LineLimitedBody::for_rows(usize::MAX);
        assert!(!body.push(b"A,B\n"));
        assert_eq!(body.wanted_lines, usize::MAX);
    }

    #[test]
    fn test_default_url() {
        assert_eq!(HttpSource::new().url(), DATA_URL);
        assert_eq!(HttpSource::with_url("http://localhost/x.csv").describe(), "http://localhost/x.csv");
    }

    #[tokio::test]
    async fn test_unreachable_source_is_unavailable() {
        // port 9 (discard) on localhost is not expected to serve HTTP
        let source = HttpSource::with_url("http://127.0.0.1:9/rows.csv");
        let err = source.fetch_csv(10).await.unwrap_err();
        assert!(matches!(err, CollisionError::SourceUnavailable(_)));
    }
}
