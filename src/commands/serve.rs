//! Line-delimited JSON serving
//!
//! Reads one request per line and writes one `{"status", "body"}` response per
//! line, so any transport that can pipe lines can front the finder.

use crate::service::FindService;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Counters for a serve session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeSummary {
    pub requests: usize,
    pub failures: usize,
}

/// Serve requests from `reader` until end of input
///
/// Blank lines are skipped. Request-level failures become error responses;
/// only I/O errors end the session.
///
/// # Errors
///
/// Returns an error if reading a request or writing a response fails.
pub fn run_serve<R: BufRead, W: Write>(
    service: &FindService,
    reader: R,
    mut writer: W,
) -> Result<ServeSummary> {
    let mut summary = ServeSummary::default();

    for line in reader.lines() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = service.handle_json(&line);
        summary.requests += 1;
        if !response.is_success() {
            summary.failures += 1;
        }

        serde_json::to_writer(&mut writer, &response).context("failed to encode response")?;
        writer.write_all(b"\n").context("failed to write response")?;
        writer.flush().context("failed to flush response")?;
    }

    tracing::info!(
        requests = summary.requests,
        failures = summary.failures,
        "serve session finished"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::finder::QueryEngine;
    use serde_json::Value;
    use std::io::Cursor;
    use std::sync::Arc;

    fn service() -> FindService {
        let dictionary = Arc::new(Dictionary::from_words(["kat", "kedi", "tak"]));
        FindService::new(QueryEngine::new(dictionary), None)
    }

    #[test]
    fn answers_each_line() {
        let input = "{\"letters\": \"kat\"}\n\n{}\n{\"letters\": \"kedi\", \"suffix\": \"di\"}\n";
        let mut output = Vec::new();

        let summary = run_serve(&service(), Cursor::new(input), &mut output).unwrap();
        assert_eq!(summary.requests, 3);
        assert_eq!(summary.failures, 1);

        let text = String::from_utf8(output).unwrap();
        let responses: Vec<Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["status"], 200);
        assert_eq!(responses[0]["body"]["3"][0]["word"], "kat");
        assert_eq!(responses[0]["body"]["3"][1]["word"], "tak");
        assert_eq!(responses[1]["status"], 400);
        assert_eq!(responses[2]["body"]["4"][0]["matchIndex"], 2);
    }

    #[test]
    fn unreadable_line_does_not_stop_the_loop() {
        let input = "{\"letters\": 42}\n{\"letters\": \"tak\"}\n";
        let mut output = Vec::new();

        let summary = run_serve(&service(), Cursor::new(input), &mut output).unwrap();
        assert_eq!(summary.requests, 2);
        assert_eq!(summary.failures, 1);

        let text = String::from_utf8(output).unwrap();
        let statuses: Vec<Value> = text
            .lines()
            .map(|line| serde_json::from_str::<Value>(line).unwrap()["status"].clone())
            .collect();
        assert_eq!(statuses, vec![Value::from(500), Value::from(200)]);
    }

    #[test]
    fn empty_input_serves_nothing() {
        let mut output = Vec::new();
        let summary = run_serve(&service(), Cursor::new(""), &mut output).unwrap();
        assert_eq!(summary, ServeSummary::default());
        assert!(output.is_empty());
    }
}
