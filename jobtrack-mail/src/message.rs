//! Minimal RFC 822 message reader
//!
//! Reads the header block up to the first blank line (unfolding continuation
//! lines) and keeps everything after it as the body.

use chrono::{DateTime, NaiveDate};

use crate::error::MailError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    /// Calendar date of the `Date` header, in the sender's offset
    pub date: Option<NaiveDate>,
    pub body: String,
}

impl EmailMessage {
    pub fn parse(raw: &str) -> Result<Self, MailError> {
        let raw = raw.replace("\r\n", "\n");
        let (head, body) = match raw.split_once("\n\n") {
            Some((head, body)) => (head, body),
            None => (raw.as_str(), ""),
        };

        let mut headers: Vec<(String, String)> = Vec::new();
        for line in head.lines() {
            if line.starts_with([' ', '\t']) {
                if let Some((_, value)) = headers.last_mut() {
                    value.push(' ');
                    value.push_str(line.trim());
                }
                continue;
            }
            if let Some((name, value)) = line.split_once(':') {
                headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
            }
        }

        let header = |name: &str| {
            headers
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        };

        let subject = header("subject")
            .ok_or(MailError::MissingSubject)?
            .to_string();

        let date = match header("date") {
            Some(value) => Some(
                DateTime::parse_from_rfc2822(value)
                    .map(|ts| ts.date_naive())
                    .map_err(|_| MailError::InvalidDate(value.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            subject,
            date,
            body: body.to_string(),
        })
    }
}
