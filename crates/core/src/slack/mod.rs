//! Slack webhook delivery
//!
//! Builds a Block Kit message around a generated summary and posts it to
//! a caller-configured incoming webhook.

use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};

use crate::{Error, Result};

/// Slack rejects section blocks whose text exceeds 3000 characters.
const SECTION_TEXT_LIMIT: usize = 3000;

/// Delivers summaries to Slack incoming webhooks
pub struct SlackNotifier {
    client: Client,
}

impl SlackNotifier {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Deliver the summary to the given incoming webhook.
    ///
    /// A non-2xx acknowledgment is an error carrying the remote response
    /// body. The call is made once; it is never retried.
    pub async fn send_summary(&self, webhook_url: &str, summary: &str) -> Result<()> {
        let message = build_message(summary);
        let response = self
            .client
            .post(webhook_url)
            .json(&message)
            .send()
            .await
            .map_err(|e| Error::Delivery(format!("Failed to reach webhook: {}", e)))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(Error::Delivery(format!("Failed to send to Slack: {}", body)));
        }
        Ok(())
    }
}

impl Default for SlackNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the Block Kit payload: header, summary section, generated-at footer
pub fn build_message(summary: &str) -> Value {
    json!({
        "text": "\u{1F4CB} *Todo List Summary*",
        "blocks": [
            {
                "type": "header",
                "text": {
                    "type": "plain_text",
                    "text": "\u{1F4CB} Todo List Summary",
                    "emoji": true
                }
            },
            {
                "type": "section",
                "text": {
                    "type": "mrkdwn",
                    "text": truncate_section_text(summary)
                }
            },
            {
                "type": "context",
                "elements": [
                    {
                        "type": "mrkdwn",
                        "text": format!("_Generated at {}_", Utc::now().format("%Y-%m-%d %H:%M UTC"))
                    }
                ]
            }
        ]
    })
}

fn truncate_section_text(summary: &str) -> String {
    if summary.chars().count() <= SECTION_TEXT_LIMIT {
        return summary.to_string();
    }
    let mut text: String = summary.chars().take(SECTION_TEXT_LIMIT - 1).collect();
    text.push('\u{2026}');
    text
}
