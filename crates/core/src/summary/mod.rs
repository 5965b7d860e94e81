//! Summary generation
//!
//! Formats a user's open todos into a prompt and asks a generative model
//! for a Slack-ready digest.

mod client;
mod types;

pub use client::GeminiClient;

use crate::todo::Todo;
use crate::Result;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Generates Slack-formatted digests of open todos
pub struct Summarizer {
    client: GeminiClient,
}

impl Summarizer {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Summarize the given open todos.
    ///
    /// The model output is returned verbatim; callers decide how to bound
    /// it before forwarding anywhere.
    pub async fn summarize(&self, todos: &[Todo]) -> Result<String> {
        let prompt = build_prompt(&format_todos(todos));
        self.client.generate(&prompt).await
    }
}

/// Render each todo as a title/description/priority block
pub fn format_todos(todos: &[Todo]) -> String {
    todos
        .iter()
        .map(|todo| {
            format!(
                "Title: {}\nDescription: {}\nPriority: {}",
                todo.title,
                todo.description.as_deref().unwrap_or("None"),
                todo.priority.as_str()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Instruction template sent to the model along with the formatted todos
pub fn build_prompt(todo_text: &str) -> String {
    format!(
        "Please summarize the following to-do list items.\n\
         Format the summary for a Slack message using Slack's markdown.\n\
         The summary should be concise, professional, and actionable.\n\
         Organize the summary by priority.\n\
         For High priority tasks, prefix them with a \u{1F534} (red circle) emoji.\n\
         For Medium priority tasks, prefix them with a \u{1F7E1} (yellow circle) emoji.\n\
         For Low priority tasks, prefix them with a \u{1F7E2} (green circle) emoji.\n\
         Under each priority, list the tasks as bullet points.\n\
         Within each bullet point, make the task title bold (e.g., *Task Title*: Description...).\n\
         Start the summary with a clear heading like \"Key Action Items:\".\n\n\
         {}",
        todo_text
    )
}
