//! Application state

use std::path::PathBuf;
use std::sync::Arc;

use tl_core::profile::FileProfileStore;
use tl_core::slack::SlackNotifier;
use tl_core::summary::{GeminiClient, Summarizer, DEFAULT_MODEL};
use tl_core::todo::FileTodoStore;

/// Shared application state
///
/// External-service clients live here for the lifetime of the process
/// and are reused across requests.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pub todo_store: FileTodoStore,
    pub profile_store: FileProfileStore,
    pub summarizer: Summarizer,
    pub notifier: SlackNotifier,
}

impl AppState {
    /// Create a new AppState with the given data directory
    pub async fn new(data_dir: PathBuf) -> tl_core::Result<Self> {
        let todo_store = FileTodoStore::new(data_dir.join("todos.json")).await?;
        let profile_store = FileProfileStore::new(data_dir.join("profiles.json")).await?;

        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let summarizer = Summarizer::new(GeminiClient::new(api_key, model));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                todo_store,
                profile_store,
                summarizer,
                notifier: SlackNotifier::new(),
            }),
        })
    }

    /// Get reference to the todo store
    pub fn todo_store(&self) -> &FileTodoStore {
        &self.inner.todo_store
    }

    /// Get reference to the profile store
    pub fn profile_store(&self) -> &FileProfileStore {
        &self.inner.profile_store
    }

    /// Get reference to the summarizer
    pub fn summarizer(&self) -> &Summarizer {
        &self.inner.summarizer
    }

    /// Get reference to the Slack notifier
    pub fn notifier(&self) -> &SlackNotifier {
        &self.inner.notifier
    }
}
