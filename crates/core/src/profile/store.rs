//! File-based profile storage
//!
//! Stores profiles as JSON in a file on disk, keyed by user ID. Rows are
//! created lazily on first write.

use chrono::Utc;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::Profile;
use crate::Result;

/// File-based profile store using JSON
pub struct FileProfileStore {
    path: PathBuf,
    cache: RwLock<HashMap<Uuid, Profile>>,
}

fn trim_to_none(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

impl FileProfileStore {
    /// Create a new FileProfileStore
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            let profiles: Vec<Profile> = serde_json::from_str(&content)?;
            profiles.into_iter().map(|p| (p.user_id, p)).collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    async fn persist(&self) -> Result<()> {
        let cache = self.cache.read().await;
        let profiles: Vec<&Profile> = cache.values().collect();
        let content = serde_json::to_string_pretty(&profiles)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }

    /// Get a user's profile, if one has been written
    pub async fn get(&self, user_id: Uuid) -> Result<Option<Profile>> {
        let cache = self.cache.read().await;
        Ok(cache.get(&user_id).cloned())
    }

    /// Set (or clear) a user's Slack webhook URL, creating the profile if
    /// needed. Empty or whitespace-only values clear the field.
    pub async fn set_webhook_url(
        &self,
        user_id: Uuid,
        webhook_url: Option<String>,
    ) -> Result<Profile> {
        let profile = {
            let mut cache = self.cache.write().await;
            let profile = cache.entry(user_id).or_insert_with(|| Profile::new(user_id));
            profile.slack_webhook_url = trim_to_none(webhook_url);
            profile.updated_at = Utc::now();
            profile.clone()
        };
        self.persist().await?;
        Ok(profile)
    }
}
