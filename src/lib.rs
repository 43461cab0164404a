/// Public library interface for the iMakeIt habit dashboard
///
/// This module exports the dashboard server, the habit and preference
/// stores, and the storage types so they can be embedded by other
/// applications or driven directly from tests.

use std::path::PathBuf;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Internal modules
mod analytics;
mod domain;
mod mcp;
mod preferences;
mod storage;
mod store;
mod tools;

// Re-export public modules and types
pub use analytics::{AnalyticsEngine, HabitStats};
pub use domain::*;
pub use preferences::{PreferenceStore, PRIMARY_COLOR_KEY, THEME_KEY};
pub use storage::{
    KeyValueStore, MemoryStore, PersistenceGateway, SqliteStore, StorageError, NAMESPACE,
};
pub use store::{HabitEdit, HabitStore, NewHabit, StoreError, HABITS_KEY};

/// Key the onboarding profile is stored under
pub const PROFILE_KEY: &str = "userData";
/// Flag written once onboarding has completed
pub const VISITED_KEY: &str = "hasVisited";

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the dashboard keeps its data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Durable SQLite file
    Sqlite(PathBuf),
    /// Session-only; everything is lost when the process exits
    InMemory,
}

/// Full backup of the dashboard's stored data
///
/// Backups written by the web dashboard use `settings` and `userData` for
/// the preference and profile sections and carry no timestamp; both shapes
/// are accepted. Unknown sections are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "settings")]
    pub preferences: Preferences,
    #[serde(default, alias = "userData")]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub habits: Vec<Habit>,
}

/// Result of applying an [`ExportDocument`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
    pub profile_imported: bool,
}

/// The dashboard: habit store, preference store and analytics over a
/// shared persistence gateway
///
/// The stores are single-threaded; the MCP loop drives them one request
/// at a time.
pub struct DashboardServer {
    gateway: Rc<PersistenceGateway>,
    habits: HabitStore,
    preferences: PreferenceStore,
    analytics: AnalyticsEngine,
}

impl DashboardServer {
    /// Create a dashboard backed by the configured storage
    ///
    /// For SQLite this initializes the schema if the file is new.
    pub async fn new(config: StorageConfig) -> Result<Self, ServerError> {
        let backend: Box<dyn KeyValueStore> = match &config {
            StorageConfig::Sqlite(db_path) => {
                tracing::info!("Initializing dashboard with database: {:?}", db_path);
                Box::new(SqliteStore::new(db_path.clone())?)
            }
            StorageConfig::InMemory => {
                tracing::warn!("Running with in-memory storage; data will not survive restart");
                Box::new(MemoryStore::new())
            }
        };

        Ok(Self::with_gateway(PersistenceGateway::new(backend)))
    }

    /// Create a dashboard over an existing gateway
    pub fn with_gateway(gateway: PersistenceGateway) -> Self {
        let gateway = Rc::new(gateway);
        Self {
            habits: HabitStore::new(Rc::clone(&gateway)),
            preferences: PreferenceStore::new(Rc::clone(&gateway)),
            analytics: AnalyticsEngine::new(),
            gateway,
        }
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until stdin closes or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(
            "Server started, {} habits loaded, onboarded: {}",
            self.habits.len(),
            self.is_onboarded()
        );

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.run().await?;

        Ok(())
    }

    pub fn habits(&self) -> &HabitStore {
        &self.habits
    }

    pub fn habits_mut(&mut self) -> &mut HabitStore {
        &mut self.habits
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut PreferenceStore {
        &mut self.preferences
    }

    pub fn analytics(&self) -> &AnalyticsEngine {
        &self.analytics
    }

    pub fn gateway(&self) -> &PersistenceGateway {
        &self.gateway
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.gateway.load(PROFILE_KEY)
    }

    /// Store the onboarding profile and mark the dashboard as visited
    pub fn register_profile(&mut self, profile: &UserProfile) {
        self.gateway.save(PROFILE_KEY, profile);
        self.gateway.save(VISITED_KEY, &true);
        tracing::info!("Registered profile for {}", profile.name);
    }

    /// Whether onboarding has completed: both the visited flag and the
    /// profile must be stored
    pub fn is_onboarded(&self) -> bool {
        self.gateway.contains(VISITED_KEY) && self.gateway.contains(PROFILE_KEY)
    }

    pub fn export(&self) -> ExportDocument {
        ExportDocument {
            exported_at: Some(Utc::now()),
            preferences: self.preferences.preferences().clone(),
            profile: self.profile(),
            habits: self.habits.habits().to_vec(),
        }
    }

    /// Apply a backup: preferences and profile are replaced, habits are
    /// added unless they fail validation or a habit with the same id
    /// already exists
    ///
    /// An invalid accent colour rejects the whole document before anything
    /// changes. An invalid profile is skipped and the current one kept.
    pub fn import(&mut self, document: ExportDocument) -> Result<ImportSummary, ServerError> {
        let color = normalize_color(&document.preferences.primary_color)?;
        let profile = document.profile.and_then(|p| {
            UserProfile::new(p.name, p.email, p.goal)
                .map_err(|e| tracing::warn!("Skipping imported profile: {}", e))
                .ok()
        });

        self.preferences.set_theme(document.preferences.theme);
        self.preferences.set_primary_color(&color)?;

        let mut summary = ImportSummary::default();
        if let Some(profile) = &profile {
            self.register_profile(profile);
            summary.profile_imported = true;
        }

        for habit in document.habits {
            match self.habits.insert_habit(habit) {
                Ok(()) => summary.imported += 1,
                Err(e) => {
                    tracing::debug!("Skipping imported habit: {}", e);
                    summary.skipped += 1;
                }
            }
        }

        tracing::info!("Imported {} habits, skipped {}", summary.imported, summary.skipped);
        Ok(summary)
    }

    /// Remove every stored key under the namespace and reset in-memory state
    pub fn clear_all(&mut self) -> Result<usize, ServerError> {
        let removed = self.gateway.try_clear()?;
        self.habits.reset();
        self.preferences.reload();
        tracing::info!("Cleared {} stored keys", removed);
        Ok(removed)
    }
}
