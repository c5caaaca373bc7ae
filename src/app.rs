//! Application wiring.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use smartmarks_config::{
    ConfigError, ConfigLoader, ConfigValidator, FileSettingsStore, SmartmarksConfig,
};
use smartmarks_core::{DebounceScheduler, Orchestrator};
use smartmarks_protocols::{
    BookmarkEvent, BookmarkStore, CategoryPath, Classifier, ProviderError, Settings,
    SettingsStore,
};
use smartmarks_provider::ClassificationGateway;

/// Capacity of the event channel handed out by [`App::spawn`].
const EVENT_BUFFER: usize = 256;

/// Errors raised while assembling an [`App`].
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// A fully wired filing pipeline over one bookmark store.
pub struct App {
    config: SmartmarksConfig,
    settings: Arc<dyn SettingsStore>,
    classifier: Arc<dyn Classifier>,
    orchestrator: Arc<Orchestrator>,
    scheduler: DebounceScheduler,
}

impl App {
    /// Build the pipeline with the HTTP classification gateway.
    pub fn new(
        config: SmartmarksConfig,
        store: Arc<dyn BookmarkStore>,
        settings: Arc<dyn SettingsStore>,
    ) -> Result<Self, AppError> {
        validate(&config)?;
        let gateway = ClassificationGateway::new(config.providers.clone())?;
        Ok(Self::assemble(config, store, settings, Arc::new(gateway)))
    }

    /// Build the pipeline around a caller-supplied classifier.
    pub fn with_classifier(
        config: SmartmarksConfig,
        store: Arc<dyn BookmarkStore>,
        settings: Arc<dyn SettingsStore>,
        classifier: Arc<dyn Classifier>,
    ) -> Result<Self, AppError> {
        validate(&config)?;
        Ok(Self::assemble(config, store, settings, classifier))
    }

    /// Load `path` (defaults if missing) and persist settings in the
    /// configured settings file.
    pub fn from_config_file(path: &Path, store: Arc<dyn BookmarkStore>) -> Result<Self, AppError> {
        let config = ConfigLoader::load_or_default(path)?;
        let settings = Arc::new(FileSettingsStore::new(config.settings.settings_path()));
        Self::new(config, store, settings)
    }

    fn assemble(
        config: SmartmarksConfig,
        store: Arc<dyn BookmarkStore>,
        settings: Arc<dyn SettingsStore>,
        classifier: Arc<dyn Classifier>,
    ) -> Self {
        let orchestrator = Arc::new(Orchestrator::new(
            store.clone(),
            settings.clone(),
            classifier.clone(),
            &config.mutation,
        ));
        let scheduler = DebounceScheduler::new(store, orchestrator.clone(), &config.scheduler);

        info!(
            debounce_ms = config.scheduler.debounce_ms,
            move_attempts = config.mutation.move_attempts,
            "Smartmarks pipeline ready"
        );

        Self {
            config,
            settings,
            classifier,
            orchestrator,
            scheduler,
        }
    }

    pub fn config(&self) -> &SmartmarksConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &DebounceScheduler {
        &self.scheduler
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Start consuming bookmark events on a background task.
    ///
    /// The task ends once every sender is dropped. Timers still pending at
    /// that point keep running.
    pub fn spawn(&self) -> (mpsc::Sender<BookmarkEvent>, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        let scheduler = self.scheduler.clone();
        let handle = tokio::spawn(async move { scheduler.run(rx).await });
        (tx, handle)
    }

    /// Classify a title and URL with the current settings without touching
    /// the bookmark tree.
    pub async fn classify_preview(&self, title: &str, url: &str) -> Option<CategoryPath> {
        let settings = match self.settings.load().await {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Failed to load settings, using defaults");
                Settings::default()
            }
        };
        self.classifier.classify(title, url, &settings).await
    }
}

fn validate(config: &SmartmarksConfig) -> Result<(), AppError> {
    let result = ConfigValidator::validate(config);
    for warning in &result.warnings {
        warn!(field = %warning.field, "{}", warning.message);
    }
    if result.is_valid() {
        Ok(())
    } else {
        Err(AppError::Invalid(
            result.errors.iter().map(ToString::to_string).collect(),
        ))
    }
}
