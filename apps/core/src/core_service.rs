use std::path::PathBuf;

use thiserror::Error;

use crate::action_executor::{classify_with_home, launch_target, LaunchError, ProcessLauncher};
use crate::config::{validate, Config};
use crate::history::{HistoryList, HistoryStore};
use crate::model::LaunchTarget;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("config error: {0}")]
    Config(String),
}

/// Config, history and classification for one launcher session.
pub struct CoreService {
    config: Config,
    store: HistoryStore,
    history: HistoryList,
    home: Option<PathBuf>,
}

impl CoreService {
    /// Validates `config` and loads the history file it points at.
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        validate(&config).map_err(ServiceError::Config)?;
        let store = HistoryStore::from_config(&config);
        let history = store.load();
        tracing::info!(
            path = %store.path().display(),
            entries = history.len(),
            "history loaded"
        );
        Ok(Self {
            config,
            store,
            history,
            home: dirs::home_dir(),
        })
    }

    pub fn with_history(config: Config, history: HistoryList) -> Result<Self, ServiceError> {
        validate(&config).map_err(ServiceError::Config)?;
        let store = HistoryStore::from_config(&config);
        Ok(Self {
            config,
            store,
            history,
            home: dirs::home_dir(),
        })
    }

    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &HistoryList {
        &self.history
    }

    pub fn candidates(&self, query: &str) -> Vec<String> {
        crate::search::filter(&self.history, query)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn classify(&self, cmd: &str) -> LaunchTarget {
        classify_with_home(cmd, self.home.as_deref())
    }

    /// Classifies the submitted line and records it in history. Returns
    /// `None` for blank input. History is written before anything launches.
    pub fn submit(&mut self, text: &str) -> Option<LaunchTarget> {
        let cmd = text.trim();
        if cmd.is_empty() {
            return None;
        }

        let target = self.classify(cmd);
        if let Err(error) = self.store.record(&mut self.history, cmd) {
            tracing::warn!("history not saved: {error}");
        }
        Some(target)
    }

    pub fn dispatch(
        &self,
        launcher: &mut dyn ProcessLauncher,
        target: &LaunchTarget,
    ) -> Result<(), LaunchError> {
        match launch_target(launcher, target, &self.config) {
            Ok(()) => {
                tracing::info!(kind = target.kind(), "launched {target}");
                Ok(())
            }
            Err(error) => {
                tracing::error!(kind = target.kind(), "launch failed: {error}");
                Err(error)
            }
        }
    }
}
