//! CLI subcommand modules.
//!
//! This module contains the implementations for all affinity CLI subcommands.

use std::path::PathBuf;

use affinity::{ContentItem, RecommendationService, Timestamp, UserHistoryEntry};
use anyhow::Result;

use crate::{OutputFormat, config, data};

pub(crate) mod explain;
pub(crate) mod recommend;
pub(crate) mod signals;

/// Arguments shared by the ranking subcommands.
#[derive(Debug)]
pub(crate) struct Inputs {
    pub(crate) catalog: PathBuf,
    pub(crate) focal: String,
    pub(crate) history: Option<PathBuf>,
    pub(crate) now: Option<String>,
    pub(crate) config: Option<PathBuf>,
    pub(crate) format: OutputFormat,
}

/// Everything a ranking subcommand needs, loaded from disk.
#[derive(Debug)]
pub(crate) struct Session {
    pub(crate) service: RecommendationService,
    pub(crate) catalog: Vec<ContentItem>,
    pub(crate) history: Vec<UserHistoryEntry>,
    pub(crate) now: Timestamp,
}

impl Session {
    pub(crate) fn load(inputs: &Inputs) -> Result<Self> {
        let config = config::load_config(inputs.config.as_deref())?;
        let service = RecommendationService::from_config(&config)?;
        let catalog = data::load_catalog(&inputs.catalog)?;
        let history = match &inputs.history {
            Some(path) => data::load_history(path)?,
            None => Vec::new(),
        };
        let now = data::parse_now(inputs.now.as_deref())?;
        Ok(Self {
            service,
            catalog,
            history,
            now,
        })
    }

    pub(crate) fn item(&self, id: &str) -> Result<&ContentItem> {
        data::find_item(&self.catalog, id)
    }
}
