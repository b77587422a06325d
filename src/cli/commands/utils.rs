//! Shared utilities for CLI commands

use miette::Result;
use std::path::Path;

use crate::cli::helpers::Assignment;
use crate::cli::GlobalOpts;
use crate::core::config::Config;
use crate::core::frame::FrameParameters;
use crate::entities::frame::{AssignmentFailure, FrameDocument};

/// A parameter set after applying a document and `--set` overrides
#[derive(Debug)]
pub struct LoadedFrame {
    pub frame: FrameParameters,
    pub title: Option<String>,
    pub failures: Vec<AssignmentFailure>,
}

/// Load config from the usual layers, then apply `--rule`
pub fn load_config(global: &GlobalOpts) -> Result<Config> {
    let mut config = Config::load(global.config.as_deref())?;
    if let Some(rule) = global.rule {
        config.rule = rule.into();
    }
    Ok(config)
}

/// Build a frame from config defaults, an optional document and overrides
///
/// Rejected assignments don't abort loading; they are collected in
/// [`LoadedFrame::failures`] and leave the frame invalid.
pub fn load_frame(config: &Config, file: Option<&Path>, sets: &[Assignment]) -> Result<LoadedFrame> {
    let mut frame = config.frame_parameters()?;
    let mut title = None;
    let mut failures = Vec::new();

    if let Some(path) = file {
        let doc = FrameDocument::load(path)?;
        title = doc.title.clone();
        failures.extend(doc.apply(&mut frame));
    }

    for set in sets {
        if let Err(error) = frame.set(set.name, set.value) {
            failures.push(AssignmentFailure {
                parameter: set.name,
                value: set.value,
                error,
            });
        }
    }

    Ok(LoadedFrame {
        frame,
        title,
        failures,
    })
}
