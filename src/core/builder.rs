//! Builder boundary - handing a validated frame to a geometry builder
//!
//! A [`FrameBuilder`] never sees an invalid frame: [`FrameBuilder::build`]
//! checks validity and snapshots the parameters into a [`BuildSheet`] before
//! the builder-specific [`FrameBuilder::construct`] runs.

use chrono::{DateTime, Utc};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;
use tracing::info;

use crate::core::frame::ConsistencyRule;
use crate::core::traits::{ParameterSet, Validatable};

/// Errors that can occur while building a frame
#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    #[error("Frame parameters are invalid for building")]
    #[diagnostic(
        code(pft::build::rejected),
        help("run `pft check` to see which parameters were rejected")
    )]
    Rejected,

    #[error("Failed to render build sheet: {0}")]
    #[diagnostic(code(pft::build::render))]
    Render(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(pft::build::io))]
    Io(#[from] std::io::Error),
}

/// Snapshot of a valid frame, as handed to a geometry builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSheet {
    /// Optional frame title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// When the sheet was generated
    pub generated: DateTime<Utc>,

    pub outer_width: f64,
    pub outer_length: f64,
    pub outer_height: f64,
    pub inner_height: f64,
    pub interval: f64,
    pub inner_width: f64,
    pub inner_length: f64,

    /// Law the inner sizes were checked against
    #[serde(default)]
    pub rule: ConsistencyRule,

    #[serde(default)]
    pub has_substrate: bool,

    #[serde(default)]
    pub has_stand: bool,
}

impl BuildSheet {
    /// Snapshot a frame, refusing invalid ones
    pub fn from_frame<F>(frame: &F) -> Result<Self, BuildError>
    where
        F: Validatable + ParameterSet,
    {
        if !frame.is_valid() {
            return Err(BuildError::Rejected);
        }

        let inner_width = frame.inner_width().map_err(|_| BuildError::Rejected)?;
        let inner_length = frame.inner_length().map_err(|_| BuildError::Rejected)?;

        Ok(Self {
            title: None,
            generated: Utc::now(),
            outer_width: frame.outer_width(),
            outer_length: frame.outer_length(),
            outer_height: frame.outer_height(),
            inner_height: frame.inner_height(),
            interval: frame.interval(),
            inner_width,
            inner_length,
            rule: frame.rule(),
            has_substrate: frame.has_substrate(),
            has_stand: frame.has_stand(),
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Something that turns a validated frame into geometry (or a description of it)
pub trait FrameBuilder {
    type Output;

    /// Builder-specific work on an already validated snapshot
    fn construct(&mut self, sheet: BuildSheet) -> Result<Self::Output, BuildError>;

    /// Build a frame; invalid frames are rejected before [`Self::construct`] runs
    fn build<F>(&mut self, frame: &F) -> Result<Self::Output, BuildError>
    where
        F: Validatable + ParameterSet,
    {
        let sheet = BuildSheet::from_frame(frame)?;
        self.construct(sheet)
    }
}

/// Build sheet serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetFormat {
    #[default]
    Yaml,
    Json,
}

/// Render a build sheet to text
pub fn render_sheet(sheet: &BuildSheet, format: SheetFormat) -> Result<String, BuildError> {
    match format {
        SheetFormat::Yaml => {
            serde_yml::to_string(sheet).map_err(|e| BuildError::Render(e.to_string()))
        }
        SheetFormat::Json => serde_json::to_string_pretty(sheet)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| BuildError::Render(e.to_string())),
    }
}

/// Builder that writes the build sheet for a downstream CAD adapter
pub struct SheetBuilder<W: Write> {
    writer: W,
    format: SheetFormat,
    title: Option<String>,
}

impl<W: Write> SheetBuilder<W> {
    pub fn new(writer: W, format: SheetFormat) -> Self {
        Self {
            writer,
            format,
            title: None,
        }
    }

    /// Title stamped on every sheet this builder writes
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameBuilder for SheetBuilder<W> {
    type Output = BuildSheet;

    fn construct(&mut self, sheet: BuildSheet) -> Result<BuildSheet, BuildError> {
        let sheet = match &self.title {
            Some(title) => sheet.with_title(title.clone()),
            None => sheet,
        };

        let rendered = render_sheet(&sheet, self.format)?;
        self.writer.write_all(rendered.as_bytes())?;
        self.writer.flush()?;

        info!(
            inner_width = sheet.inner_width,
            inner_length = sheet.inner_length,
            "build sheet written"
        );
        Ok(sheet)
    }
}
