//! The serializable description of a whole document.

use crate::error::PipelineError;
use quire_layout::{Block, LayoutConfig, PageGeometry};
use quire_render_core::PageTemplate;
use quire_style::{StyleDefinition, StyleRegistry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Everything needed to build one document: page geometry, styles, content
/// blocks and page decorations.
///
/// Styles are registered in list order, so a style may only name a parent
/// that appears earlier in the list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub geometry: PageGeometry,
    pub styles: Vec<StyleDefinition>,
    pub blocks: Vec<Block>,
    pub template: PageTemplate,
    pub layout: LayoutConfig,
}

impl DocumentSpec {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read document from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&source)
    }

    pub fn to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A fresh registry holding this document's styles.
    pub fn style_registry(&self) -> Result<StyleRegistry, PipelineError> {
        Ok(StyleRegistry::from_definitions(&self.styles)?)
    }
}
