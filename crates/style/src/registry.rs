//! Named style lookup shared by layout and decoration.

use super::error::StyleError;
use super::stylesheet::{Style, StyleDefinition, StyleOverride};
use std::collections::HashMap;
use std::sync::Arc;

/// Maps style names to resolved styles.
///
/// Populated before layout, read-only afterwards. Every document build owns
/// its own registry.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: HashMap<String, Arc<Style>>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from an ordered seed list. A definition may only name
    /// a parent registered earlier in the list.
    pub fn from_definitions(definitions: &[StyleDefinition]) -> Result<Self, StyleError> {
        let mut registry = Self::new();
        for def in definitions {
            match &def.parent {
                Some(parent) => registry.derive(&def.name, parent, &def.properties)?,
                None => registry.register(&def.name, Style::default().apply(&def.properties))?,
            }
        }
        Ok(registry)
    }

    /// Inserts `style` under `name`. A later registration of the same name
    /// replaces the earlier one wholesale.
    pub fn register(&mut self, name: &str, style: Style) -> Result<(), StyleError> {
        style
            .validate()
            .map_err(|e| StyleError::Config(format!("style '{}': {}", name, inner_message(e))))?;
        if self.styles.insert(name.to_string(), Arc::new(style)).is_some() {
            log::debug!("Style '{}' re-registered, previous definition replaced", name);
        }
        Ok(())
    }

    /// Registers `name` as a snapshot of `parent` with `overrides` applied.
    /// Later changes to `parent` do not propagate.
    pub fn derive(
        &mut self,
        name: &str,
        parent: &str,
        overrides: &StyleOverride,
    ) -> Result<(), StyleError> {
        let base = self.resolve(parent)?;
        self.register(name, base.apply(overrides))
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<Style>, StyleError> {
        self.styles
            .get(name)
            .cloned()
            .ok_or_else(|| StyleError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

fn inner_message(err: StyleError) -> String {
    match err {
        StyleError::Config(msg) | StyleError::NotFound(msg) => msg,
    }
}
