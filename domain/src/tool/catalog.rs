//! The set of callable functions produced by a catalog build.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use super::entities::{Provenance, ToolDescriptor};
use crate::schema::FunctionDeclaration;

/// A tool left out of the catalog, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedTool {
    pub name: String,
    pub provenance: Provenance,
    pub reason: String,
}

/// Callable functions plus the identifier → descriptor lookup.
///
/// Entries keep insertion order. Two native names that sanitize to the same
/// identifier both stay in the list, but lookups resolve to the one
/// inserted last.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<ToolDescriptor>,
    declarations: Vec<FunctionDeclaration>,
    index: HashMap<String, usize>,
    skipped: Vec<SkippedTool>,
}

impl ToolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool and its declaration.
    pub fn insert(&mut self, descriptor: ToolDescriptor, declaration: FunctionDeclaration) {
        self.index
            .insert(descriptor.identifier.clone(), self.tools.len());
        self.tools.push(descriptor);
        self.declarations.push(declaration);
    }

    pub fn record_skipped(&mut self, skipped: SkippedTool) {
        self.skipped.push(skipped);
    }

    /// Resolve an identifier to its descriptor.
    pub fn get(&self, identifier: &str) -> Option<&ToolDescriptor> {
        self.index.get(identifier).map(|&i| &self.tools[i])
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn declarations(&self) -> &[FunctionDeclaration] {
        &self.declarations
    }

    pub fn skipped(&self) -> &[SkippedTool] {
        &self.skipped
    }

    /// Number of callable functions in the list.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Number of distinct identifiers reachable by lookup.
    pub fn identifier_count(&self) -> usize {
        self.index.len()
    }

    pub fn count_by_provenance(&self, provenance: Provenance) -> usize {
        self.tools
            .iter()
            .filter(|t| t.provenance == provenance)
            .count()
    }

    /// Declarations as a JSON array, for listings and debugging.
    pub fn available_functions(&self) -> Value {
        serde_json::to_value(&self.declarations).unwrap_or_else(|_| Value::Array(Vec::new()))
    }
}
