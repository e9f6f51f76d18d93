use std::path::Path;

use thiserror::Error;

use crate::models::Grant;

/// Errors that can occur while loading the grant catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no grants")]
    Empty,
}

/// Built-in dataset, embedded at compile time
const BUILTIN_GRANTS: &str = include_str!("../data/grants.json");

/// The in-memory grant catalog
///
/// Read-only after load. Grants keep their authored order, which is also the
/// order match results come back in.
#[derive(Debug, Clone)]
pub struct GrantCatalog {
    grants: Vec<Grant>,
}

impl GrantCatalog {
    /// Load the built-in dataset
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_GRANTS)
    }

    /// Load a catalog from an operator-supplied JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn from_json(json: &str) -> Result<Self, CatalogError> {
        let grants: Vec<Grant> = serde_json::from_str(json)?;
        if grants.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { grants })
    }

    pub fn grants(&self) -> &[Grant] {
        &self.grants
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}
