use crate::error::{DomError, DomErrorKind, Result};

/// Node budget for a single walk. Large enough for any backup export the
/// tree is built for.
pub const DEFAULT_MAX_NODES: usize = 100_000_000;

/// Limits and matching rules for walkers and processors
#[derive(Debug, Clone)]
pub struct DomConfig {
    /// Maximum number of nodes a single walk visits
    pub max_nodes: usize,
    /// Case-sensitive name matching in lookups
    pub strict_names: bool,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            strict_names: true,
        }
    }
}

impl DomConfig {
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_strict_names(mut self, strict_names: bool) -> Self {
        self.strict_names = strict_names;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_nodes == 0 {
            return Err(DomError::new(DomErrorKind::InvalidConfig(
                "max_nodes must be greater than zero".to_string(),
            )));
        }
        Ok(())
    }

    pub(crate) fn names_match(&self, left: &str, right: &str) -> bool {
        if self.strict_names {
            left == right
        } else {
            left.chars()
                .flat_map(char::to_lowercase)
                .eq(right.chars().flat_map(char::to_lowercase))
        }
    }
}
