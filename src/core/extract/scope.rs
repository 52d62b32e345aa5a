use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::Scope;

/// How assignments are attributed to enclosing functions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ScopeTracking {
    /// The most recently visited `def` header wins, even for code that
    /// follows the function at an outer level. `async def` headers are not
    /// tracked.
    #[default]
    Flat,
    /// The innermost enclosing `def` or `async def` wins; code after a
    /// function body is attributed to the outer scope again.
    Lexical,
}

/// Function-context state threaded through one traversal.
///
/// Owned by a single extraction call, never shared between files.
#[derive(Debug)]
pub struct ScopeTracker {
    mode: ScopeTracking,
    /// Last function header seen (flat mode).
    last_function: Option<String>,
    /// Enclosing functions as (node id, name) pairs (lexical mode).
    stack: Vec<(usize, String)>,
}

impl ScopeTracker {
    pub fn new(mode: ScopeTracking) -> Self {
        Self {
            mode,
            last_function: None,
            stack: Vec::new(),
        }
    }

    pub fn mode(&self) -> ScopeTracking {
        self.mode
    }

    pub fn enter_function(&mut self, node_id: usize, name: &str) {
        match self.mode {
            ScopeTracking::Flat => self.last_function = Some(name.to_string()),
            ScopeTracking::Lexical => self.stack.push((node_id, name.to_string())),
        }
    }

    /// Called when the traversal leaves a function definition subtree.
    /// Flat mode deliberately keeps the name alive.
    pub fn leave_function(&mut self, node_id: usize) {
        if self.mode == ScopeTracking::Lexical
            && self.stack.last().is_some_and(|(id, _)| *id == node_id)
        {
            self.stack.pop();
        }
    }

    pub fn current(&self) -> Scope {
        let name = match self.mode {
            ScopeTracking::Flat => self.last_function.as_deref(),
            ScopeTracking::Lexical => self.stack.last().map(|(_, name)| name.as_str()),
        };
        name.map_or(Scope::Global, |name| Scope::Function(name.to_string()))
    }
}
