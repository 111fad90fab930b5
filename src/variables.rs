//! Custom-property scoping.
//!
//! Resolution is deliberately shallow: one substitution, no recursion into
//! values that are themselves `var()` references, and a two-level scope
//! lookup (the enclosing selector, falling back to `:root`). Callers depend
//! on exactly these semantics, so deeper resolution stays a future option.

use std::collections::HashMap;

use crate::stylesheet::Declaration;

/// The scope that every selector inherits from.
pub const ROOT_SCOPE: &str = ":root";

/// Custom-property definitions grouped by enclosing selector.
///
/// Built once per stylesheet and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct SelectorVariables {
    scopes: HashMap<String, HashMap<String, String>>,
}

impl SelectorVariables {
    /// Collect every `--*` declaration, grouped by its enclosing selector.
    /// A later definition of the same name under the same selector wins.
    pub fn from_declarations(declarations: &[Declaration]) -> Self {
        let mut scopes: HashMap<String, HashMap<String, String>> = HashMap::new();

        for decl in declarations {
            if !decl.property.starts_with("--") {
                continue;
            }
            let scope = decl.selector.as_deref().unwrap_or(ROOT_SCOPE);
            scopes
                .entry(scope.to_string())
                .or_default()
                .insert(decl.property.clone(), decl.value.clone());
        }

        Self { scopes }
    }

    /// The variables visible from `selector`: its own definitions merged over
    /// the `:root` ones, the selector winning on name collisions.
    pub fn resolve_for(&self, selector: Option<&str>) -> HashMap<String, String> {
        let mut merged = self.scopes.get(ROOT_SCOPE).cloned().unwrap_or_default();

        if let Some(selector) = selector {
            if selector != ROOT_SCOPE {
                if let Some(own) = self.scopes.get(selector) {
                    for (name, value) in own {
                        merged.insert(name.clone(), value.clone());
                    }
                }
            }
        }

        merged
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
