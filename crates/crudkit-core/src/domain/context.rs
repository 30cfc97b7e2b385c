//! Context for stub rendering.
//!
//! A **Value Object** binding named placeholders to the values derived from
//! one generation request. Stubs reference placeholders as `{{NAME}}`; the
//! context is the single place those names are defined, which replaces the
//! ad hoc find-and-replace chains the naive approach invites.
//!
//! ## Variable Naming Convention
//!
//! All built-in variables are `SCREAMING_SNAKE_CASE` to avoid collision with
//! literal text in the stubs.
//!
//! ## Built-in Variables
//!
//! | Variable | Example | Source |
//! |----------|---------|--------|
//! | `MODEL_CLASS` | "Task" | Model name |
//! | `TABLE_NAME` | "tasks" | Computed |
//! | `MODEL_VARIABLE` | "task" | Computed |
//!
//! Block variables (`FILLABLE`, `MIGRATION_COLUMNS`, `VALIDATION_RULES`,
//! `RELATION_METHODS`) are added by the generate service from the parsed
//! field and relation sequences.

use std::collections::HashMap;

use crate::domain::naming::ModelName;

/// Placeholder bindings for one render pass.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Variable map for substitution.
    /// `HashMap` (not `BTreeMap`): order is irrelevant for replacement and
    /// lookup is O(1).
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Create a context with the standard name-derived variables bound.
    ///
    /// All derivations happen once at construction; rendering is then a
    /// linear scan per variable.
    pub fn new(model: &ModelName) -> Self {
        let mut vars = HashMap::new();

        // Standard variables - the contract between Crudkit and its stubs.
        vars.insert("MODEL_CLASS".to_string(), model.class_name().to_string());
        vars.insert("TABLE_NAME".to_string(), model.table_name().to_string());
        vars.insert(
            "MODEL_VARIABLE".to_string(),
            model.variable_name().to_string(),
        );

        Self { variables: vars }
    }

    /// Add a variable, consuming self and returning a new context.
    ///
    /// Enables fluent construction:
    /// ```rust,ignore
    /// let ctx = RenderContext::new(&model)
    ///     .with_variable("FILLABLE", fillable)
    ///     .with_variable("VALIDATION_RULES", rules);
    /// ```
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a stub string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Simple linear scan and replace — adequate for stub sizes (< 10KB).
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - Repeated placeholders are all replaced
    pub fn render(&self, stub: &str) -> String {
        let mut result = stub.to_string();

        // Single-pass replacement. Order doesn't matter for independent variables.
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}
