//! Column name to rule mapping.

use std::collections::BTreeMap;

use sheetcheck_model::{RuleError, ValidationRule};
use tracing::{debug, warn};

use crate::evaluator::CompiledRule;

/// Compiled rules keyed by exact column name.
///
/// When two rules name the same column the later one wins; the overridden
/// column names are kept in [`RuleSet::duplicate_columns`].
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<String, CompiledRule>,
    duplicates: Vec<String>,
}

impl RuleSet {
    /// Compile every rule and index it by column name.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuleError`] raised while compiling a rule.
    pub fn new<I>(rules: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = ValidationRule>,
    {
        let mut set = Self::default();
        for rule in rules {
            let compiled = CompiledRule::compile(&rule)?;
            if rule.kind().is_unknown() {
                warn!(
                    column = rule.column_name(),
                    rule_type = rule.kind().label(),
                    "unrecognized rule type, cells in this column always pass"
                );
            }
            let column = rule.column_name().to_string();
            if set.rules.insert(column.clone(), compiled).is_some() {
                warn!(column = %column, "duplicate rule for column, keeping the last one");
                set.duplicates.push(column);
            }
        }
        debug!(rules = set.rules.len(), "rule set compiled");
        Ok(set)
    }

    pub fn from_rules(rules: &[ValidationRule]) -> Result<Self, RuleError> {
        Self::new(rules.iter().cloned())
    }

    pub fn rule_for(&self, column_name: &str) -> Option<&CompiledRule> {
        self.rules.get(column_name)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Columns that were named by more than one rule, once per override.
    pub fn duplicate_columns(&self) -> &[String] {
        &self.duplicates
    }
}
