//! Per-column validation rules.
//!
//! A [`ValidationRule`] binds one column to one [`RuleKind`]. Rules are
//! immutable once built and deserialize from the `{columnName, ruleType,
//! ruleValue, errorMessage}` shape used by rule files.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// Message attached to failing cells when a rule has none configured.
pub const DEFAULT_ERROR_MESSAGE: &str = "Invalid data";

/// Category of check a rule applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleKind {
    /// Value is non-empty after trimming whitespace
    Required,
    /// Value fully matches a regular expression
    PatternMatch,
    /// Character count is at most the parameter
    MaxLength,
    /// Character count is at least the parameter
    MinLength,
    /// Character count equals the parameter
    ExactLength,
    /// Value is a valid product identifier (GTIN family by default)
    ProductIdentifier,
    /// Value parses as a number
    Numeric,
    /// Value parses as a number greater than zero
    NumericPositive,
    /// Unrecognized rule type, always passes
    Unknown(String),
}

impl RuleKind {
    /// Parse a rule type tag, case-insensitively.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "required" => Self::Required,
            "regex" | "pattern" | "patternmatch" => Self::PatternMatch,
            "maxlength" => Self::MaxLength,
            "minlength" => Self::MinLength,
            "length" | "exactlength" => Self::ExactLength,
            "gtin" | "productidentifier" => Self::ProductIdentifier,
            "numeric" => Self::Numeric,
            "numericgtzero" | "numericpositive" => Self::NumericPositive,
            _ => Self::Unknown(s.trim().to_string()),
        }
    }

    /// Canonical tag.
    pub fn label(&self) -> &str {
        match self {
            Self::Required => "Required",
            Self::PatternMatch => "PatternMatch",
            Self::MaxLength => "MaxLength",
            Self::MinLength => "MinLength",
            Self::ExactLength => "ExactLength",
            Self::ProductIdentifier => "ProductIdentifier",
            Self::Numeric => "Numeric",
            Self::NumericPositive => "NumericPositive",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for RuleKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<RuleKind> for String {
    fn from(kind: RuleKind) -> Self {
        kind.label().to_string()
    }
}

/// Product identifier family checked by a `ProductIdentifier` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IdentifierScheme {
    /// EAN-13 (with the "SEM GTIN" escape) or any GTIN-8/12/13/14
    #[default]
    GtinFamily,
    Ean,
    Gtin,
    Upc,
    Isbn,
    Asin,
}

impl IdentifierScheme {
    /// Every scheme, in reporting order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::GtinFamily,
            Self::Ean,
            Self::Gtin,
            Self::Upc,
            Self::Isbn,
            Self::Asin,
        ]
    }

    /// Parse a scheme name from a rule value.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "gtin-family" | "gtinfamily" | "product" => Some(Self::GtinFamily),
            "ean" | "ean13" | "ean-13" => Some(Self::Ean),
            "gtin" => Some(Self::Gtin),
            "upc" => Some(Self::Upc),
            "isbn" => Some(Self::Isbn),
            "asin" => Some(Self::Asin),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::GtinFamily => "GTIN family",
            Self::Ean => "EAN-13",
            Self::Gtin => "GTIN",
            Self::Upc => "UPC",
            Self::Isbn => "ISBN",
            Self::Asin => "ASIN",
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRule {
    column_name: String,
    #[serde(alias = "kind")]
    rule_type: RuleKind,
    #[serde(default)]
    rule_value: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

/// A rule for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRule", rename_all = "camelCase")]
pub struct ValidationRule {
    column_name: String,
    #[serde(rename = "ruleType")]
    kind: RuleKind,
    #[serde(rename = "ruleValue", skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl ValidationRule {
    /// Build a rule without a parameter or custom message.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyColumnName`] when `column_name` is blank.
    pub fn new(column_name: impl Into<String>, kind: RuleKind) -> Result<Self, RuleError> {
        let column_name = column_name.into();
        if column_name.trim().is_empty() {
            return Err(RuleError::EmptyColumnName);
        }
        Ok(Self {
            column_name,
            kind,
            value: None,
            error_message: None,
        })
    }

    /// Set the rule parameter (length, pattern, or identifier scheme).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the message attached to failing cells.
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Configured message, or [`DEFAULT_ERROR_MESSAGE`].
    pub fn message(&self) -> &str {
        self.error_message.as_deref().unwrap_or(DEFAULT_ERROR_MESSAGE)
    }
}

impl TryFrom<RawRule> for ValidationRule {
    type Error = RuleError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        let mut rule = Self::new(raw.column_name, raw.rule_type)?;
        rule.value = raw.rule_value;
        rule.error_message = raw.error_message;
        Ok(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_legacy_and_canonical_tags() {
        assert_eq!(RuleKind::parse("Regex"), RuleKind::PatternMatch);
        assert_eq!(RuleKind::parse("Length"), RuleKind::ExactLength);
        assert_eq!(RuleKind::parse("GTIN"), RuleKind::ProductIdentifier);
        assert_eq!(RuleKind::parse("NumericGTZero"), RuleKind::NumericPositive);
        assert_eq!(RuleKind::parse(" numericpositive "), RuleKind::NumericPositive);
        assert_eq!(
            RuleKind::parse("Checksum"),
            RuleKind::Unknown("Checksum".to_string())
        );
    }

    #[test]
    fn message_falls_back_to_default() {
        let rule = ValidationRule::new("Nome", RuleKind::Required).unwrap();
        assert_eq!(rule.message(), DEFAULT_ERROR_MESSAGE);
        let rule = rule.with_error_message("Nome is required");
        assert_eq!(rule.message(), "Nome is required");
    }

    #[test]
    fn rejects_blank_column_name() {
        assert_eq!(
            ValidationRule::new("  ", RuleKind::Required),
            Err(RuleError::EmptyColumnName)
        );
    }

    #[test]
    fn deserializes_rule_file_entry() {
        let json = r#"{"columnName":"CEST","ruleType":"MaxLength","ruleValue":"4","errorMessage":"Bad format"}"#;
        let rule: ValidationRule = serde_json::from_str(json).expect("deserialize rule");
        assert_eq!(rule.column_name(), "CEST");
        assert_eq!(rule.kind(), &RuleKind::MaxLength);
        assert_eq!(rule.value(), Some("4"));
        assert_eq!(rule.message(), "Bad format");

        let round = serde_json::to_string(&rule).expect("serialize rule");
        assert_eq!(round, json);
    }

    #[test]
    fn deserialize_rejects_empty_column() {
        let json = r#"{"columnName":"","ruleType":"Required"}"#;
        assert!(serde_json::from_str::<ValidationRule>(json).is_err());
    }

    #[test]
    fn scheme_names() {
        assert_eq!(IdentifierScheme::parse("ISBN"), Some(IdentifierScheme::Isbn));
        assert_eq!(IdentifierScheme::parse(""), Some(IdentifierScheme::GtinFamily));
        assert_eq!(IdentifierScheme::parse("isbn13x"), None);
    }
}
