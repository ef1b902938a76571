//! Cell-level rule evaluation.
//!
//! [`CompiledRule::compile`] parses the rule parameter once (length,
//! pattern, identifier scheme) and surfaces configuration faults as
//! [`RuleError`]. [`CompiledRule::check`] is then a pure predicate over the
//! cell text.

use regex::Regex;
use sheetcheck_model::{IdentifierScheme, RuleError, RuleKind, ValidationRule};

use crate::identifiers;

/// Parse a cell as a finite number.
///
/// Shared by the `Numeric` and `NumericPositive` rules. Surrounding
/// whitespace is ignored; sign, decimals and exponents are accepted;
/// `inf` and `NaN` are not numbers here.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

#[derive(Debug, Clone)]
enum Check {
    Required,
    Pattern(Regex),
    MaxLength(usize),
    MinLength(usize),
    ExactLength(usize),
    Identifier(IdentifierScheme),
    Numeric,
    NumericPositive,
    PassThrough,
}

/// A rule with its parameter parsed and ready to check cells.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: ValidationRule,
    check: Check,
}

impl CompiledRule {
    /// # Errors
    ///
    /// Returns a [`RuleError`] when a length or pattern parameter is missing
    /// or malformed, or when an identifier scheme name is not recognized.
    pub fn compile(rule: &ValidationRule) -> Result<Self, RuleError> {
        let check = match rule.kind() {
            RuleKind::Required => Check::Required,
            RuleKind::PatternMatch => Check::Pattern(compile_pattern(rule)?),
            RuleKind::MaxLength => Check::MaxLength(length_parameter(rule)?),
            RuleKind::MinLength => Check::MinLength(length_parameter(rule)?),
            RuleKind::ExactLength => Check::ExactLength(length_parameter(rule)?),
            RuleKind::ProductIdentifier => Check::Identifier(identifier_scheme(rule)?),
            RuleKind::Numeric => Check::Numeric,
            RuleKind::NumericPositive => Check::NumericPositive,
            RuleKind::Unknown(_) => Check::PassThrough,
        };
        Ok(Self {
            rule: rule.clone(),
            check,
        })
    }

    pub fn rule(&self) -> &ValidationRule {
        &self.rule
    }

    /// Whether `value` satisfies the rule.
    pub fn check(&self, value: &str) -> bool {
        match &self.check {
            Check::Required => !value.trim().is_empty(),
            Check::Pattern(regex) => regex.is_match(value),
            Check::MaxLength(max) => value.chars().count() <= *max,
            Check::MinLength(min) => value.chars().count() >= *min,
            Check::ExactLength(len) => value.chars().count() == *len,
            Check::Identifier(scheme) => identifiers::validate(*scheme, value),
            Check::Numeric => parse_number(value).is_some(),
            Check::NumericPositive => parse_number(value).is_some_and(|number| number > 0.0),
            Check::PassThrough => true,
        }
    }
}

/// Evaluate one cell against one rule.
///
/// # Errors
///
/// Returns a [`RuleError`] when the rule itself is misconfigured; see
/// [`CompiledRule::compile`].
pub fn evaluate(value: &str, rule: &ValidationRule) -> Result<bool, RuleError> {
    Ok(CompiledRule::compile(rule)?.check(value))
}

fn required_parameter(rule: &ValidationRule) -> Result<&str, RuleError> {
    rule.value().ok_or_else(|| RuleError::MissingParameter {
        column: rule.column_name().to_string(),
        kind: rule.kind().to_string(),
    })
}

fn length_parameter(rule: &ValidationRule) -> Result<usize, RuleError> {
    let raw = required_parameter(rule)?;
    raw.trim()
        .parse::<usize>()
        .map_err(|_| RuleError::InvalidLength {
            column: rule.column_name().to_string(),
            kind: rule.kind().to_string(),
            value: raw.to_string(),
        })
}

fn compile_pattern(rule: &ValidationRule) -> Result<Regex, RuleError> {
    let pattern = required_parameter(rule)?;
    let invalid = |error: regex::Error| RuleError::InvalidPattern {
        column: rule.column_name().to_string(),
        pattern: pattern.to_string(),
        reason: error.to_string(),
    };
    // The raw pattern must parse by itself; a stray `)` could otherwise close
    // the wrapper group and leave the alternation unanchored.
    Regex::new(pattern).map_err(invalid)?;
    // Anchored so the whole cell must match.
    Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)
}

fn identifier_scheme(rule: &ValidationRule) -> Result<IdentifierScheme, RuleError> {
    let Some(name) = rule.value() else {
        return Ok(IdentifierScheme::default());
    };
    IdentifierScheme::parse(name).ok_or_else(|| RuleError::UnknownScheme {
        column: rule.column_name().to_string(),
        scheme: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(kind: RuleKind) -> ValidationRule {
        ValidationRule::new("COL", kind).unwrap()
    }

    fn rule_with(kind: RuleKind, value: &str) -> ValidationRule {
        rule(kind).with_value(value)
    }

    #[test]
    fn required() {
        let required = rule(RuleKind::Required);
        assert_eq!(evaluate("", &required), Ok(false));
        assert_eq!(evaluate("   ", &required), Ok(false));
        assert_eq!(evaluate("\t\n", &required), Ok(false));
        assert_eq!(evaluate("x", &required), Ok(true));
    }

    #[test]
    fn lengths() {
        let max = rule_with(RuleKind::MaxLength, "4");
        assert_eq!(evaluate("99999", &max), Ok(false));
        assert_eq!(evaluate("9999", &max), Ok(true));
        assert_eq!(evaluate("", &max), Ok(true));

        let exact = rule_with(RuleKind::ExactLength, "8");
        assert_eq!(evaluate("99999999", &exact), Ok(true));
        assert_eq!(evaluate("9999999", &exact), Ok(false));

        let min = rule_with(RuleKind::MinLength, " 3 ");
        assert_eq!(evaluate("ab", &min), Ok(false));
        assert_eq!(evaluate("abc", &min), Ok(true));
    }

    #[test]
    fn lengths_count_characters() {
        let exact = rule_with(RuleKind::ExactLength, "4");
        assert_eq!(evaluate("São!", &exact), Ok(true));
    }

    #[test]
    fn length_parameter_faults() {
        let missing = rule(RuleKind::MaxLength);
        assert!(matches!(
            evaluate("x", &missing),
            Err(RuleError::MissingParameter { .. })
        ));
        for bad in ["four", "-1", "4.5", ""] {
            let rule = rule_with(RuleKind::ExactLength, bad);
            assert!(
                matches!(evaluate("x", &rule), Err(RuleError::InvalidLength { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn pattern_matches_whole_value() {
        let pattern = rule_with(RuleKind::PatternMatch, r"\d{4}");
        assert_eq!(evaluate("2024", &pattern), Ok(true));
        assert_eq!(evaluate("x2024", &pattern), Ok(false));
        assert_eq!(evaluate("20245", &pattern), Ok(false));

        let alternation = rule_with(RuleKind::PatternMatch, "a|b");
        assert_eq!(evaluate("a", &alternation), Ok(true));
        assert_eq!(evaluate("ab", &alternation), Ok(false));

        let anchored = rule_with(RuleKind::PatternMatch, "^[A-Z]+$");
        assert_eq!(evaluate("ABC", &anchored), Ok(true));
    }

    #[test]
    fn pattern_faults() {
        let broken = rule_with(RuleKind::PatternMatch, "(unclosed");
        assert!(matches!(
            evaluate("x", &broken),
            Err(RuleError::InvalidPattern { .. })
        ));
        let missing = rule(RuleKind::PatternMatch);
        assert!(matches!(
            evaluate("x", &missing),
            Err(RuleError::MissingParameter { .. })
        ));
    }

    #[test]
    fn unbalanced_group_cannot_escape_anchoring() {
        for (pattern, value) in [("a)|(b", "axyz"), ("[0-9]+)|(x", "123zzz")] {
            let broken = rule_with(RuleKind::PatternMatch, pattern);
            assert!(
                matches!(
                    CompiledRule::compile(&broken),
                    Err(RuleError::InvalidPattern { .. })
                ),
                "{pattern} compiled"
            );
            assert!(matches!(
                evaluate(value, &broken),
                Err(RuleError::InvalidPattern { .. })
            ));
        }
    }

    #[test]
    fn product_identifier() {
        let gtin = rule(RuleKind::ProductIdentifier);
        assert_eq!(evaluate("0", &gtin), Ok(false));
        assert_eq!(evaluate("036000291452", &gtin), Ok(true));
        assert_eq!(evaluate("4006381333931", &gtin), Ok(true));
        assert_eq!(evaluate("sem gtin", &gtin), Ok(true));

        let isbn = rule_with(RuleKind::ProductIdentifier, "ISBN");
        assert_eq!(evaluate("ISBN 0-306-40615-2", &isbn), Ok(true));
        assert_eq!(evaluate("036000291452", &isbn), Ok(false));

        let unknown = rule_with(RuleKind::ProductIdentifier, "ISSN");
        assert!(matches!(
            evaluate("x", &unknown),
            Err(RuleError::UnknownScheme { .. })
        ));
    }

    #[test]
    fn numeric() {
        let numeric = rule(RuleKind::Numeric);
        assert_eq!(evaluate("2", &numeric), Ok(true));
        assert_eq!(evaluate("-1.5", &numeric), Ok(true));
        assert_eq!(evaluate("1e3", &numeric), Ok(true));
        assert_eq!(evaluate(" 7 ", &numeric), Ok(true));
        assert_eq!(evaluate("", &numeric), Ok(false));
        assert_eq!(evaluate("abc", &numeric), Ok(false));
        assert_eq!(evaluate("NaN", &numeric), Ok(false));
        assert_eq!(evaluate("inf", &numeric), Ok(false));
    }

    #[test]
    fn numeric_positive() {
        let positive = rule(RuleKind::NumericPositive);
        assert_eq!(evaluate("2", &positive), Ok(true));
        assert_eq!(evaluate("0.01", &positive), Ok(true));
        assert_eq!(evaluate("1e3", &positive), Ok(true));
        assert_eq!(evaluate("0", &positive), Ok(false));
        assert_eq!(evaluate("-1", &positive), Ok(false));
        assert_eq!(evaluate("", &positive), Ok(false));
        assert_eq!(evaluate("inf", &positive), Ok(false));
    }

    #[test]
    fn numeric_grammars_agree() {
        let numeric = CompiledRule::compile(&rule(RuleKind::Numeric)).unwrap();
        let positive = CompiledRule::compile(&rule(RuleKind::NumericPositive)).unwrap();
        for value in ["1", "1.0", "1e2", "+3", " 4", ".5", "5.", "1_000", "0x10", "1,5"] {
            if positive.check(value) {
                assert!(numeric.check(value), "{value:?} positive but not numeric");
            }
            if numeric.check(value) && parse_number(value).unwrap() > 0.0 {
                assert!(positive.check(value), "{value:?} numeric and > 0");
            }
        }
    }

    #[test]
    fn unknown_kind_passes() {
        let unknown = rule(RuleKind::Unknown("Checksum".to_string()));
        assert_eq!(evaluate("", &unknown), Ok(true));
        assert_eq!(evaluate("anything", &unknown), Ok(true));
    }
}
