//! Validation engine for analysis specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against an
//! [`AnalysisSpec`](super::spec::AnalysisSpec) and collects every diagnostic
//! into a [`ValidationReport`]. It never short-circuits on the first error,
//! so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rapid_textmetrics::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::*;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Errors block a run; warnings are logged and the run continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding attached to a [`SpecError`].
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Every diagnostic produced for one spec, in rule order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// A spec with only warnings is still usable.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects an [`AnalysisSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync`.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"runtime_limits"`).
    fn name(&self) -> &str;

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against an [`AnalysisSpec`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Version, runtime limits, lexicon files and unknown fields.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(RuntimeLimitsRule));
        engine.add_rule(Box::new(LexiconFilesRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule; never stops at the first error.
    pub fn validate(&self, spec: &AnalysisSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }

    /// Validate and turn any errors into [`AnalysisError::InvalidSpec`].
    ///
    /// On success the report is returned so callers can surface warnings.
    pub fn ensure_valid(&self, spec: &AnalysisSpec) -> AnalysisResult<ValidationReport> {
        let report = self.validate(spec);
        if report.is_valid() {
            return Ok(report);
        }
        let messages: Vec<String> = report.errors().map(ToString::to_string).collect();
        Err(AnalysisError::InvalidSpec(messages.join("; ")))
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Supported version ───────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\": {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Runtime limits must be positive when set ────────────────────────────

struct RuntimeLimitsRule;

impl ValidationRule for RuntimeLimitsRule {
    fn name(&self) -> &str {
        "runtime_limits"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        let checks: &[(&str, Option<usize>)] = &[
            ("max_chars", spec.runtime.max_chars),
            ("min_parallel_docs", spec.runtime.min_parallel_docs),
            ("threads", spec.runtime.threads),
        ];

        for &(field, value) in checks {
            if value == Some(0) {
                out.push(ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::LimitExceeded,
                        format!("/runtime/{field}"),
                        format!("{field} must be greater than 0"),
                    )
                    .with_hint(format!(
                        "Remove {field} to use the default, or set it to a positive value"
                    )),
                ));
            }
        }

        out
    }
}

// ─── 3. Sentiment lists must be two distinct, named files ───────────────────

struct LexiconFilesRule;

impl ValidationRule for LexiconFilesRule {
    fn name(&self) -> &str {
        "lexicon_files"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        let lex = &spec.lexicon;
        let mut out = Vec::new();

        for (field, value) in [
            ("positive_file", &lex.positive_file),
            ("negative_file", &lex.negative_file),
        ] {
            if value.trim().is_empty() {
                out.push(ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::InvalidCombo,
                        format!("/lexicon/{field}"),
                        format!("{field} must not be empty"),
                    )
                    .with_hint("Remove the field to use the default file name"),
                ));
            }
        }

        if !lex.positive_file.trim().is_empty() && lex.positive_file == lex.negative_file {
            out.push(ValidationDiagnostic::warning(
                SpecError::new(
                    ErrorCode::InvalidCombo,
                    "/lexicon/negative_file",
                    "positive and negative word lists are the same file",
                )
                .with_hint("Every polarity score will be 0; point negative_file at a different list"),
            ));
        }

        out
    }
}

// ─── 4. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// One diagnostic per captured key under `path`, sorted by key.
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        out.extend(Self::check_unknowns(
            "/lexicon",
            &spec.lexicon.unknown_fields,
            spec.strict,
        ));
        out.extend(Self::check_unknowns(
            "/runtime",
            &spec.runtime.unknown_fields,
            spec.strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(json: &str) -> AnalysisSpec {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    // ─── ensure_valid ───────────────────────────────────────────────────

    #[test]
    fn test_ensure_valid_returns_report_with_warnings() {
        let report = engine()
            .ensure_valid(&spec(r#"{ "v": 1, "extra": true }"#))
            .unwrap();
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_ensure_valid_rejects_errors_as_invalid_spec() {
        let err = engine()
            .ensure_valid(&spec(r#"{ "v": 2, "runtime": { "threads": 0 } }"#))
            .unwrap_err();
        match err {
            AnalysisError::InvalidSpec(message) => {
                assert!(message.contains("[unsupported_version] /v"));
                assert!(message.contains("[limit_exceeded] /runtime/threads"));
            }
            other => panic!("expected InvalidSpec, got {other:?}"),
        }
    }

    // ─── Valid specs ────────────────────────────────────────────────────

    #[test]
    fn test_minimal_spec_is_valid() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_default_spec_is_valid() {
        assert!(engine().validate(&AnalysisSpec::default()).is_empty());
    }

    #[test]
    fn test_runtime_limits_positive_is_valid() {
        let report = engine().validate(&spec(
            r#"{
                "v": 1,
                "runtime": { "max_chars": 100000, "min_parallel_docs": 4, "threads": 8 }
            }"#,
        ));
        assert!(report.is_valid());
    }

    // ─── Rule: version ──────────────────────────────────────────────────

    #[test]
    fn test_unknown_version_fails() {
        let report = engine().validate(&spec(r#"{ "v": 2 }"#));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::UnsupportedVersion);
        assert_eq!(errs[0].path, "/v");
    }

    // ─── Rule: runtime_limits ───────────────────────────────────────────

    #[test]
    fn test_zero_max_chars_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "runtime": { "max_chars": 0 } }"#));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::LimitExceeded);
        assert!(errs[0].path.contains("max_chars"));
    }

    #[test]
    fn test_zero_threads_and_threshold_reports_two_errors() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "runtime": { "threads": 0, "min_parallel_docs": 0 } }"#,
        ));
        assert_eq!(report.errors().count(), 2);
    }

    // ─── Rule: lexicon_files ────────────────────────────────────────────

    #[test]
    fn test_same_sentiment_file_warns() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "lexicon": { "positive_file": "words.txt", "negative_file": "words.txt" } }"#,
        ));
        assert!(report.is_valid());
        let warns: Vec<_> = report.warnings().collect();
        assert_eq!(warns.len(), 1);
        assert_eq!(warns[0].code, ErrorCode::InvalidCombo);
    }

    #[test]
    fn test_empty_file_name_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "lexicon": { "positive_file": " " } }"#));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path, "/lexicon/positive_file");
    }

    // ─── Rule: unknown_fields ───────────────────────────────────────────

    #[test]
    fn test_unknown_fields_warn_when_not_strict() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "extra": true, "runtime": { "timeout": 3 } }"#,
        ));
        assert!(report.is_valid());
        let paths: Vec<_> = report.warnings().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, vec!["/extra", "/runtime/timeout"]);
    }

    #[test]
    fn test_unknown_fields_fail_when_strict() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "strict": true, "lexicon": { "encoding": "latin-1" } }"#,
        ));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::UnknownField);
        assert_eq!(errs[0].path, "/lexicon/encoding");
    }

    // ─── Engine ─────────────────────────────────────────────────────────

    #[test]
    fn test_all_problems_reported_at_once() {
        let report = engine().validate(&spec(
            r#"{ "v": 3, "strict": true, "runtime": { "max_chars": 0 }, "oops": 1 }"#,
        ));
        assert_eq!(report.errors().count(), 3);
    }

    #[test]
    fn test_custom_rule() {
        struct NoThreads;

        impl ValidationRule for NoThreads {
            fn name(&self) -> &str {
                "no_threads"
            }

            fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
                spec.runtime
                    .threads
                    .map(|_| {
                        ValidationDiagnostic::warning(SpecError::new(
                            ErrorCode::InvalidCombo,
                            "/runtime/threads",
                            "threads are ignored here",
                        ))
                    })
                    .into_iter()
                    .collect()
            }
        }

        let mut engine = ValidationEngine::new();
        engine.add_rule(Box::new(NoThreads));
        assert_eq!(engine.rule_names(), vec!["no_threads"]);

        let report = engine.validate(&spec(r#"{ "v": 1, "runtime": { "threads": 2 } }"#));
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = engine().validate(&spec(r#"{ "v": 1, "x": 1 }"#));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["diagnostics"][0]["severity"], "warning");
        assert_eq!(json["diagnostics"][0]["code"], "unknown_field");
        assert_eq!(json["diagnostics"][0]["path"], "/x");
    }
}
