// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration diagnostics.
//!
//! Figment failures become miette reports. Unknown settings and mistyped
//! values are labelled in the TOML text they came from.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use std::path::Path;

use figment::error::Kind;
use miette::{Diagnostic, GraphicalReportHandler, NamedSource, SourceSpan};
use thiserror::Error;

/// Jaro-Winkler score a valid setting needs to be offered as a correction.
const CLOSE_ENOUGH: f64 = 0.75;

/// A TOML document that took part in loading, kept for labelling errors.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path as displayed, or `<inline>` for string input.
    pub name: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    fn labelled(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.text.clone())
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("unknown setting `{key}` in {table}")]
    #[diagnostic(code(irada::config::unknown_key), help("{help}"))]
    UnknownKey {
        key: String,
        table: String,
        suggestion: Option<String>,
        help: String,
        #[label("not an irada setting")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("`{key}` must be {expected}, found {found}")]
    #[diagnostic(code(irada::config::invalid_type))]
    InvalidType {
        key: String,
        found: String,
        expected: String,
        #[label("expected {expected}")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("{message}")]
    #[diagnostic(code(irada::config::invalid_value))]
    Validation { message: String },

    #[error("could not load configuration: {0}")]
    #[diagnostic(code(irada::config::load))]
    Load(String),
}

/// Splits a figment error into one diagnostic per underlying failure.
pub fn figment_to_config_errors(err: figment::Error, sources: &[SourceFile]) -> Vec<ConfigError> {
    err.into_iter()
        .map(|error| {
            let source = source_of(&error, sources);
            match &error.kind {
                Kind::UnknownField(key, expected) => {
                    let suggestion = closest_key(key, expected);
                    let (span, src) = label(source, &error.path, key);
                    ConfigError::UnknownKey {
                        table: table_name(&error.path),
                        help: match &suggestion {
                            Some(close) => format!("did you mean `{close}`?"),
                            None => format!("settings here: {}", expected.join(", ")),
                        },
                        key: key.clone(),
                        suggestion,
                        span,
                        src,
                    }
                }
                Kind::InvalidType(found, expected) => {
                    let (table, key) = match error.path.split_last() {
                        Some((key, table)) => (table, key.as_str()),
                        None => (&[][..], ""),
                    };
                    let (span, src) = label(source, table, key);
                    ConfigError::InvalidType {
                        key: error.path.join("."),
                        found: found.to_string(),
                        expected: expected.clone(),
                        span,
                        src,
                    }
                }
                _ => ConfigError::Load(error.to_string()),
            }
        })
        .collect()
}

fn table_name(path: &[String]) -> String {
    if path.is_empty() {
        "the top level".to_string()
    } else {
        format!("[{}]", path.join("."))
    }
}

/// The file the error was read from; string input has no path and matches
/// the first source.
fn source_of<'a>(error: &figment::Error, sources: &'a [SourceFile]) -> Option<&'a SourceFile> {
    let origin = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|s| s.file_path());
    sources
        .iter()
        .find(|file| origin.is_none_or(|path| path == Path::new(&file.name)))
}

fn label(
    source: Option<&SourceFile>,
    table: &[String],
    key: &str,
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    source
        .and_then(|file| Some((key_span(&file.text, table, key)?, file.labelled())))
        .map_or((None, None), |(span, src)| (Some(span), Some(src)))
}

/// Span of `key = ...` inside the TOML table named by `table`.
///
/// An empty `table` means keys before the first header.
pub fn key_span(text: &str, table: &[String], key: &str) -> Option<SourceSpan> {
    let wanted = table.join(".");
    let mut current = String::new();
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let body = line.trim_start();
        if let Some(header) = body.strip_prefix('[') {
            current = header.split(']').next().unwrap_or_default().trim().to_string();
        } else if current == wanted
            && body
                .split_once('=')
                .is_some_and(|(name, _)| name.trim_end() == key)
        {
            let start = offset + line.len() - body.len();
            return Some(SourceSpan::new(start.into(), key.len()));
        }
        offset += line.len();
    }
    None
}

/// The valid setting nearest to `unknown`, if any is close enough.
pub fn closest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(unknown, candidate), *candidate))
        .filter(|(score, _)| *score > CLOSE_ENOUGH)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, candidate)| candidate.to_string())
}

/// Formats every error with `handler`, one report after another.
pub fn render_with(handler: &GraphicalReportHandler, errors: &[ConfigError]) -> String {
    let mut out = String::new();
    for error in errors {
        if handler.render_report(&mut out, error as &dyn Diagnostic).is_err() {
            out.push_str(&format!("Error: {error}\n"));
        }
    }
    out
}

/// Prints every error to stderr.
pub fn render_errors(errors: &[ConfigError]) {
    eprint!("{}", render_with(&GraphicalReportHandler::new(), errors));
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::GraphicalTheme;

    fn path(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    fn spanned(text: &str, span: SourceSpan) -> &str {
        &text[span.offset()..span.offset() + span.len()]
    }

    #[test]
    fn close_typo_gets_a_correction() {
        let valid = &["endpoint", "key", "auth", "timeout_secs"];
        assert_eq!(closest_key("endpont", valid).as_deref(), Some("endpoint"));
        assert_eq!(closest_key("zzzzzz", &["limit", "tag_pool"]), None);
    }

    #[test]
    fn key_is_found_in_its_own_table() {
        let text = "[log]\nlevel = \"info\"\n[api]\n  endpont = \"x\"\n";
        let span = key_span(text, &path(&["api"]), "endpont").unwrap();
        assert_eq!(spanned(text, span), "endpont");
    }

    #[test]
    fn same_key_in_another_table_is_ignored() {
        let text = "[api]\nlimit = 1\n[similar]\nlimt = 3\n";
        assert_eq!(key_span(text, &path(&["api"]), "limt"), None);
        let span = key_span(text, &path(&["similar"]), "limt").unwrap();
        assert_eq!(span.offset(), text.find("limt").unwrap());
    }

    #[test]
    fn top_level_keys_stop_at_the_first_header() {
        let text = "colour = true\n[log]\ncolour = false\n";
        assert_eq!(key_span(text, &[], "colour").map(|s| s.offset()), Some(0));
    }

    #[test]
    fn report_names_the_key_and_the_correction() {
        let text = "[similar]\nlimt = 3\n";
        let error = ConfigError::UnknownKey {
            key: "limt".into(),
            table: "[similar]".into(),
            suggestion: Some("limit".into()),
            help: "did you mean `limit`?".into(),
            span: key_span(text, &path(&["similar"]), "limt"),
            src: Some(SourceFile::new("irada.toml", text).labelled()),
        };
        let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
        let report = render_with(&handler, &[error]);
        assert!(report.contains("unknown setting `limt` in [similar]"));
        assert!(report.contains("did you mean `limit`?"));
        assert!(report.contains("irada.toml"));
    }
}
