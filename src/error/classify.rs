//! Table-driven classification of Turbot API error messages.
//!
//! The API reports failures as free text in the GraphQL `errors` list. A
//! [`Classifier`] walks an ordered list of [`Rule`]s and returns the kind of
//! the first rule with a matching [`Pattern`]. The built-in table is
//! exposed through [`classify_message`].

use super::ErrorKind;

/// A single matcher against an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Case-insensitive substring match.
    Phrase(&'static str),
    /// Whole-token match, for status codes embedded in text ("404" matches
    /// "HTTP 404: gone" but not "resource 1404").
    Code(&'static str),
}

impl Pattern {
    /// Returns `true` if the pattern matches the given message.
    ///
    /// `lowered` must be the lowercased message.
    fn matches(&self, lowered: &str) -> bool {
        match self {
            Pattern::Phrase(phrase) => lowered.contains(phrase),
            Pattern::Code(code) => lowered
                .split(|c: char| !c.is_ascii_alphanumeric())
                .any(|token| token == *code),
        }
    }
}

/// Maps a set of patterns to an error kind.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// The kind assigned when any pattern matches.
    pub kind: ErrorKind,
    /// Patterns tested in order.
    pub patterns: &'static [Pattern],
}

/// Validation is checked before not-found: validation failures quote numeric
/// resource ids that can contain status-like digits.
const BUILTIN_RULES: &[Rule] = &[
    Rule {
        kind: ErrorKind::FailedValidation,
        patterns: &[
            Pattern::Phrase("failed validation"),
            Pattern::Phrase("validation failed"),
            Pattern::Phrase("data validation"),
        ],
    },
    Rule {
        kind: ErrorKind::NotFound,
        patterns: &[Pattern::Phrase("not found"), Pattern::Code("404")],
    },
    Rule {
        kind: ErrorKind::Unauthorized,
        patterns: &[
            Pattern::Phrase("unauthorized"),
            Pattern::Phrase("unauthorised"),
            Pattern::Phrase("authorisation failed"),
            Pattern::Phrase("authentication failed"),
            Pattern::Phrase("forbidden"),
            Pattern::Code("401"),
            Pattern::Code("403"),
        ],
    },
    Rule {
        kind: ErrorKind::Conflict,
        patterns: &[Pattern::Phrase("already exists")],
    },
];

/// An ordered rule table for error message classification.
///
/// ## Example
///
/// ```rust
/// use turbot_provider::ErrorKind;
/// use turbot_provider::error::{Classifier, Pattern, Rule};
///
/// let classifier = Classifier::default().with_rule(Rule {
///     kind: ErrorKind::Unavailable,
///     patterns: &[Pattern::Phrase("maintenance mode")],
/// });
/// assert_eq!(
///     classifier.classify("Workspace is in maintenance mode"),
///     ErrorKind::Unavailable
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    /// Creates a classifier with an explicit rule table.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Appends a rule, evaluated after the existing ones.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the kind of the first matching rule, or `ErrorKind::Unknown`.
    pub fn classify(&self, message: &str) -> ErrorKind {
        first_match(&self.rules, message)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(BUILTIN_RULES.to_vec())
    }
}

/// Classifies a raw API error message with the built-in rule table.
///
/// This is a pure function of the message text.
pub fn classify_message(message: &str) -> ErrorKind {
    first_match(BUILTIN_RULES, message)
}

fn first_match(rules: &[Rule], message: &str) -> ErrorKind {
    let lowered = message.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.patterns.iter().any(|p| p.matches(&lowered)))
        .map(|rule| rule.kind)
        .unwrap_or(ErrorKind::Unknown)
}
