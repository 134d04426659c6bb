//! # Vocabulary Definitions
//!
//! A `VocabularyDefinition` is the parsed form of one CVE resource: a set
//! of literal tokens plus a list of patterns. Resources are YAML:
//!
//! ```yaml
//! enumeration:
//!   name: SCIControls
//!   terms:
//!     - value: HCS
//!       description: HUMINT Control System
//!     - value: "SI-G-[A-Z]{4}"
//!       regular_expression: true
//! ```
//!
//! Terms with a blank value are skipped. Every other value is used exactly
//! as written, surrounding whitespace included. Patterns must match the
//! whole candidate, so each is compiled as `^(?:pattern)$`.

use std::collections::BTreeSet;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Resource format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CveDocument {
    enumeration: CveEnumeration,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CveEnumeration {
    name: Option<String>,
    terms: Vec<CveTerm>,
}

#[derive(Debug, Deserialize)]
struct CveTerm {
    #[serde(default)]
    value: String,
    #[serde(default)]
    regular_expression: bool,
    // Informational only; accepted so resources can document terms.
    #[serde(default)]
    #[allow(dead_code)]
    description: Option<String>,
}

// ---------------------------------------------------------------------------
// Definition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Pattern {
    source: String,
    regex: Regex,
}

/// Immutable tokens and patterns of one controlled vocabulary.
#[derive(Debug, Clone, Default)]
pub struct VocabularyDefinition {
    name: Option<String>,
    tokens: BTreeSet<String>,
    patterns: Vec<Pattern>,
}

impl VocabularyDefinition {
    /// Builds a definition from literal tokens and pattern sources.
    pub fn new<T, P>(tokens: T, patterns: P) -> Result<Self, regex::Error>
    where
        T: IntoIterator,
        T::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| compile(p.into()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: None,
            tokens: tokens.into_iter().map(Into::into).collect(),
            patterns,
        })
    }

    /// Parses a YAML resource. `path` is used only for error context.
    pub fn from_yaml(path: &Path, text: &str) -> Result<Self, LoadError> {
        let document: CveDocument =
            serde_yaml::from_str(text).map_err(|source| LoadError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;

        let mut definition = Self {
            name: document.enumeration.name,
            ..Self::default()
        };
        for term in document.enumeration.terms {
            let value = term.value;
            if value.trim().is_empty() {
                continue;
            }
            if term.regular_expression {
                let pattern = compile(value.clone()).map_err(|source| LoadError::Pattern {
                    path: path.to_path_buf(),
                    pattern: value,
                    source,
                })?;
                definition.patterns.push(pattern);
            } else {
                definition.tokens.insert(value);
            }
        }
        Ok(definition)
    }

    /// The enumeration's declared name, if the resource gives one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn tokens(&self) -> &BTreeSet<String> {
        &self.tokens
    }

    /// Pattern sources, as written in the resource.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.source.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.patterns.is_empty()
    }

    /// True if `value` is a literal token or fully matches a pattern.
    pub fn matches(&self, value: &str) -> bool {
        self.tokens.contains(value) || self.patterns.iter().any(|p| p.regex.is_match(value))
    }
}

fn compile(source: String) -> Result<Pattern, regex::Error> {
    let regex = Regex::new(&format!("^(?:{source})$"))?;
    Ok(Pattern { source, regex })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCI: &str = r#"
enumeration:
  name: SCIControls
  terms:
    - value: HCS
      description: HUMINT Control System
    - value: "SI-G-[A-Z]{4}"
      regular_expression: true
    - value: ""
"#;

    fn sci() -> VocabularyDefinition {
        VocabularyDefinition::from_yaml(Path::new("CVEnumISMSCIControls.yaml"), SCI).unwrap()
    }

    #[test]
    fn separates_tokens_and_patterns() {
        let def = sci();
        assert_eq!(def.name(), Some("SCIControls"));
        assert_eq!(def.tokens().len(), 1);
        assert_eq!(def.patterns().collect::<Vec<_>>(), vec!["SI-G-[A-Z]{4}"]);
    }

    #[test]
    fn patterns_match_whole_value() {
        let def = sci();
        assert!(def.matches("HCS"));
        assert!(def.matches("SI-G-ABCD"));
        assert!(!def.matches("SI-G-ABCDE"));
        assert!(!def.matches("XSI-G-ABCD"));
        assert!(!def.matches("hcs"));
    }

    #[test]
    fn term_values_are_not_trimmed() {
        let text = "enumeration:\n  terms:\n    - value: \" HCS\"\n    - value: \"  \"\n";
        let def = VocabularyDefinition::from_yaml(Path::new("x.yaml"), text).unwrap();
        assert_eq!(def.tokens().iter().collect::<Vec<_>>(), vec![" HCS"]);
        assert!(def.matches(" HCS"));
        assert!(!def.matches("HCS"));
    }

    #[test]
    fn empty_definition_matches_nothing() {
        let def = VocabularyDefinition::default();
        assert!(def.is_empty());
        assert!(!def.matches(""));
        assert!(!def.matches("U"));
    }

    #[test]
    fn missing_root_is_yaml_error() {
        let err = VocabularyDefinition::from_yaml(Path::new("x.yaml"), "terms: []").unwrap_err();
        assert!(matches!(err, LoadError::Yaml { .. }));
    }

    #[test]
    fn bad_pattern_is_reported() {
        let text = "enumeration:\n  terms:\n    - value: \"[A-\"\n      regular_expression: true\n";
        let err = VocabularyDefinition::from_yaml(Path::new("x.yaml"), text).unwrap_err();
        assert!(matches!(err, LoadError::Pattern { ref pattern, .. } if pattern == "[A-"));
    }

    #[test]
    fn alternation_is_anchored_as_a_group() {
        let def = VocabularyDefinition::new(Vec::<String>::new(), ["A|B"]).unwrap();
        assert!(def.matches("A"));
        assert!(def.matches("B"));
        assert!(!def.matches("AB"));
    }
}
