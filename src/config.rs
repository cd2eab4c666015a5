//! Configuration parsing: YAML figure descriptions.
//!
//! A figure description is a nested list of "leaves". Each leaf is a path
//! to an image, a nested `Row`/`Col` holding more leaves, or a path with a
//! label override. The top level is always a `Row` or a `Col`. An
//! `options` entry anywhere in a list configures that level.
//!
//! ```yaml
//! - Row:
//!   - /path/one
//!   - Col:
//!     - /path/two
//!     - /path/three
//!   - /path/four: { text: "d)", pos: "(0.05, 0.08)" }
//!   - options:
//!       y_size: 500
//!       labels: "{a}."
//! ```
//!
//! The parser produces the abstract spec tree consumed by
//! [`TreeBuilder`](crate::compose::TreeBuilder); it knows nothing about
//! geometry.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::Value;
use thiserror::Error;

/// Stacking direction of one level of the figure.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    /// Children stacked left to right.
    Row,
    /// Children stacked top to bottom.
    Col,
}

/// One level of the parsed figure description.
#[derive(Clone, Debug)]
pub struct BranchSpec {
    /// Stacking direction for this level.
    pub direction: Direction,
    /// Ordered leaves of this level.
    pub entries: Vec<SpecNode>,
    /// Options declared at this level.
    pub options: BranchOptions,
}

/// A parsed leaf: a panel reference or a nested level.
#[derive(Clone, Debug)]
pub enum SpecNode {
    /// A path to a panel image, with an optional label override.
    Panel(PanelSpec),
    /// A nested row or column.
    Branch(BranchSpec),
}

/// A panel leaf of the figure description.
#[derive(Clone, Debug)]
pub struct PanelSpec {
    /// Path to the panel image.
    pub path: PathBuf,
    /// Explicit label settings overriding the level defaults.
    pub label: Option<LabelOverride>,
}

/// Per-level options.
///
/// Unknown keys are ignored so older configuration files keep parsing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BranchOptions {
    /// Stacking target height for a `Row` (figure units).
    #[serde(default)]
    pub y_size: Option<f64>,
    /// Stacking target width for a `Col` (figure units).
    #[serde(default)]
    pub x_size: Option<f64>,
    /// Label format for automatic panel labels, e.g. `"{a}."` or `"{n})"`.
    #[serde(default)]
    pub labels: Option<String>,
}

/// Explicit label settings attached to a single panel leaf.
#[derive(Clone, Debug, Default)]
pub struct LabelOverride {
    /// Label text; falls back to the level's automatic label.
    pub text: Option<String>,
    /// Relative position, parsed from a `"(x, y)"` string.
    pub pos: Option<(f64, f64)>,
    /// Label colour as RGB.
    pub colour: Option<[u8; 3]>,
    /// Label height in pixels.
    pub size: Option<u32>,
}

/// Wire form of [`LabelOverride`]; `pos` arrives as a string.
#[derive(Debug, Default, Deserialize)]
struct RawLabelOverride {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    pos: Option<String>,
    #[serde(default)]
    colour: Option<[u8; 3]>,
    #[serde(default)]
    size: Option<u32>,
}

/// Errors raised while reading a figure description.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("unable to read configuration file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The document is not valid YAML. Check for colons after option
    /// lines and indents without dashes.
    #[error("malformed configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The top level (or a nested branch) lacks a `Row`/`Col` header.
    #[error("each level must be headed by a Row or Col mapping")]
    MissingHeader,
    /// A list entry was not a path, nested branch, options map, or label
    /// override.
    #[error("unable to parse branch entry: {0}")]
    UnsupportedEntry(String),
    /// A label `pos` string did not parse as a coordinate pair.
    #[error("label position must look like \"(x, y)\", got {0:?}")]
    BadLabelPos(String),
}

/// Parse the figure description in the given file.
///
/// # Errors
/// [`ConfigError`] on I/O failure or a malformed description.
pub fn parse_file(path: &Path) -> Result<BranchSpec, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    parse_str(&text)
}

/// Parse a figure description from a YAML string.
///
/// # Errors
/// [`ConfigError`] on a malformed description.
pub fn parse_str(text: &str) -> Result<BranchSpec, ConfigError> {
    let value: Value = serde_yaml::from_str(text)?;
    // The conventional file layout wraps the top-level header in a
    // single-element list.
    let value = match value {
        Value::Sequence(mut seq) if seq.len() == 1 => seq.remove(0),
        other => other,
    };
    read_branch(&value)
}

fn read_branch(value: &Value) -> Result<BranchSpec, ConfigError> {
    let mapping = value.as_mapping().ok_or(ConfigError::MissingHeader)?;
    let (direction, body) = if let Some(body) = mapping.get("Row") {
        (Direction::Row, body)
    } else if let Some(body) = mapping.get("Col") {
        (Direction::Col, body)
    } else {
        return Err(ConfigError::MissingHeader);
    };

    let leaves = body.as_sequence().ok_or_else(|| {
        ConfigError::UnsupportedEntry("header must hold a list of leaves".to_owned())
    })?;

    let mut entries = Vec::with_capacity(leaves.len());
    let mut options = BranchOptions::default();
    for leaf in leaves {
        match leaf {
            Value::String(path) => {
                entries.push(SpecNode::Panel(PanelSpec { path: path.into(), label: None }));
            }
            Value::Mapping(map) => {
                if map.contains_key("Row") || map.contains_key("Col") {
                    entries.push(SpecNode::Branch(read_branch(leaf)?));
                } else if let Some(opts) = map.get("options") {
                    options = serde_yaml::from_value(opts.clone())?;
                } else {
                    entries.push(SpecNode::Panel(read_labelled_panel(map)?));
                }
            }
            other => {
                return Err(ConfigError::UnsupportedEntry(format!("{other:?}")));
            }
        }
    }

    Ok(BranchSpec { direction, entries, options })
}

/// Parse a `path: {label override}` leaf.
fn read_labelled_panel(map: &serde_yaml::Mapping) -> Result<PanelSpec, ConfigError> {
    let mut iter = map.iter();
    let (key, value) = match (iter.next(), iter.next()) {
        (Some(pair), None) => pair,
        _ => {
            return Err(ConfigError::UnsupportedEntry(
                "a labelled panel must be a single path: {override} pair".to_owned(),
            ));
        }
    };
    let path = key
        .as_str()
        .ok_or_else(|| ConfigError::UnsupportedEntry(format!("{key:?}")))?;

    let raw: RawLabelOverride = serde_yaml::from_value(value.clone())?;
    let pos = raw.pos.as_deref().map(parse_pos).transpose()?;
    Ok(PanelSpec {
        path: path.into(),
        label: Some(LabelOverride { text: raw.text, pos, colour: raw.colour, size: raw.size }),
    })
}

/// Parse a `"(x, y)"` coordinate pair.
fn parse_pos(text: &str) -> Result<(f64, f64), ConfigError> {
    let bad = || ConfigError::BadLabelPos(text.to_owned());
    let inner = text.trim().trim_start_matches('(').trim_end_matches(')');
    let mut parts = inner.split(',');
    let x = parts.next().and_then(|p| p.trim().parse().ok()).ok_or_else(bad)?;
    let y = parts.next().and_then(|p| p.trim().parse().ok()).ok_or_else(bad)?;
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(spec: &BranchSpec) -> Vec<&str> {
        spec.entries
            .iter()
            .filter_map(|entry| match entry {
                SpecNode::Panel(p) => p.path.to_str(),
                SpecNode::Branch(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_simple_row_parse() {
        let spec = parse_str(
            "
- Row:
  - /path/one
  - /path/two
  - options:
     max_size: 20
     new_size: 45
",
        )
        .unwrap();

        assert_eq!(spec.direction, Direction::Row);
        assert_eq!(spec.entries.len(), 2);
        assert_eq!(paths(&spec), vec!["/path/one", "/path/two"]);
        // Unknown option keys are ignored, known ones default.
        assert_eq!(spec.options.y_size, None);
    }

    #[test]
    fn test_nested_parse() {
        let spec = parse_str(
            "
- Row:
  - /path/one
  - /path/two
  - Col:
    - /path/three
    - /path/four
  - options:
     y_size: 300
",
        )
        .unwrap();

        assert_eq!(spec.entries.len(), 3);
        assert_eq!(spec.options.y_size, Some(300.0));
        let SpecNode::Branch(nested) = &spec.entries[2] else {
            panic!("expected nested column");
        };
        assert_eq!(nested.direction, Direction::Col);
        assert_eq!(paths(nested), vec!["/path/three", "/path/four"]);
    }

    #[test]
    fn test_two_columns_around_a_panel() {
        let spec = parse_str(
            "
- Row:
  - Col:
    - /path/one
    - /path/two
  - /path/five
  - Col:
    - /path/three
    - /path/four
    - options:
        x_size: 15
",
        )
        .unwrap();

        assert_eq!(spec.entries.len(), 3);
        assert!(matches!(spec.entries[0], SpecNode::Branch(_)));
        assert!(matches!(spec.entries[1], SpecNode::Panel(_)));
        let SpecNode::Branch(second) = &spec.entries[2] else {
            panic!("expected trailing column");
        };
        assert_eq!(second.options.x_size, Some(15.0));
    }

    #[test]
    fn test_label_override_parse() {
        let spec = parse_str(
            "
- Col:
  - /figs/one.png:
      text: \"a)\"
      pos: \"(0.05, 0.1)\"
      colour: [200, 0, 0]
  - /figs/two.png
  - options:
      labels: \"{a}.\"
",
        )
        .unwrap();

        let SpecNode::Panel(panel) = &spec.entries[0] else {
            panic!("expected labelled panel");
        };
        let label = panel.label.as_ref().unwrap();
        assert_eq!(label.text.as_deref(), Some("a)"));
        assert_eq!(label.pos, Some((0.05, 0.1)));
        assert_eq!(label.colour, Some([200, 0, 0]));
        assert_eq!(spec.options.labels.as_deref(), Some("{a}."));
    }

    #[test]
    fn test_missing_header_rejected() {
        assert!(matches!(
            parse_str("- Stack:\n  - /path/one\n"),
            Err(ConfigError::MissingHeader)
        ));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        assert!(matches!(
            parse_str("- Row:\n  - [unclosed\n"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_bad_label_pos_rejected() {
        let result = parse_str(
            "
- Row:
  - /figs/one.png:
      pos: \"(0.05)\"
",
        );
        assert!(matches!(result, Err(ConfigError::BadLabelPos(_))));
    }
}
