//! Tree Builder: resolve an abstract figure description into a positioned
//! region tree.

use thiserror::Error;

use crate::annotate::{Label, LabelError, LabelSequence};
use crate::config::{BranchSpec, Direction, LabelOverride, PanelSpec, SpecNode};
use crate::layout::{merge_col, merge_row, LayoutError, Node, Region, RegionTree};
use crate::panel::{LoadError, PanelLoader};

/// Default stacking target for a level that does not set `y_size`/`x_size`,
/// in figure units.
pub const DEFAULT_STACK_TARGET: f64 = 500.0;

/// Errors raised while resolving a figure description.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A composition step failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// A panel failed to load in strict mode.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// A label override was invalid.
    #[error(transparent)]
    Label(#[from] LabelError),
}

/// Resolves leaf specs into regions and nested specs into merged subtrees.
///
/// Every direct child of a level is first rescaled to the level's stacking
/// target (height for a `Row`, width for a `Col`), so the reduction's
/// scale ratios are 1 and the level's extent equals the target exactly.
#[derive(Debug)]
pub struct TreeBuilder<'a> {
    loader: &'a PanelLoader,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder resolving panels through the given loader.
    pub const fn new(loader: &'a PanelLoader) -> Self {
        Self { loader }
    }

    /// Build one finalized region tree rooted at the top-level Row or Col.
    ///
    /// # Errors
    /// [`BuildError`] on a failed load (strict mode), invalid label, or
    /// degenerate composition.
    pub fn build(&self, spec: &BranchSpec) -> Result<RegionTree, BuildError> {
        let mut labels = None;
        self.build_branch(spec, &mut labels)
    }

    fn build_branch(
        &self,
        spec: &BranchSpec,
        inherited: &mut Option<LabelSequence>,
    ) -> Result<RegionTree, BuildError> {
        // A level that sets its own label format starts a fresh sequence
        // for its subtree; otherwise leaves draw from the enclosing one.
        let mut local = spec.options.labels.as_deref().map(LabelSequence::new);
        let labels = if local.is_some() { &mut local } else { inherited };

        let mut nodes = Vec::with_capacity(spec.entries.len());
        for entry in &spec.entries {
            let node = match entry {
                SpecNode::Panel(panel) => Node::Region(self.build_panel(panel, labels)?),
                SpecNode::Branch(branch) => Node::Tree(self.build_branch(branch, labels)?),
            };
            nodes.push(node);
        }

        let target = match spec.direction {
            Direction::Row => spec.options.y_size,
            Direction::Col => spec.options.x_size,
        }
        .unwrap_or(DEFAULT_STACK_TARGET);

        for node in &mut nodes {
            let extent = match spec.direction {
                Direction::Row => node.height_range(),
                Direction::Col => node.width_range(),
            };
            node.rescale(target / extent);
        }

        let tree = match spec.direction {
            Direction::Row => merge_row(nodes),
            Direction::Col => merge_col(nodes),
        }?;
        log::debug!(
            "merged {:?} of {} leaves at target {target}: {:.1}x{:.1}",
            spec.direction,
            tree.leaf_count(),
            tree.width_range(),
            tree.height_range()
        );
        Ok(tree)
    }

    fn build_panel(
        &self,
        panel: &PanelSpec,
        labels: &mut Option<LabelSequence>,
    ) -> Result<Region, BuildError> {
        let content = self.loader.load(&panel.path)?;
        let label = resolve_label(panel.label.as_ref(), labels)?;
        Ok(Region::from_content(content, label)?)
    }
}

/// Combine the level's automatic label with a per-leaf override.
///
/// The automatic sequence advances for every leaf so overrides do not
/// shift their neighbours' numbering.
fn resolve_label(
    explicit: Option<&LabelOverride>,
    labels: &mut Option<LabelSequence>,
) -> Result<Option<Label>, BuildError> {
    let auto = labels.as_mut().and_then(Iterator::next);
    let Some(explicit) = explicit else {
        return Ok(auto.map(Label::new));
    };

    let Some(text) = explicit.text.clone().or(auto) else {
        return Ok(None);
    };
    let mut label = Label::new(text);
    if let Some((x, y)) = explicit.pos {
        label = label.at(x, y)?;
    }
    if let Some(rgb) = explicit.colour {
        label = label.with_color(rgb);
    }
    if let Some(size) = explicit.size {
        label = label.with_size(size);
    }
    Ok(Some(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
    }

    #[test]
    fn test_row_of_placeholders() {
        // Missing paths resolve to 500x500 placeholders, pre-matched to
        // the default stacking target.
        let spec = config::parse_str(
            "
- Row:
  - /missing/a.png
  - /missing/b.png
  - /missing/c.png
",
        )
        .unwrap();
        let loader = PanelLoader::new();
        let tree = TreeBuilder::new(&loader).build(&spec).unwrap();

        assert_eq!(tree.leaf_count(), 3);
        assert_close(tree.height_range(), 500.0);
        assert_close(tree.width_range(), 1500.0);
    }

    #[test]
    fn test_row_respects_y_size() {
        let spec = config::parse_str(
            "
- Row:
  - /missing/a.png
  - /missing/b.png
  - /missing/c.png
  - options:
      y_size: 100
",
        )
        .unwrap();
        let loader = PanelLoader::new();
        let tree = TreeBuilder::new(&loader).build(&spec).unwrap();

        assert_close(tree.height_range(), 100.0);
        assert_close(tree.width_range(), 300.0);
    }

    #[test]
    fn test_nested_column_in_row() {
        // The column merges to the default 500-unit width (1000 tall),
        // then enters the row squeezed to the 200-unit target height.
        let spec = config::parse_str(
            "
- Row:
  - /missing/a.png
  - /missing/b.png
  - /missing/c.png
  - Col:
    - /missing/d.png
    - /missing/e.png
  - options:
      y_size: 200
",
        )
        .unwrap();
        let loader = PanelLoader::new();
        let tree = TreeBuilder::new(&loader).build(&spec).unwrap();

        assert_eq!(tree.leaf_count(), 5);
        assert_close(tree.height_range(), 200.0);
        assert_close(tree.width_range(), 3.0 * 200.0 + 100.0);
    }

    #[test]
    fn test_strict_loader_failure_is_fatal() {
        let spec = config::parse_str("- Row:\n  - /missing/a.png\n").unwrap();
        let loader = PanelLoader::new().strict(true);
        let err = TreeBuilder::new(&loader).build(&spec).unwrap_err();
        assert!(matches!(err, BuildError::Load(_)));
    }

    #[test]
    fn test_automatic_labels_with_override() {
        let spec = config::parse_str(
            "
- Row:
  - /missing/a.png
  - /missing/b.png:
      text: \"x)\"
  - /missing/c.png
  - options:
      labels: \"{a}.\"
",
        )
        .unwrap();
        let loader = PanelLoader::new();
        let tree = TreeBuilder::new(&loader).build(&spec).unwrap();

        let texts: Vec<&str> = tree
            .leaves()
            .map(|leaf| leaf.label().map_or("", |l| l.text()))
            .collect();
        // The override replaces the text but the sequence still advances.
        assert_eq!(texts, vec!["a.", "x)", "c."]);
    }

    #[test]
    fn test_labels_inherited_by_nested_levels() {
        let spec = config::parse_str(
            "
- Row:
  - /missing/a.png
  - Col:
    - /missing/b.png
    - /missing/c.png
  - options:
      labels: \"{n}.\"
",
        )
        .unwrap();
        let loader = PanelLoader::new();
        let tree = TreeBuilder::new(&loader).build(&spec).unwrap();

        let texts: Vec<&str> = tree
            .leaves()
            .map(|leaf| leaf.label().map_or("", |l| l.text()))
            .collect();
        assert_eq!(texts, vec!["1.", "2.", "3."]);
    }
}
