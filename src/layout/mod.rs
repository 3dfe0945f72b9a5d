//! Proportional grid layout.
//!
//! A layout is a tree: leaves name a panel slot, splits divide their area
//! among children by relative weight. The engine is independent of any
//! terminal; it maps a canvas `Rect` to one absolute `Rect` per leaf.
//!
//! Rounding: every child but the last gets `floor(size * weight / total)`
//! cells, the last child takes whatever is left, so children always tile the
//! parent exactly.

use ratatui::layout::Rect;

/// Axis along which a split divides its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Children are stacked top to bottom; divides the height.
    Rows,
    /// Children are placed left to right; divides the width.
    Columns,
}

/// Layout tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode<K> {
    /// Panel slot.
    Leaf(K),
    /// Proportional subdivision. Weights are relative to their siblings.
    Split {
        direction: Direction,
        children: Vec<(f64, LayoutNode<K>)>,
    },
}

impl<K> LayoutNode<K> {
    pub fn leaf(key: K) -> Self {
        LayoutNode::Leaf(key)
    }

    /// Split that stacks `children` vertically.
    pub fn rows(children: Vec<(f64, LayoutNode<K>)>) -> Self {
        Self::split(Direction::Rows, children)
    }

    /// Split that places `children` side by side.
    pub fn columns(children: Vec<(f64, LayoutNode<K>)>) -> Self {
        Self::split(Direction::Columns, children)
    }

    /// # Panics
    /// If `children` is empty or any weight is not a finite positive number.
    pub fn split(direction: Direction, children: Vec<(f64, LayoutNode<K>)>) -> Self {
        assert!(!children.is_empty(), "split without children");
        assert!(
            children.iter().all(|(w, _)| w.is_finite() && *w > 0.0),
            "split weights must be positive"
        );
        LayoutNode::Split {
            direction,
            children,
        }
    }

    /// Leaf keys in tree order.
    pub fn leaves(&self) -> Vec<&K> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a K>) {
        match self {
            LayoutNode::Leaf(key) => out.push(key),
            LayoutNode::Split { children, .. } => {
                for (_, child) in children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}

impl<K: Clone> LayoutNode<K> {
    /// Assigns an absolute area to every leaf, in tree order.
    ///
    /// The canvas must have a positive area; callers check for a usable
    /// terminal before laying out.
    pub fn compute(&self, canvas: Rect) -> Vec<(K, Rect)> {
        debug_assert!(
            canvas.width > 0 && canvas.height > 0,
            "layout canvas must have a positive area"
        );
        let mut out = Vec::new();
        self.place(canvas, &mut out);
        out
    }

    fn place(&self, area: Rect, out: &mut Vec<(K, Rect)>) {
        match self {
            LayoutNode::Leaf(key) => out.push((key.clone(), area)),
            LayoutNode::Split {
                direction,
                children,
            } => {
                let weights: Vec<f64> = children.iter().map(|(w, _)| *w).collect();
                let areas = split_area(area, *direction, &weights);
                for ((_, child), child_area) in children.iter().zip(areas) {
                    child.place(child_area, out);
                }
            }
        }
    }
}

/// Divides `area` into contiguous slices proportional to `weights`.
///
/// Slices come out in weight order (top-most or left-most first) and
/// together cover `area` exactly.
pub fn split_area(area: Rect, direction: Direction, weights: &[f64]) -> Vec<Rect> {
    assert!(!weights.is_empty(), "split without children");

    let total_weight: f64 = weights.iter().sum();
    assert!(total_weight > 0.0, "split weights must be positive");

    let extent = match direction {
        Direction::Rows => area.height,
        Direction::Columns => area.width,
    };

    let last = weights.len() - 1;
    let mut offset: u16 = 0;
    let mut out = Vec::with_capacity(weights.len());

    for (i, weight) in weights.iter().enumerate() {
        let remaining = extent - offset;
        let size = if i == last {
            remaining
        } else {
            let share = (extent as f64 * weight / total_weight).floor() as u16;
            share.min(remaining)
        };

        out.push(match direction {
            Direction::Rows => Rect {
                y: area.y + offset,
                height: size,
                ..area
            },
            Direction::Columns => Rect {
                x: area.x + offset,
                width: size,
                ..area
            },
        });
        offset += size;
    }

    out
}
