//! Two-click selection over the waterfall image.
//!
//! The first click marks one corner, the second click completes the
//! rectangle. Any further click starts over according to the configured
//! [`ThirdClickPolicy`].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Pixel position inside the displayed image area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle spanned by two clicked points.
///
/// `x`/`y` is the top-left corner, `width`/`height` are always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl SelectionBox {
    /// Bounding box of two points; the order of the points does not matter.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: a.x.abs_diff(b.x),
            height: a.y.abs_diff(b.y),
        }
    }

    /// Left and right edge on the frequency axis.
    pub fn x_span(&self) -> (f64, f64) {
        let left = self.x as f64;
        (left, left + self.width as f64)
    }
}

/// What happens to a click that arrives after the selection is already complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum ThirdClickPolicy {
    /// Clear the selection and drop the click.
    Discard,
    /// Clear the selection and keep the click as the first corner of a new one.
    #[default]
    Restart,
}

/// Outcome of feeding a click into a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// First corner placed.
    Started(Point),
    /// Second corner placed; the box is ready for calculation.
    Completed(SelectionBox),
    /// The previous selection was cleared by an extra click.
    Reset,
}

/// Holds zero, one or two clicked points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    points: Vec<Point>,
    policy: ThirdClickPolicy,
}

impl Selection {
    pub fn new(policy: ThirdClickPolicy) -> Self {
        Self {
            points: Vec::with_capacity(2),
            policy,
        }
    }

    pub fn policy(&self) -> ThirdClickPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ThirdClickPolicy) {
        self.policy = policy;
    }

    /// Handle a click at `p`.
    pub fn add_point(&mut self, p: Point) -> SelectionEvent {
        self.points.push(p);
        match self.points.len() {
            1 => SelectionEvent::Started(p),
            2 => SelectionEvent::Completed(SelectionBox::from_corners(
                self.points[0],
                self.points[1],
            )),
            _ => {
                self.points.clear();
                if self.policy == ThirdClickPolicy::Restart {
                    self.points.push(p);
                }
                SelectionEvent::Reset
            }
        }
    }

    /// Forget all points.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.points.len() == 2
    }

    /// The selected rectangle, or `None` until both corners are set.
    pub fn selection_box(&self) -> Option<SelectionBox> {
        match self.points.as_slice() {
            [a, b] => Some(SelectionBox::from_corners(*a, *b)),
            _ => None,
        }
    }
}
