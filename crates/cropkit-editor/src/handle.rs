//! Draggable handles on the crop window.

use std::fmt;

use cropkit_core::Point;
use serde::{Deserialize, Serialize};

use crate::edge::{Edge, RectEdges};

/// A pressable, draggable handle on the crop window.
///
/// Declaration order is the tie-break order used by hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Left,
    Top,
    Right,
    Bottom,
    Center,
}

/// The update strategy a handle drives, with the edges it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    /// Owns one horizontal edge (TOP/BOTTOM) and one vertical edge (LEFT/RIGHT)
    Corner { horizontal: Edge, vertical: Edge },
    /// Owns TOP or BOTTOM
    HorizontalEdge(Edge),
    /// Owns LEFT or RIGHT
    VerticalEdge(Edge),
    /// Owns nothing; translates the whole window
    Center,
}

impl Handle {
    /// All handles in tie-break order.
    pub const ALL: [Handle; 9] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
        Handle::Left,
        Handle::Top,
        Handle::Right,
        Handle::Bottom,
        Handle::Center,
    ];

    pub const CORNERS: [Handle; 4] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
    ];

    pub const EDGES: [Handle; 4] = [Handle::Left, Handle::Top, Handle::Right, Handle::Bottom];

    pub fn kind(self) -> HandleKind {
        match self {
            Handle::TopLeft => HandleKind::Corner {
                horizontal: Edge::Top,
                vertical: Edge::Left,
            },
            Handle::TopRight => HandleKind::Corner {
                horizontal: Edge::Top,
                vertical: Edge::Right,
            },
            Handle::BottomLeft => HandleKind::Corner {
                horizontal: Edge::Bottom,
                vertical: Edge::Left,
            },
            Handle::BottomRight => HandleKind::Corner {
                horizontal: Edge::Bottom,
                vertical: Edge::Right,
            },
            Handle::Left => HandleKind::VerticalEdge(Edge::Left),
            Handle::Top => HandleKind::HorizontalEdge(Edge::Top),
            Handle::Right => HandleKind::VerticalEdge(Edge::Right),
            Handle::Bottom => HandleKind::HorizontalEdge(Edge::Bottom),
            Handle::Center => HandleKind::Center,
        }
    }

    pub fn is_corner(self) -> bool {
        matches!(self.kind(), HandleKind::Corner { .. })
    }

    /// Exact position of the handle on `edges`: the corner point, the
    /// midpoint of the owned edge, or the window centre.
    pub fn anchor(self, edges: &RectEdges) -> Point {
        let center = edges.center();
        match self {
            Handle::TopLeft => Point::new(edges.left(), edges.top()),
            Handle::TopRight => Point::new(edges.right(), edges.top()),
            Handle::BottomLeft => Point::new(edges.left(), edges.bottom()),
            Handle::BottomRight => Point::new(edges.right(), edges.bottom()),
            Handle::Left => Point::new(edges.left(), center.y),
            Handle::Top => Point::new(center.x, edges.top()),
            Handle::Right => Point::new(edges.right(), center.y),
            Handle::Bottom => Point::new(center.x, edges.bottom()),
            Handle::Center => center,
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Handle::TopLeft => "top-left",
            Handle::TopRight => "top-right",
            Handle::BottomLeft => "bottom-left",
            Handle::BottomRight => "bottom-right",
            Handle::Left => "left",
            Handle::Top => "top",
            Handle::Right => "right",
            Handle::Bottom => "bottom",
            Handle::Center => "center",
        };
        write!(f, "{}", name)
    }
}
