//! Lozenge extraction from path systems
//!
//! Each unit step of a free path is the middle of a left or right lozenge,
//! depending on whether the path runs flat or climbs. Gaps between
//! neighbouring paths are filled with top lozenges, one per missing unit.

use crate::spatial::hexagon::Vertex;
use crate::spatial::paths::PathSystem;

/// Orientation of a lozenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LozengeKind {
    /// Crossed by a flat path step
    Left,
    /// Crossed by a climbing path step
    Right,
    /// Lies between two paths
    Top,
}

impl LozengeKind {
    /// All orientations in output order
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Top];

    /// Stable tag used by renderers
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Left => "left-lozenge",
            Self::Right => "right-lozenge",
            Self::Top => "top-lozenge",
        }
    }
}

/// Four corners of a lozenge in the (a, c)-plane
pub type Polygon = [Vertex; 4];

/// A single tagged lozenge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lozenge {
    /// Orientation of the lozenge
    pub kind: LozengeKind,
    /// Corners in drawing order
    pub vertices: Polygon,
}

/// All lozenges of a tiling grouped by orientation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileSet {
    left: Vec<Polygon>,
    right: Vec<Polygon>,
    top: Vec<Polygon>,
}

impl TileSet {
    /// Polygons of one orientation in extraction order
    pub fn polygons(&self, kind: LozengeKind) -> &[Polygon] {
        match kind {
            LozengeKind::Left => &self.left,
            LozengeKind::Right => &self.right,
            LozengeKind::Top => &self.top,
        }
    }

    /// Total number of lozenges
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len() + self.top.len()
    }

    /// Whether no lozenges were extracted
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every lozenge, left first, then right, then top
    pub fn iter(&self) -> impl Iterator<Item = Lozenge> + '_ {
        LozengeKind::ALL.into_iter().flat_map(move |kind| {
            self.polygons(kind)
                .iter()
                .map(move |&vertices| Lozenge { kind, vertices })
        })
    }

    fn push(&mut self, kind: LozengeKind, vertices: Polygon) {
        match kind {
            LozengeKind::Left => self.left.push(vertices),
            LozengeKind::Right => self.right.push(vertices),
            LozengeKind::Top => self.top.push(vertices),
        }
    }
}

const LEFT_OFFSETS: Polygon = [[0, 0], [-1, 0], [-1, -1], [0, -1]];
const RIGHT_OFFSETS: Polygon = [[0, 0], [-1, -1], [-1, -2], [0, -1]];
const TOP_OFFSETS: Polygon = [[0, 0], [-1, -1], [0, -1], [1, 0]];

fn translate(offsets: Polygon, anchor: Vertex) -> Polygon {
    offsets.map(|[dx, dy]| [anchor[0] + dx, anchor[1] + dy])
}

/// Extract the lozenges encoded by a path system
///
/// Iterates paths bottom to top and positions left to right, so the output
/// order is reproducible. A valid path system of an (a x b x c) hexagon yields
/// `a * c` left, `b * c` right and `a * b` top lozenges.
pub fn extract_tiles(state: &PathSystem) -> TileSet {
    let size = state.size();
    let mut tiles = TileSet::default();

    for k in 0..=size.c() {
        for j in 1..size.position_count() {
            let column = j as i32;
            let (Some(here), Some(previous), Some(above)) = (
                state.height(k, j),
                state.height(k, j - 1),
                state.height(k + 1, j),
            ) else {
                continue;
            };

            if k > 0 {
                let (kind, offsets) = if here == previous {
                    (LozengeKind::Left, LEFT_OFFSETS)
                } else {
                    (LozengeKind::Right, RIGHT_OFFSETS)
                };
                tiles.push(kind, translate(offsets, [column, here]));
            }

            for level in here + 1..above {
                tiles.push(LozengeKind::Top, translate(TOP_OFFSETS, [column, level]));
            }
        }
    }

    tiles
}
