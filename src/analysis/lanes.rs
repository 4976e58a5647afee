//! Grouping of clued lanes into nested blocks for page layout
//!
//! A lane is one row or one column of a tile together with its clues. Lanes
//! are gathered into blocks of five, and those into blocks of ten, so a
//! printed puzzle can draw heavier separators at every fifth and tenth line.
//! The last block at each level may be short.

use serde::Serialize;

use crate::analysis::clues::Clue;
use crate::io::configuration::LANE_LEVEL_SIZES;
use crate::spatial::tiles::{Tile, TilePosition};

/// One row or column and its clues
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lane {
    /// Position of the lane within its tile
    pub index: usize,
    /// Clues describing the lane
    pub clues: Vec<Clue>,
}

/// Entry of a lane group: an individual lane or a nested block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LaneNode {
    /// A single row or column
    Lane(Lane),
    /// A block of lanes one level down
    Group(LaneGroup),
}

impl LaneNode {
    /// Number of lanes at or below this node
    pub fn lane_count(&self) -> usize {
        match self {
            Self::Lane(_) => 1,
            Self::Group(group) => group.lane_count(),
        }
    }
}

/// Ordered block of lanes or of smaller blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneGroup {
    /// Lanes per child block at this level, 1 when the children are lanes
    pub block_size: usize,
    /// Children in lane order
    pub children: Vec<LaneNode>,
}

impl LaneGroup {
    /// Group clue lines using the standard five-within-ten layout
    pub fn from_clues(clues: &[Vec<Clue>]) -> Self {
        group_lanes(clues, &LANE_LEVEL_SIZES)
    }

    /// Total number of lanes in the group
    pub fn lane_count(&self) -> usize {
        self.children.iter().map(LaneNode::lane_count).sum()
    }

    /// Number of block levels above the individual lanes
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .filter_map(|child| match child {
                LaneNode::Group(group) => Some(group.depth() + 1),
                LaneNode::Lane(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Every lane in order, flattened across all levels
    pub fn lanes(&self) -> Vec<&Lane> {
        let mut lanes = Vec::with_capacity(self.lane_count());
        self.collect_lanes(&mut lanes);
        lanes
    }

    fn collect_lanes<'a>(&'a self, lanes: &mut Vec<&'a Lane>) {
        for child in &self.children {
            match child {
                LaneNode::Lane(lane) => lanes.push(lane),
                LaneNode::Group(group) => group.collect_lanes(lanes),
            }
        }
    }
}

/// Group clue lines into nested blocks
///
/// `levels` lists block sizes from innermost to outermost. With `[5, 10]` the
/// result is a group of ten-lane blocks, each made of five-lane blocks, each
/// holding the lanes themselves. An empty `levels` yields a flat group.
pub fn group_lanes(clues: &[Vec<Clue>], levels: &[usize]) -> LaneGroup {
    group_from(clues, 0, levels)
}

fn group_from(clues: &[Vec<Clue>], first_index: usize, levels: &[usize]) -> LaneGroup {
    let Some((&outer, inner)) = levels.split_last() else {
        let children = clues
            .iter()
            .enumerate()
            .map(|(offset, line)| {
                LaneNode::Lane(Lane {
                    index: first_index + offset,
                    clues: line.clone(),
                })
            })
            .collect();
        return LaneGroup {
            block_size: 1,
            children,
        };
    };

    let block_size = outer.max(1);
    let children = clues
        .chunks(block_size)
        .enumerate()
        .map(|(block, chunk)| {
            LaneNode::Group(group_from(chunk, first_index + block * block_size, inner))
        })
        .collect();

    LaneGroup {
        block_size,
        children,
    }
}

/// Horizontal and vertical lanes of one tile, ready for layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLanes {
    /// Coordinate of the source tile
    pub position: TilePosition,
    /// Rows with their clues
    pub horizontal: LaneGroup,
    /// Columns with their clues
    pub vertical: LaneGroup,
}

impl TileLanes {
    /// Group a clued tile's rows and columns
    pub fn from_tile(tile: &Tile) -> Self {
        Self {
            position: tile.position,
            horizontal: LaneGroup::from_clues(&tile.row_clues),
            vertical: LaneGroup::from_clues(&tile.col_clues),
        }
    }
}
