//! Tile kinds and grid generation strategies.

use std::fmt;

use crate::error::{GenerateError, GridError};

/// Number of distinct [`TileKind`] values.
pub const NUM_TILE_KINDS: usize = 4;

/// The kind of tile held by one grid cell.
///
/// Discriminants double as indices into per-tile tables (probabilities,
/// counts, colours), so they are dense and start at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TileKind {
    /// Passable floor.
    #[default]
    Empty = 0,
    /// Impassable wall.
    Wall = 1,
    /// Maze entrance. Passable.
    Start = 2,
    /// Maze exit. Passable.
    End = 3,
}

impl TileKind {
    /// Every tile kind, in discriminant order.
    pub const ALL: [TileKind; NUM_TILE_KINDS] = [
        TileKind::Empty,
        TileKind::Wall,
        TileKind::Start,
        TileKind::End,
    ];

    /// Numeric code stored in observations.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Index into per-tile tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether a breadth-first walk may enter a cell of this kind.
    pub fn is_passable(self) -> bool {
        self != TileKind::Wall
    }

    /// START and END are the two distinguished cells of a maze.
    pub fn is_endpoint(self) -> bool {
        matches!(self, TileKind::Start | TileKind::End)
    }

    /// Single-character form used by [`Grid`](crate::Grid)'s `Display`.
    pub fn symbol(self) -> char {
        match self {
            TileKind::Empty => '.',
            TileKind::Wall => '#',
            TileKind::Start => 'S',
            TileKind::End => 'E',
        }
    }

    /// Inverse of [`symbol`](Self::symbol).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(TileKind::Empty),
            '#' => Some(TileKind::Wall),
            'S' => Some(TileKind::Start),
            'E' => Some(TileKind::End),
            _ => None,
        }
    }
}

impl TryFrom<u8> for TileKind {
    type Error = GridError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        TileKind::ALL
            .get(code as usize)
            .copied()
            .ok_or(GridError::InvalidTile { code })
    }
}

impl From<TileKind> for u8 {
    fn from(tile: TileKind) -> Self {
        tile.code()
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TileKind::Empty => "EMPTY",
            TileKind::Wall => "WALL",
            TileKind::Start => "START",
            TileKind::End => "END",
        };
        f.write_str(name)
    }
}

/// Selects how the initial grid of an episode is built.
///
/// Consumed at reset time only; the grid does not remember which strategy
/// produced it. The numeric codes are stable and accepted through
/// [`TryFrom<u8>`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GenerationStrategy {
    /// Every cell EMPTY (code 0).
    Empty,
    /// Every cell set to one caller-chosen tile (code 1).
    Full,
    /// Each cell drawn independently from a probability table (code 2).
    #[default]
    Random,
    /// EMPTY grid with START top-left and END bottom-right (code 100).
    FixedCorners,
    /// EMPTY grid with START and END at two distinct random cells (code 101).
    RandomCorners,
}

impl GenerationStrategy {
    /// Stable numeric code.
    pub fn code(self) -> u8 {
        match self {
            GenerationStrategy::Empty => 0,
            GenerationStrategy::Full => 1,
            GenerationStrategy::Random => 2,
            GenerationStrategy::FixedCorners => 100,
            GenerationStrategy::RandomCorners => 101,
        }
    }
}

impl TryFrom<u8> for GenerationStrategy {
    type Error = GenerateError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(GenerationStrategy::Empty),
            1 => Ok(GenerationStrategy::Full),
            2 => Ok(GenerationStrategy::Random),
            100 => Ok(GenerationStrategy::FixedCorners),
            101 => Ok(GenerationStrategy::RandomCorners),
            // 3 was reserved for a depth-first maze carver that never shipped.
            _ => Err(GenerateError::UnknownStrategy { code }),
        }
    }
}

impl fmt::Display for GenerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenerationStrategy::Empty => "empty",
            GenerationStrategy::Full => "full",
            GenerationStrategy::Random => "random",
            GenerationStrategy::FixedCorners => "fixed-corners",
            GenerationStrategy::RandomCorners => "random-corners",
        };
        f.write_str(name)
    }
}
