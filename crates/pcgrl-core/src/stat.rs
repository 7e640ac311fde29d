//! Named grid statistics and the per-step statistics mapping.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::tile::TileKind;

/// A statistic that can be computed from a grid.
///
/// This is the closed set of names accepted by reward-strategy
/// registration. How each one is evaluated lives with the reward engine;
/// this enum is only the vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatKind {
    /// Count of EMPTY cells.
    NumEmpty,
    /// Count of WALL cells.
    NumWall,
    /// Count of START cells.
    NumStart,
    /// Count of END cells.
    NumEnd,
    /// Whether END is reachable from START.
    IsSolvable,
    /// Shortest START→END path length, `-1` when unsolvable.
    PathLength,
    /// Number of 4-connected regions of passable cells.
    NumRegions,
}

impl StatKind {
    /// Every known statistic.
    pub const ALL: [StatKind; 7] = [
        StatKind::NumEmpty,
        StatKind::NumWall,
        StatKind::NumStart,
        StatKind::NumEnd,
        StatKind::IsSolvable,
        StatKind::PathLength,
        StatKind::NumRegions,
    ];

    /// Registration name.
    pub fn name(self) -> &'static str {
        match self {
            StatKind::NumEmpty => "num_empty",
            StatKind::NumWall => "num_wall",
            StatKind::NumStart => "num_start",
            StatKind::NumEnd => "num_end",
            StatKind::IsSolvable => "is_grid_solvable",
            StatKind::PathLength => "path_length",
            StatKind::NumRegions => "num_regions",
        }
    }

    /// Look up a statistic by registration name.
    pub fn from_name(name: &str) -> Option<Self> {
        StatKind::ALL.into_iter().find(|k| k.name() == name)
    }

    /// The tile counted by this statistic, for the four count stats.
    pub fn counted_tile(self) -> Option<TileKind> {
        match self {
            StatKind::NumEmpty => Some(TileKind::Empty),
            StatKind::NumWall => Some(TileKind::Wall),
            StatKind::NumStart => Some(TileKind::Start),
            StatKind::NumEnd => Some(TileKind::End),
            _ => None,
        }
    }

    /// Whether evaluating this statistic runs the solvability search.
    pub fn needs_solvability(self) -> bool {
        matches!(self, StatKind::IsSolvable | StatKind::PathLength)
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown statistic name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownStat(pub String);

impl fmt::Display for UnknownStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown statistic '{}'", self.0)
    }
}

impl std::error::Error for UnknownStat {}

impl FromStr for StatKind {
    type Err = UnknownStat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKind::from_name(s).ok_or_else(|| UnknownStat(s.to_string()))
    }
}

/// The value of one statistic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatValue {
    /// An integer count or length.
    Count(i64),
    /// A yes/no property.
    Flag(bool),
}

impl StatValue {
    /// Numeric view: counts as-is, flags as `1.0`/`0.0`.
    pub fn as_f64(self) -> f64 {
        match self {
            StatValue::Count(n) => n as f64,
            StatValue::Flag(b) => f64::from(u8::from(b)),
        }
    }

    /// Boolean view: flags as-is, counts are true when non-zero.
    pub fn as_bool(self) -> bool {
        match self {
            StatValue::Count(n) => n != 0,
            StatValue::Flag(b) => b,
        }
    }
}

impl From<bool> for StatValue {
    fn from(v: bool) -> Self {
        StatValue::Flag(v)
    }
}

impl From<i64> for StatValue {
    fn from(v: i64) -> Self {
        StatValue::Count(v)
    }
}

impl From<usize> for StatValue {
    fn from(v: usize) -> Self {
        StatValue::Count(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{n}"),
            StatValue::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Statistics of one grid state, keyed by [`StatKind`].
///
/// Iteration follows insertion order, which is the registration order of
/// the strategy that computed it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stats {
    values: IndexMap<StatKind, StatValue>,
}

impl Stats {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one value.
    pub fn insert(&mut self, kind: StatKind, value: impl Into<StatValue>) {
        self.values.insert(kind, value.into());
    }

    /// The value of `kind`, if it was computed.
    pub fn get(&self, kind: StatKind) -> Option<StatValue> {
        self.values.get(&kind).copied()
    }

    /// Numeric value of `kind`, `0.0` if it was not computed.
    pub fn value(&self, kind: StatKind) -> f64 {
        self.get(kind).map_or(0.0, StatValue::as_f64)
    }

    /// Boolean value of `kind`, `false` if it was not computed.
    pub fn flag(&self, kind: StatKind) -> bool {
        self.get(kind).is_some_and(StatValue::as_bool)
    }

    /// Whether `kind` was computed.
    pub fn contains(&self, kind: StatKind) -> bool {
        self.values.contains_key(&kind)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(kind, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, StatValue)> + '_ {
        self.values.iter().map(|(&k, &v)| (k, v))
    }
}

impl FromIterator<(StatKind, StatValue)> for Stats {
    fn from_iter<I: IntoIterator<Item = (StatKind, StatValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, v) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        Ok(())
    }
}
