//! Action and observation space descriptors.
//!
//! These are plain shape descriptions for agents and wrappers; nothing
//! here samples or validates actions.

use smallvec::{smallvec, SmallVec};

/// Space of external action indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionSpace {
    /// One index in `0..n`.
    Discrete(usize),
    /// One index per axis, each in `0..dims[i]`.
    MultiDiscrete(SmallVec<[usize; 3]>),
}

impl ActionSpace {
    /// Number of distinct actions.
    pub fn cardinality(&self) -> usize {
        match self {
            ActionSpace::Discrete(n) => *n,
            ActionSpace::MultiDiscrete(dims) => dims.iter().product(),
        }
    }

    /// Whether `indices` lie inside the space.
    pub fn contains(&self, indices: &[usize]) -> bool {
        match self {
            ActionSpace::Discrete(n) => indices.len() == 1 && indices[0] < *n,
            ActionSpace::MultiDiscrete(dims) => {
                indices.len() == dims.len() && indices.iter().zip(dims).all(|(i, d)| i < d)
            }
        }
    }
}

/// Integer box with a shared inclusive bound on every element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxSpace {
    /// Array shape, row-major.
    pub shape: SmallVec<[usize; 2]>,
    /// Smallest element value.
    pub low: u32,
    /// Largest element value.
    pub high: u32,
}

impl BoxSpace {
    /// A `height x width` box bounded by `[low, high]`.
    pub fn grid(height: usize, width: usize, low: u32, high: u32) -> Self {
        Self {
            shape: smallvec![height, width],
            low,
            high,
        }
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    /// Whether the box holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Range of cursor coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSpace {
    /// Largest column.
    pub max_x: usize,
    /// Largest row.
    pub max_y: usize,
}

/// Everything an observation may carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservationSpace {
    /// Tile codes, `0..num_tiles`.
    pub grid: BoxSpace,
    /// Present for representations with a cursor.
    pub cursor: Option<CursorSpace>,
    /// Per-cell change counts; attached by the environment.
    pub heatmap: Option<BoxSpace>,
}

impl ObservationSpace {
    /// Attach a heatmap box of the grid's shape bounded by `max_count`.
    pub fn with_heatmap(mut self, max_count: u32) -> Self {
        self.heatmap = Some(BoxSpace {
            shape: self.grid.shape.clone(),
            low: 0,
            high: max_count,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discrete_contains() {
        let space = ActionSpace::Discrete(4);
        assert!(space.contains(&[3]));
        assert!(!space.contains(&[4]));
        assert!(!space.contains(&[0, 0]));
        assert_eq!(space.cardinality(), 4);
    }

    #[test]
    fn multi_discrete_contains() {
        let space = ActionSpace::MultiDiscrete(smallvec![5, 3, 2]);
        assert!(space.contains(&[4, 2, 1]));
        assert!(!space.contains(&[5, 0, 0]));
        assert!(!space.contains(&[0, 0]));
        assert_eq!(space.cardinality(), 30);
    }

    #[test]
    fn heatmap_copies_grid_shape() {
        let space = ObservationSpace {
            grid: BoxSpace::grid(3, 7, 0, 3),
            cursor: None,
            heatmap: None,
        }
        .with_heatmap(9);
        let heatmap = space.heatmap.unwrap();
        assert_eq!(heatmap.shape.as_slice(), &[3, 7]);
        assert_eq!(heatmap.high, 9);
        assert_eq!(heatmap.len(), 21);
    }
}
