//! 4-connected neighbour lookup on a row-major grid.

use smallvec::SmallVec;

/// Row/column offsets of the four cardinal neighbours: south, north, east, west.
pub const OFFSETS_4: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Flat indices of the in-bounds 4-connected neighbours of `index`.
///
/// Edges absorb: corner cells have 2 neighbours, border cells 3.
pub fn neighbours4(index: usize, width: usize, height: usize) -> SmallVec<[usize; 4]> {
    let r = (index / width) as isize;
    let c = (index % width) as isize;
    let mut result = SmallVec::new();
    for (dr, dc) in OFFSETS_4 {
        let nr = r + dr;
        let nc = c + dc;
        if nr >= 0 && nc >= 0 && (nr as usize) < height && (nc as usize) < width {
            result.push(nr as usize * width + nc as usize);
        }
    }
    result
}
