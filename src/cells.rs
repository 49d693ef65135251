//! Cell neighborhood enumeration over the S2 hierarchy.
//!
//! Two independent algorithms produce a discretized neighborhood around a
//! point, both at a fixed working level:
//!
//! - [`cell_walk`] walks sibling cells along Hilbert-curve order, giving a
//!   1-dimensional band of cells around the origin.
//! - [`grid_neighbors`] expands across the face/IJ grid, giving a square
//!   2-dimensional block of cells centered on a cell.
//!
//! Both are stateless, single-pass, deterministic functions of their inputs.

use s2::cellid::{CellID, MAX_LEVEL, MAX_SIZE};
use s2::latlng::LatLng;

/// Working subdivision level for all neighbor computations.
///
/// Level 15 cells are near city-block scale. Tunable, not derived.
pub const CELL_LEVEL: u64 = 15;

/// Default radius for [`cell_walk`].
pub const DEFAULT_WALK_RADIUS: usize = 10;

/// Default radius for [`grid_neighbors`].
pub const DEFAULT_NEIGHBOR_RADIUS: u32 = 1;

/// Compute the cell containing a coordinate at [`CELL_LEVEL`].
///
/// Deterministic: repeated calls with equal inputs yield the identical id.
/// Out-of-range coordinates are not validated; the index maps them as it
/// sees fit.
///
/// # Examples
///
/// ```rust
/// use locus::cells::{cell_id_for, CELL_LEVEL};
///
/// let cell = cell_id_for(40.7128, -74.0060);
/// assert_eq!(cell.level(), CELL_LEVEL);
/// ```
pub fn cell_id_for(latitude: f64, longitude: f64) -> CellID {
    CellID::from(LatLng::from_degrees(latitude, longitude)).parent(CELL_LEVEL)
}

/// Walk sibling cells along Hilbert-curve order around a coordinate.
///
/// The walk starts at the containing cell and advances a `right` cursor
/// (`next()`) and, when `both_directions` is set, a `left` cursor (`prev()`)
/// for `radius` iterations each. A one-sided walk doubles the radius so the
/// total cell count matches the two-sided case, at the cost of a one-sided
/// spatial distribution.
///
/// Sibling order crosses face boundaries transparently; that guarantee comes
/// from the index. Wrap-around at the extremes of the id space is not
/// guarded.
///
/// Returns the collected cells sorted by ascending numeric id. The order is
/// a normalization step only; Hilbert order approximates but does not
/// guarantee metric locality at boundary crossings.
///
/// # Examples
///
/// ```rust
/// use locus::cells::cell_walk;
///
/// let walk = cell_walk(40.7128, -74.0060, 10, true);
/// assert_eq!(walk.len(), 21);
///
/// // Radius zero is just the origin cell
/// let walk = cell_walk(40.7128, -74.0060, 0, true);
/// assert_eq!(walk.len(), 1);
/// ```
pub fn cell_walk(
    latitude: f64,
    longitude: f64,
    radius: usize,
    both_directions: bool,
) -> Vec<CellID> {
    let origin = cell_id_for(latitude, longitude);

    // Double the radius when only walking one way, preserving the total count
    let radius = if both_directions { radius } else { radius * 2 };

    let mut walk = Vec::with_capacity(if both_directions {
        2 * radius + 1
    } else {
        radius + 1
    });
    walk.push(origin);

    let mut right = origin.next();
    let mut left = origin.prev();

    for _ in 0..radius {
        walk.push(right);
        right = right.next();
        if both_directions {
            walk.push(left);
            left = left.prev();
        }
    }

    log::debug!(
        "cell walk at ({}, {}) radius {} collected {} cells",
        latitude,
        longitude,
        radius,
        walk.len()
    );

    walk.sort_unstable_by_key(|cell| cell.0);
    walk
}

/// Expand a cell across its face/IJ grid.
///
/// Every offset pair `(di, dj)` in `[-radius, radius]²` is translated into
/// leaf-grid steps of the input cell's own level and handed to the index's
/// face/IJ constructor, which re-projects onto the adjacent face when the
/// translated coordinates leave the `[0, MAX_SIZE)` range of the current
/// face. The engine only signals whether wrap handling is needed; it never
/// performs face-wrap arithmetic itself.
///
/// Returns `(2·radius + 1)²` cells in `di`-outer, `dj`-inner order, the
/// origin cell included at offset `(0, 0)`. No deduplication and no sorting;
/// near face corners the projected neighbor may repeat or not be metrically
/// adjacent, and callers needing a unique set must dedupe themselves.
pub fn grid_neighbors(cell: CellID, radius: u32) -> Vec<CellID> {
    let level = cell.level();
    let size = (1u64 << (MAX_LEVEL - level)) as i32;
    let (face, i, j, _orientation) = cell.face_ij_orientation();

    let side = 2 * radius as usize + 1;
    let radius = radius as i32;

    let mut cells = Vec::with_capacity(side * side);
    for di in -radius..=radius {
        for dj in -radius..=radius {
            let new_i = i + di * size;
            let new_j = j + dj * size;
            let same_face = new_i >= 0
                && new_i < MAX_SIZE as i32
                && new_j >= 0
                && new_j < MAX_SIZE as i32;
            cells.push(CellID::from_face_ij_same(face, new_i, new_j, same_face).parent(level));
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    const NYC: (f64, f64) = (40.7128, -74.0060);

    #[test]
    fn test_cell_id_for_is_deterministic() {
        let a = cell_id_for(NYC.0, NYC.1);
        let b = cell_id_for(NYC.0, NYC.1);
        assert_eq!(a.0, b.0);
        assert_eq!(a.level(), CELL_LEVEL);
    }

    #[test]
    fn test_cell_walk_radius_zero() {
        let walk = cell_walk(NYC.0, NYC.1, 0, true);
        assert_eq!(walk.len(), 1);
        assert_eq!(walk[0].0, cell_id_for(NYC.0, NYC.1).0);

        let walk = cell_walk(NYC.0, NYC.1, 0, false);
        assert_eq!(walk.len(), 1);
    }

    #[test]
    fn test_cell_walk_both_directions() {
        let radius = 10;
        let walk = cell_walk(NYC.0, NYC.1, radius, true);
        assert_eq!(walk.len(), 2 * radius + 1);

        // Sorted ascending, no duplicates
        for pair in walk.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }

        // Origin is part of the walk
        let origin = cell_id_for(NYC.0, NYC.1);
        assert!(walk.iter().any(|cell| cell.0 == origin.0));
    }

    #[test]
    fn test_cell_walk_one_sided_doubles_radius() {
        let radius = 10;
        let walk = cell_walk(NYC.0, NYC.1, radius, false);

        // Origin plus 2*radius cells collected one-sided
        assert_eq!(walk.len(), 2 * radius + 1);

        for pair in walk.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }

        // One-sided walk never goes below the origin
        let origin = cell_id_for(NYC.0, NYC.1);
        assert_eq!(walk[0].0, origin.0);
    }

    #[test]
    fn test_cell_walk_all_cells_at_working_level() {
        for cell in cell_walk(NYC.0, NYC.1, 5, true) {
            assert_eq!(cell.level(), CELL_LEVEL);
        }
    }

    #[test]
    fn test_grid_neighbors_radius_zero_is_identity() {
        let origin = cell_id_for(NYC.0, NYC.1);
        let cells = grid_neighbors(origin, 0);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].0, origin.0);
    }

    #[test]
    fn test_grid_neighbors_count_and_origin() {
        let origin = cell_id_for(NYC.0, NYC.1);

        for radius in [1u32, 2, 3] {
            let cells = grid_neighbors(origin, radius);
            let side = 2 * radius as usize + 1;
            assert_eq!(cells.len(), side * side);

            // Origin sits at the center of the di-outer, dj-inner iteration
            assert_eq!(cells[cells.len() / 2].0, origin.0);

            for cell in &cells {
                assert_eq!(cell.level(), origin.level());
            }
        }
    }

    #[test]
    fn test_grid_neighbors_works_on_other_levels() {
        let coarse = cell_id_for(NYC.0, NYC.1).parent(8);
        let cells = grid_neighbors(coarse, 1);
        assert_eq!(cells.len(), 9);
        for cell in cells {
            assert_eq!(cell.level(), 8);
        }
    }

    #[test]
    fn test_grid_neighbors_near_face_boundary() {
        // A point near a cube-face edge still yields a full block; the
        // out-of-face offsets are re-projected by the index.
        let edge = cell_id_for(0.0, 45.0);
        let cells = grid_neighbors(edge, 2);
        assert_eq!(cells.len(), 25);
    }
}
