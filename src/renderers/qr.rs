//! Decorative QR placeholder
//!
//! A two-tone mosaic with three corner finder squares. It looks like a QR
//! code and nothing more: the cells carry no data and there is no decoder
//! contract. Shading is seeded from the element id so the graphic stays put
//! across re-renders instead of flickering.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::ElementId;

/// Finder squares span this many cells
pub const MARKER_CELLS: usize = 3;

/// Smallest grid that still fits the corner markers without overlap
pub const MIN_GRID: usize = 2 * MARKER_CELLS + 1;

/// A corner finder square, in cell units
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct QrMarker {
    pub row: usize,
    pub col: usize,
    pub cells: usize,
}

/// The mosaic for one QR element
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QrMosaic {
    /// Rows and columns
    pub grid: usize,

    /// Row-major; `true` is a dark cell
    pub cells: Vec<bool>,

    /// Top-left, top-right, bottom-left
    pub markers: [QrMarker; 3],
}

impl QrMosaic {
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.cells.get(row * self.grid + col).copied().unwrap_or(false)
    }
}

/// Build the mosaic for an element
pub fn qr_mosaic(id: ElementId, grid: usize) -> QrMosaic {
    let grid = grid.max(MIN_GRID);
    let mut rng = StdRng::seed_from_u64(id.0);
    let cells = (0..grid * grid).map(|_| rng.random_bool(0.5)).collect();

    let far = grid - MARKER_CELLS;
    QrMosaic {
        grid,
        cells,
        markers: [
            QrMarker { row: 0, col: 0, cells: MARKER_CELLS },
            QrMarker { row: 0, col: far, cells: MARKER_CELLS },
            QrMarker { row: far, col: 0, cells: MARKER_CELLS },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mosaic_is_stable_per_element() {
        assert_eq!(qr_mosaic(ElementId(5), 8), qr_mosaic(ElementId(5), 8));
    }

    #[test]
    fn test_mosaic_size_and_markers() {
        let mosaic = qr_mosaic(ElementId(1), 8);
        assert_eq!(mosaic.grid, 8);
        assert_eq!(mosaic.cells.len(), 64);
        assert_eq!(mosaic.markers[1], QrMarker { row: 0, col: 5, cells: 3 });
        assert_eq!(mosaic.markers[2], QrMarker { row: 5, col: 0, cells: 3 });
    }

    #[test]
    fn test_tiny_grid_is_raised_to_minimum() {
        let mosaic = qr_mosaic(ElementId(1), 2);
        assert_eq!(mosaic.grid, MIN_GRID);
        assert_eq!(mosaic.cells.len(), MIN_GRID * MIN_GRID);
    }
}
