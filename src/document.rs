use crate::grid::PixelGrid;
use crate::overlay::OverlayStore;

/// The editable document: pixel cells plus the accent strokes drawn over them.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub grid: PixelGrid,
    pub overlay: OverlayStore,
}

impl Document {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: PixelGrid::new(width, height),
            overlay: OverlayStore::new(),
        }
    }

    pub fn from_parts(grid: PixelGrid, overlay: OverlayStore) -> Self {
        Self { grid, overlay }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// An independent copy for the history stacks. Never carries an open
    /// overlay stroke, so a restored document cannot be extended by a stale
    /// gesture.
    pub fn snapshot(&self) -> Document {
        let mut copy = self.clone();
        copy.overlay.end_stroke();
        copy
    }

    pub fn is_blank(&self) -> bool {
        self.grid.is_blank() && self.overlay.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_GRID_SIZE, crate::config::DEFAULT_GRID_SIZE)
    }
}
