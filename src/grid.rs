use crate::color::Rgba;
use crate::geometry::GridPos;
use serde::{Deserialize, Serialize};

/// A cell is either unpainted (`None`) or holds a colour.
pub type Pixel = Option<Rgba>;

/// Fixed-size, row-major grid of optional colours. `(0, 0)` is top-left.
///
/// The dimensions are set at construction and never change; writes outside
/// them are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridRows", into = "GridRows")]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<Pixel>,
}

/// Errors when building a grid from nested rows.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridShapeError {
    #[error("grid must have at least one row and one column")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, found: usize, expected: usize },
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
}

impl PixelGrid {
    /// An all-empty grid. Zero dimensions are bumped to one.
    pub fn new(width: usize, height: usize) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Builds a grid from `height` rows of `width` cells each.
    pub fn from_rows(width: usize, height: usize, rows: Vec<Vec<Pixel>>) -> Result<Self, GridShapeError> {
        if width == 0 || height == 0 {
            return Err(GridShapeError::Empty);
        }
        if rows.len() != height {
            return Err(GridShapeError::RowCount {
                expected: height,
                found: rows.len(),
            });
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(GridShapeError::RaggedRow {
                    row,
                    found: cols.len(),
                    expected: width,
                });
            }
            cells.extend(cols);
        }
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Bounds-checked read. Out of range reads as unpainted.
    pub fn get(&self, x: i32, y: i32) -> Pixel {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// Replaces one cell. Returns `false` and leaves the grid alone when the
    /// coordinate is off the grid.
    pub fn set(&mut self, x: i32, y: i32, pixel: Pixel) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = pixel;
                true
            }
            None => false,
        }
    }

    /// Writes the same value to every listed cell, last write wins.
    /// Returns how many cells were on the grid.
    pub fn paint<'a>(&mut self, cells: impl IntoIterator<Item = &'a GridPos>, pixel: Pixel) -> usize {
        cells
            .into_iter()
            .filter(|p| self.set(p.x, p.y, pixel))
            .count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// True if any cell would show the background: unpainted or translucent.
    pub fn has_transparency(&self) -> bool {
        self.cells.iter().any(|c| c.is_none_or(|c| c.a < 1.0))
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.cells.chunks(self.width)
    }

    /// Painted cells with their coordinates, row-major.
    pub fn painted(&self) -> impl Iterator<Item = (GridPos, Rgba)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, c)| {
            let c = (*c)?;
            let (x, y) = (i % self.width, i / self.width);
            Some((GridPos::new(x as i32, y as i32), c))
        })
    }

    /// Nested rows as stored in project files: `[height][width]`.
    pub fn to_rows(&self) -> Vec<Vec<Pixel>> {
        self.rows().map(<[Pixel]>::to_vec).collect()
    }
}

/// Serialized form: plain nested rows, dimensions implied.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct GridRows(Vec<Vec<Pixel>>);

impl From<PixelGrid> for GridRows {
    fn from(grid: PixelGrid) -> Self {
        GridRows(grid.to_rows())
    }
}

impl TryFrom<GridRows> for PixelGrid {
    type Error = GridShapeError;

    fn try_from(GridRows(rows): GridRows) -> Result<Self, Self::Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        PixelGrid::from_rows(width, height, rows)
    }
}
