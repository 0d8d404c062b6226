// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Uniform-grid spatial index over the faces of a [`FaceVertexMesh`].
//!
//! Each grid cell lists, ascending and without duplicates, every face whose
//! bounding box overlaps the cell. The lists over-approximate: a face is
//! never missing from a cell it overlaps, but may be listed where it only
//! overlaps through its box. Queries filter with the exact face test.

use rayon::prelude::*;

use crate::{
    error::{MeshError, Result},
    geometry::{Aabb2, Point2},
    mesh::{
        face_vertex_mesh::FaceVertexMesh,
        regular_grid::{CellRange, RegularGrid},
    },
    numeric::{MeshIndex, Scalar},
    query,
};

/// How finely to partition the mesh bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<T: Scalar> {
    /// About one face per cell, split along the box's aspect ratio.
    Auto,
    /// Exactly this many cells along x and y.
    Cells([usize; 2]),
    /// Square cells of this side length.
    Spacing(T),
}

/// Options for building a [`BinnedMesh`].
#[derive(Debug, Clone)]
pub struct PartitionOptions<T: Scalar> {
    pub resolution: Resolution<T>,

    /// Bin faces on the rayon pool (default: true).
    pub parallel: bool,
}

impl<T: Scalar> Default for PartitionOptions<T> {
    fn default() -> Self {
        Self {
            resolution: Resolution::Auto,
            parallel: true,
        }
    }
}

impl<T: Scalar> PartitionOptions<T> {
    pub fn with_resolution(mut self, resolution: Resolution<T>) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_cells(self, nx: usize, ny: usize) -> Self {
        self.with_resolution(Resolution::Cells([nx, ny]))
    }

    pub fn with_spacing(self, spacing: T) -> Self {
        self.with_resolution(Resolution::Spacing(spacing))
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Grid covering `bbox` at this resolution, for a mesh of `num_faces` faces.
    pub fn grid_for(&self, bbox: &Aabb2<T>, num_faces: usize) -> Result<RegularGrid<T, 2>> {
        match self.resolution {
            Resolution::Auto => RegularGrid::from_box(bbox, auto_cells(bbox, num_faces)),
            Resolution::Cells(cells) => {
                if cells.contains(&0) {
                    return Err(MeshError::invalid_param(
                        "resolution",
                        format!("{cells:?}"),
                        "cell counts must be at least 1",
                    ));
                }
                check_cell_count(cells)?;
                RegularGrid::from_box(bbox, cells)
            }
            Resolution::Spacing(s) => {
                if !(s > T::zero() && s.is_finite()) {
                    return Err(MeshError::invalid_param(
                        "resolution",
                        format!("{s:?}"),
                        "spacing must be positive and finite",
                    ));
                }
                let mut cells = [1usize; 2];
                for (d, n) in cells.iter_mut().enumerate() {
                    *n = (bbox.extent(d) / s)
                        .ceil()
                        .to_usize()
                        .filter(|&n| n <= MAX_CELLS)
                        .ok_or_else(|| {
                            MeshError::invalid_param(
                                "resolution",
                                format!("{s:?}"),
                                "spacing too fine for the mesh extent",
                            )
                        })?
                        .max(1);
                    if bbox.minima[d] + s * T::from_usize(*n) < bbox.maxima[d] {
                        *n += 1;
                    }
                }
                check_cell_count(cells)?;
                RegularGrid::new(bbox.minima, [s, s], cells)
            }
        }
    }
}

/// Upper bound on the number of cells a grid index may allocate.
pub const MAX_CELLS: usize = 1 << 24;

fn check_cell_count(cells: [usize; 2]) -> Result<()> {
    match cells[0].checked_mul(cells[1]) {
        Some(total) if total <= MAX_CELLS => Ok(()),
        _ => Err(MeshError::invalid_param(
            "resolution",
            format!("{cells:?}"),
            "grid would exceed the cell limit",
        )),
    }
}

fn auto_cells<T: Scalar>(bbox: &Aabb2<T>, num_faces: usize) -> [usize; 2] {
    let n = T::from_usize(num_faces.max(1));
    let (w, h) = (bbox.width(), bbox.height());
    let count = |x: T| x.round().to_usize().unwrap_or(1).clamp(1, num_faces.max(1));
    match (w > T::zero(), h > T::zero()) {
        (true, true) => [count((n * w / h).sqrt()), count((n * h / w).sqrt())],
        (true, false) => [count(n), 1],
        (false, true) => [1, count(n)],
        (false, false) => [1, 1],
    }
}

/// A mesh together with its grid index.
///
/// Borrows the mesh, so the index can never outlive or observe a changed
/// mesh. Candidate lists are stored compressed: cell `c` owns
/// `faces[offsets[c]..offsets[c + 1]]`.
#[derive(Debug, Clone)]
pub struct BinnedMesh<'a, T: Scalar, I: MeshIndex> {
    mesh: &'a FaceVertexMesh<T, I>,
    grid: RegularGrid<T, 2>,
    offsets: Vec<usize>,
    faces: Vec<I>,
}

impl<'a, T: Scalar, I: MeshIndex> BinnedMesh<'a, T, I> {
    /// Index `mesh` on a grid derived from its bounding box.
    pub fn new(mesh: &'a FaceVertexMesh<T, I>, options: &PartitionOptions<T>) -> Result<Self> {
        if mesh.num_faces() == 0 {
            return Err(MeshError::EmptyMesh);
        }
        let grid = options.grid_for(&mesh.bounding_box(), mesh.num_faces())?;
        Ok(Self::build(mesh, grid, options))
    }

    /// Index `mesh` on a caller-supplied grid. Faces outside the grid are
    /// not indexed.
    pub fn build(
        mesh: &'a FaceVertexMesh<T, I>,
        grid: RegularGrid<T, 2>,
        options: &PartitionOptions<T>,
    ) -> Self {
        let nf = mesh.num_faces();
        let grid_ref = &grid;
        let cells_of = move |f: usize| {
            grid_ref
                .range_overlapping(&mesh.face(f).bounding_box())
                .into_iter()
                .flat_map(CellRange::iter)
                .map(move |cell| (grid_ref.linear_index(cell), f))
        };

        let mut pairs: Vec<(usize, usize)> = if options.parallel {
            (0..nf).into_par_iter().flat_map_iter(cells_of).collect()
        } else {
            (0..nf).flat_map(cells_of).collect()
        };
        if options.parallel {
            pairs.par_sort_unstable();
        } else {
            pairs.sort_unstable();
        }
        pairs.dedup();

        let total = grid.total_cells();
        let mut offsets = vec![0usize; total + 1];
        for &(cell, _) in &pairs {
            offsets[cell + 1] += 1;
        }
        for c in 0..total {
            offsets[c + 1] += offsets[c];
        }
        let faces: Vec<I> = pairs.into_iter().map(|(_, f)| I::from_index(f)).collect();

        let binned = Self {
            mesh,
            grid,
            offsets,
            faces,
        };
        log::debug!(
            "binned {} faces into {}x{} cells: {} entries, at most {} per cell",
            nf,
            binned.grid.num_x_cells(),
            binned.grid.num_y_cells(),
            binned.num_candidates(),
            binned.max_candidates()
        );
        binned
    }

    pub fn mesh(&self) -> &'a FaceVertexMesh<T, I> {
        self.mesh
    }

    pub fn grid(&self) -> &RegularGrid<T, 2> {
        &self.grid
    }

    /// Faces listed in cell `cell` (linear index), ascending.
    pub fn candidates(&self, cell: usize) -> &[I] {
        &self.faces[self.offsets[cell]..self.offsets[cell + 1]]
    }

    /// Faces listed in the cell holding `p`; empty outside the grid.
    pub fn candidates_at(&self, p: &Point2<T>) -> &[I] {
        match self.grid.try_cell_of(p) {
            Some(cell) => self.candidates(self.grid.linear_index(cell)),
            None => &[],
        }
    }

    /// Longest candidate list.
    pub fn max_candidates(&self) -> usize {
        self.offsets
            .windows(2)
            .map(|w| w[1] - w[0])
            .max()
            .unwrap_or(0)
    }

    /// Total number of (cell, face) entries.
    pub fn num_candidates(&self) -> usize {
        self.faces.len()
    }

    pub fn face_containing(&self, p: &Point2<T>) -> Option<usize> {
        query::face_containing(self, p)
    }

    /// [`Self::face_containing`] for a batch of points, on the rayon pool.
    pub fn face_containing_many(&self, points: &[Point2<T>]) -> Vec<Option<usize>> {
        points.par_iter().map(|p| self.face_containing(p)).collect()
    }
}
