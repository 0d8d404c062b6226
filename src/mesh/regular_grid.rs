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


use crate::{
    error::{MeshError, Result},
    geometry::{Aabb, Point, Point2, Ray2},
    numeric::{Scalar, scalar::next_up},
};

/// Uniform axis-aligned grid of `num_cells[0] * num_cells[1] * ...` cells.
///
/// Cell `(i, j, ...)` is the box `[minima + i * spacing, minima + (i + 1) * spacing]`
/// on each axis. Corners are computed from the index directly so there is no
/// drift across the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularGrid<T: Scalar, const N: usize> {
    minima: Point<T, N>,
    spacing: [T; N],
    num_cells: [usize; N],
}

/// Inclusive block of cell indices, `lo[d]..=hi[d]` on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange<const N: usize> {
    pub lo: [usize; N],
    pub hi: [usize; N],
}

impl<const N: usize> CellRange<N> {
    pub fn num_cells(&self) -> usize {
        (0..N).map(|d| self.hi[d] - self.lo[d] + 1).product()
    }

    pub fn contains(&self, cell: &[usize; N]) -> bool {
        (0..N).all(|d| self.lo[d] <= cell[d] && cell[d] <= self.hi[d])
    }

    /// Every cell in the block, first axis fastest.
    pub fn iter(self) -> impl Iterator<Item = [usize; N]> {
        let mut next = Some(self.lo);
        std::iter::from_fn(move || {
            let current = next?;
            let mut cell = current;
            next = None;
            for d in 0..N {
                if cell[d] < self.hi[d] {
                    cell[d] += 1;
                    next = Some(cell);
                    break;
                }
                cell[d] = self.lo[d];
            }
            Some(current)
        })
    }
}

impl<T: Scalar, const N: usize> RegularGrid<T, N> {
    pub fn new(minima: Point<T, N>, spacing: [T; N], num_cells: [usize; N]) -> Result<Self> {
        for d in 0..N {
            if !(spacing[d] > T::zero() && spacing[d].is_finite()) {
                return Err(MeshError::invalid_param(
                    "spacing",
                    format!("{:?}", spacing[d]),
                    "must be positive and finite",
                ));
            }
            if num_cells[d] == 0 {
                return Err(MeshError::invalid_param(
                    "num_cells",
                    0,
                    "every axis needs at least one cell",
                ));
            }
        }
        if !minima.is_finite() {
            return Err(MeshError::invalid_param(
                "minima",
                format!("{:?}", minima.coords),
                "must be finite",
            ));
        }
        Ok(Self {
            minima,
            spacing,
            num_cells,
        })
    }

    /// Grid with `num_cells` cells per axis whose box covers `bbox`.
    ///
    /// Spacing is widened by ulps until `minima + spacing * n` reaches the
    /// box maxima. A flat axis gets unit spacing.
    pub fn from_box(bbox: &Aabb<T, N>, num_cells: [usize; N]) -> Result<Self> {
        let mut spacing = [T::one(); N];
        for d in 0..N {
            let n = T::from_usize(num_cells[d].max(1));
            let extent = bbox.extent(d);
            if extent > T::zero() {
                let mut s = extent / n;
                while bbox.minima[d] + s * n < bbox.maxima[d] {
                    s = next_up(s);
                }
                spacing[d] = s;
            }
        }
        Self::new(bbox.minima, spacing, num_cells)
    }

    pub fn minima(&self) -> &Point<T, N> {
        &self.minima
    }

    pub fn maxima(&self) -> Point<T, N> {
        let mut maxima = self.minima;
        for d in 0..N {
            maxima[d] = self.minima[d] + self.spacing[d] * T::from_usize(self.num_cells[d]);
        }
        maxima
    }

    pub fn spacing(&self) -> &[T; N] {
        &self.spacing
    }

    pub fn num_cells(&self) -> &[usize; N] {
        &self.num_cells
    }

    pub fn total_cells(&self) -> usize {
        self.num_cells.iter().product()
    }

    pub fn bounding_box(&self) -> Aabb<T, N> {
        Aabb::new(self.minima, self.maxima())
    }

    pub fn box_of(&self, cell: [usize; N]) -> Aabb<T, N> {
        let mut lo = self.minima;
        let mut hi = self.minima;
        for d in 0..N {
            lo[d] = self.minima[d] + self.spacing[d] * T::from_usize(cell[d]);
            hi[d] = self.minima[d] + self.spacing[d] * T::from_usize(cell[d] + 1);
        }
        Aabb::new(lo, hi)
    }

    #[inline]
    fn axis_index(&self, d: usize, x: T) -> usize {
        let k = ((x - self.minima[d]) / self.spacing[d]).floor();
        k.to_usize().unwrap_or(0).min(self.num_cells[d] - 1)
    }

    /// Cell holding `p`, clamped to the grid on every axis.
    pub fn cell_of(&self, p: &Point<T, N>) -> [usize; N] {
        std::array::from_fn(|d| self.axis_index(d, p[d]))
    }

    /// Cell holding `p`, or `None` if `p` is outside the (closed) grid box.
    pub fn try_cell_of(&self, p: &Point<T, N>) -> Option<[usize; N]> {
        let maxima = self.maxima();
        if (0..N).any(|d| !(p[d] >= self.minima[d] && p[d] <= maxima[d])) {
            return None;
        }
        Some(self.cell_of(p))
    }

    /// Cells a box may touch: from the cell of its minima to the cell of its
    /// maxima, clamped to the grid. Any point of `bbox` inside the grid maps,
    /// through [`Self::cell_of`], to a cell of this range. `None` if the box
    /// misses the grid.
    pub fn range_overlapping(&self, bbox: &Aabb<T, N>) -> Option<CellRange<N>> {
        if !self.bounding_box().intersects(bbox) {
            return None;
        }
        Some(CellRange {
            lo: self.cell_of(&bbox.minima),
            hi: self.cell_of(&bbox.maxima),
        })
    }

    /// Row-major position of `cell`, first axis fastest: `j * nx + i` in 2-D.
    pub fn linear_index(&self, cell: [usize; N]) -> usize {
        (0..N)
            .rev()
            .fold(0, |acc, d| acc * self.num_cells[d] + cell[d])
    }

    pub fn cell_at(&self, mut index: usize) -> [usize; N] {
        std::array::from_fn(|d| {
            let i = index % self.num_cells[d];
            index /= self.num_cells[d];
            i
        })
    }
}

impl<T: Scalar> RegularGrid<T, 2> {
    pub fn x_min(&self) -> T {
        self.minima[0]
    }

    pub fn y_min(&self) -> T {
        self.minima[1]
    }

    pub fn x_max(&self) -> T {
        self.maxima()[0]
    }

    pub fn y_max(&self) -> T {
        self.maxima()[1]
    }

    pub fn width(&self) -> T {
        self.spacing[0] * T::from_usize(self.num_cells[0])
    }

    pub fn height(&self) -> T {
        self.spacing[1] * T::from_usize(self.num_cells[1])
    }

    pub fn num_x_cells(&self) -> usize {
        self.num_cells[0]
    }

    pub fn num_y_cells(&self) -> usize {
        self.num_cells[1]
    }

    pub fn cell_center(&self, cell: [usize; 2]) -> Point2<T> {
        self.box_of(cell).centroid()
    }

    /// Parameter interval over which `ray` is inside the grid box, if any.
    fn clip(&self, ray: &Ray2<T>) -> Option<(T, T)> {
        let maxima = self.maxima();
        let tol = T::tolerance();
        let (mut t0, mut t1) = (T::zero(), T::infinity());
        for d in 0..2 {
            let (o, dir) = (ray.origin[d], ray.direction[d]);
            let (lo, hi) = (self.minima[d] - tol, maxima[d] + tol);
            if dir == T::zero() {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let (a, b) = ((lo - o) / dir, (hi - o) / dir);
            t0 = t0.max(a.min(b));
            t1 = t1.min(a.max(b));
        }
        (t0 <= t1).then_some((t0, t1))
    }

    /// Cells crossed by `ray`, in the order the ray enters them.
    ///
    /// Where the ray passes through a grid node, every cell meeting at that
    /// node is included.
    pub fn cells_crossed_by(&self, ray: &Ray2<T>) -> Vec<[usize; 2]> {
        let mut cells = Vec::new();
        let Some((t_enter, t_exit)) = self.clip(ray) else {
            return cells;
        };
        let mut cell = self.cell_of(&ray.point_at(t_enter));

        let mut step = [0isize; 2];
        let mut t_max = [T::infinity(); 2];
        let mut t_delta = [T::infinity(); 2];
        for d in 0..2 {
            let dir = ray.direction[d];
            let s = self.spacing[d];
            if dir > T::zero() {
                step[d] = 1;
                let boundary = self.minima[d] + s * T::from_usize(cell[d] + 1);
                t_max[d] = (boundary - ray.origin[d]) / dir;
                t_delta[d] = s / dir;
            } else if dir < T::zero() {
                step[d] = -1;
                let boundary = self.minima[d] + s * T::from_usize(cell[d]);
                t_max[d] = (boundary - ray.origin[d]) / dir;
                t_delta[d] = -s / dir;
            }
        }

        loop {
            cells.push(cell);
            let d = if t_max[0] < t_max[1] { 0 } else { 1 };
            if step[d] == 0 || t_max[d] > t_exit {
                break;
            }
            let tol = T::tolerance() * (T::one() + t_max[d].abs());
            if step[0] != 0 && step[1] != 0 && (t_max[0] - t_max[1]).abs() <= tol {
                // Through a grid corner: both side cells touch the ray there.
                let x = self.step_axis(cell, 0, step[0]);
                let y = self.step_axis(cell, 1, step[1]);
                if let Some(x) = x {
                    cells.push([x, cell[1]]);
                }
                if let Some(y) = y {
                    cells.push([cell[0], y]);
                }
                let (Some(x), Some(y)) = (x, y) else {
                    break;
                };
                cell = [x, y];
                t_max = [t_max[0] + t_delta[0], t_max[1] + t_delta[1]];
                continue;
            }
            match self.step_axis(cell, d, step[d]) {
                Some(next) => cell[d] = next,
                None => break,
            }
            t_max[d] = t_max[d] + t_delta[d];
        }
        cells
    }

    fn step_axis(&self, cell: [usize; 2], d: usize, step: isize) -> Option<usize> {
        cell[d]
            .checked_add_signed(step)
            .filter(|&next| next < self.num_cells[d])
    }
}
