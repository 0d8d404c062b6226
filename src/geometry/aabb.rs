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

use std::ops::{Add, AddAssign};

use crate::{geometry::point::Point, numeric::scalar::Scalar};

/// An axis-aligned bounding box in N dimensions.
///
/// Invariant: `minima[i] <= maxima[i]` for every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb<T: Scalar, const N: usize> {
    pub minima: Point<T, N>,
    pub maxima: Point<T, N>,
}

impl<T: Scalar, const N: usize> Aabb<T, N> {
    pub fn new(minima: Point<T, N>, maxima: Point<T, N>) -> Self {
        debug_assert!(
            (0..N).all(|i| minima[i] <= maxima[i]),
            "box minima must not exceed maxima"
        );
        Aabb { minima, maxima }
    }

    /// Degenerate box around a single point.
    pub fn from_point(p: Point<T, N>) -> Self {
        Aabb {
            minima: p,
            maxima: p,
        }
    }

    /// Smallest box containing every point. `None` when `points` is empty.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<T, N>>,
    {
        let mut iter = points.into_iter();
        let first = Self::from_point(*iter.next()?);
        Some(iter.fold(first, |acc, p| acc + *p))
    }

    pub fn minima(&self) -> &Point<T, N> {
        &self.minima
    }

    pub fn maxima(&self) -> &Point<T, N> {
        &self.maxima
    }

    /// Length along axis `i`.
    pub fn extent(&self, i: usize) -> T {
        self.maxima[i] - self.minima[i]
    }

    pub fn centroid(&self) -> Point<T, N> {
        self.minima.midpoint(&self.maxima)
    }

    /// Closed-interval containment on every axis.
    pub fn contains(&self, p: &Point<T, N>) -> bool {
        (0..N).all(|i| self.minima[i] <= p[i] && p[i] <= self.maxima[i])
    }

    /// Do the two closed boxes share at least one point?
    pub fn intersects(&self, other: &Aabb<T, N>) -> bool {
        (0..N).all(|i| self.minima[i] <= other.maxima[i] && other.minima[i] <= self.maxima[i])
    }

    pub fn union(&self, other: &Aabb<T, N>) -> Aabb<T, N> {
        Aabb {
            minima: self.minima.min(&other.minima),
            maxima: self.maxima.max(&other.maxima),
        }
    }

    pub fn is_approx(&self, other: &Aabb<T, N>) -> bool {
        self.minima.is_approx(&other.minima) && self.maxima.is_approx(&other.maxima)
    }
}

impl<T: Scalar> Aabb<T, 2> {
    pub fn x_min(&self) -> T {
        self.minima[0]
    }

    pub fn x_max(&self) -> T {
        self.maxima[0]
    }

    pub fn y_min(&self) -> T {
        self.minima[1]
    }

    pub fn y_max(&self) -> T {
        self.maxima[1]
    }

    pub fn width(&self) -> T {
        self.extent(0)
    }

    pub fn height(&self) -> T {
        self.extent(1)
    }
}

impl<T: Scalar, const N: usize> AddAssign<Point<T, N>> for Aabb<T, N> {
    fn add_assign(&mut self, p: Point<T, N>) {
        self.minima = self.minima.min(&p);
        self.maxima = self.maxima.max(&p);
    }
}

impl<T: Scalar, const N: usize> AddAssign for Aabb<T, N> {
    fn add_assign(&mut self, other: Aabb<T, N>) {
        *self = self.union(&other);
    }
}

impl<T: Scalar, const N: usize> Add<Point<T, N>> for Aabb<T, N> {
    type Output = Aabb<T, N>;
    fn add(mut self, p: Point<T, N>) -> Self::Output {
        self += p;
        self
    }
}

impl<T: Scalar, const N: usize> Add for Aabb<T, N> {
    type Output = Aabb<T, N>;
    fn add(self, other: Aabb<T, N>) -> Self::Output {
        self.union(&other)
    }
}

pub type Aabb2<T> = Aabb<T, 2>;
pub type Aabb3<T> = Aabb<T, 3>;
