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
    geometry::{aabb::Aabb, point::Point, ray::Ray2},
    kernel::is_left_of,
    numeric::scalar::Scalar,
};

/// Straight mesh edge `p(r) = p0 + r * (p1 - p0)`, `r` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<T: Scalar, const N: usize> {
    pub p0: Point<T, N>,
    pub p1: Point<T, N>,
}

impl<T: Scalar, const N: usize> LineSegment<T, N> {
    pub fn new(p0: Point<T, N>, p1: Point<T, N>) -> Self {
        Self { p0, p1 }
    }

    pub fn point_at(&self, r: T) -> Point<T, N> {
        self.p0 + (self.p1 - self.p0) * r
    }

    pub fn length(&self) -> T {
        self.p0.distance_to(&self.p1)
    }

    pub fn bounding_box(&self) -> Aabb<T, N> {
        Aabb::new(self.p0.min(&self.p1), self.p0.max(&self.p1))
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.p1, self.p0)
    }
}

impl<T: Scalar> LineSegment<T, 2> {
    /// Is `p` on the left of (or on) the segment's supporting line?
    pub fn is_left(&self, p: &Point<T, 2>) -> bool {
        is_left_of(&self.p0, &self.p1, p)
    }

    /// Distance along `ray` to the crossing with this segment.
    ///
    /// A ray parallel to the segment never hits, and neither does a crossing
    /// behind the ray origin.
    pub fn intersect_ray(&self, ray: &Ray2<T>) -> Option<T> {
        let v = self.p1 - self.p0;
        let u = ray.origin - self.p0;

        let z = v.cross(&ray.direction);
        if z.abs() <= T::tolerance() * v.norm() {
            return None;
        }

        let s = u.cross(&ray.direction) / z;
        let ptol = T::parametric_tolerance();
        if s < -ptol || s > T::one() + ptol {
            return None;
        }

        let t = u.cross(&v) / z;
        if t < -T::tolerance() {
            return None;
        }
        Some(t.max(T::zero()))
    }
}

pub type LineSegment2<T> = LineSegment<T, 2>;
