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

use crate::{geometry::point::Point, numeric::scalar::Scalar};

/// A half-line `origin + t * direction`, `t >= 0`.
///
/// `direction` must have unit length, so `t` is a distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray<T: Scalar, const N: usize> {
    pub origin: Point<T, N>,
    pub direction: Point<T, N>,
}

impl<T: Scalar, const N: usize> Ray<T, N> {
    pub fn new(origin: Point<T, N>, direction: Point<T, N>) -> Self {
        debug_assert!(
            (direction.norm() - T::one()).abs() <= T::from_f64(1e-4),
            "ray direction must be a unit vector"
        );
        Ray { origin, direction }
    }

    pub fn point_at(&self, t: T) -> Point<T, N> {
        self.origin + self.direction * t
    }
}

pub type Ray2<T> = Ray<T, 2>;
