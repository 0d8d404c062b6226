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

use std::{
    array::from_fn,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign},
};

use crate::numeric::scalar::Scalar;

/// A point (or displacement) in `N` dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Point<T, N> {
        Point {
            coords: [T::zero(); N],
        }
    }
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn from_coords(coords: [T; N]) -> Self {
        Point { coords }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn splat(value: T) -> Self {
        Point { coords: [value; N] }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }

    pub fn dot(&self, other: &Self) -> T {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
    }

    pub fn squared_norm(&self) -> T {
        self.dot(self)
    }

    pub fn norm(&self) -> T {
        self.squared_norm().sqrt()
    }

    pub fn normalized(&self) -> Self {
        *self / self.norm()
    }

    pub fn squared_distance_to(&self, other: &Self) -> T {
        (*self - *other).squared_norm()
    }

    pub fn distance_to(&self, other: &Self) -> T {
        self.squared_distance_to(other).sqrt()
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            coords: from_fn(|i| (self.coords[i] + other.coords[i]) * T::half()),
        }
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self {
            coords: from_fn(|i| self.coords[i].min(other.coords[i])),
        }
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self {
            coords: from_fn(|i| self.coords[i].max(other.coords[i])),
        }
    }

    pub fn is_approx(&self, other: &Self) -> bool {
        self.squared_distance_to(other) <= T::tolerance_squared()
    }

    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }
}

impl<T: Scalar> Point<T, 2> {
    pub fn new(x: T, y: T) -> Self {
        Point { coords: [x, y] }
    }

    #[inline(always)]
    pub fn x(&self) -> T {
        self.coords[0]
    }

    #[inline(always)]
    pub fn y(&self) -> T {
        self.coords[1]
    }

    /// z-component of the 3D cross product of `self` and `other`.
    #[inline(always)]
    pub fn cross(&self, other: &Self) -> T {
        self.coords[0] * other.coords[1] - self.coords[1] * other.coords[0]
    }
}

impl<T: Scalar> Point<T, 3> {
    pub fn new3(x: T, y: T, z: T) -> Self {
        Point { coords: [x, y, z] }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> Add for Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: Point<T, N>) -> Self::Output {
        Point {
            coords: from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> AddAssign for Point<T, N> {
    fn add_assign(&mut self, rhs: Point<T, N>) {
        for i in 0..N {
            self.coords[i] = self.coords[i] + rhs.coords[i];
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Point<T, N> {
    type Output = Point<T, N>;
    fn sub(self, rhs: Point<T, N>) -> Self::Output {
        Point {
            coords: from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for Point<T, N> {
    fn sub_assign(&mut self, rhs: Point<T, N>) {
        for i in 0..N {
            self.coords[i] = self.coords[i] - rhs.coords[i];
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Point<T, N> {
    type Output = Point<T, N>;
    fn mul(self, rhs: T) -> Self::Output {
        Point {
            coords: self.coords.map(|c| c * rhs),
        }
    }
}

impl<T: Scalar, const N: usize> Div<T> for Point<T, N> {
    type Output = Point<T, N>;
    fn div(self, rhs: T) -> Self::Output {
        Point {
            coords: self.coords.map(|c| c / rhs),
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Point<T, N> {
    type Output = Point<T, N>;
    fn neg(self) -> Self::Output {
        Point {
            coords: self.coords.map(|c| -c),
        }
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for [T; N] {
    fn from(p: Point<T, N>) -> Self {
        p.coords
    }
}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;
