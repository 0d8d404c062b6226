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

use num_traits::Float;

use std::fmt::Debug;

/// Floating-point capability used by every geometric routine.
///
/// Each implementation is a backend: it fixes the tolerances that replace
/// exact `==` comparisons against 0, 1 and between distances.
pub trait Scalar: Float + Debug + Default + Send + Sync + 'static {
    /// Distance tolerance: on-edge tests, distance deduplication, parallel rays.
    fn tolerance() -> Self;

    /// Tolerance on curve and segment parameters (`r`, `s` in `[0, 1]`).
    fn parametric_tolerance() -> Self;

    /// Distance reported for "no hit" by routines that need a number.
    fn infinite_distance() -> Self;

    fn tolerance_squared() -> Self {
        let tol = Self::tolerance();
        tol * tol
    }

    fn from_f64(value: f64) -> Self;

    fn from_usize(value: usize) -> Self;

    #[inline(always)]
    fn half() -> Self {
        Self::from_f64(0.5)
    }

    #[inline(always)]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns -1, 0, or +1, treating anything within `tolerance()` as zero.
    fn sign(&self) -> i8 {
        if *self > Self::tolerance() {
            1
        } else if *self < -Self::tolerance() {
            -1
        } else {
            0
        }
    }

    fn approx_eq(&self, other: &Self) -> bool {
        (*self - *other).abs() <= Self::tolerance()
    }
}

impl Scalar for f32 {
    #[inline(always)]
    fn tolerance() -> Self {
        1e-5
    }

    #[inline(always)]
    fn parametric_tolerance() -> Self {
        1e-5
    }

    #[inline(always)]
    fn infinite_distance() -> Self {
        1e10
    }

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn tolerance() -> Self {
        1e-10
    }

    #[inline(always)]
    fn parametric_tolerance() -> Self {
        1e-10
    }

    #[inline(always)]
    fn infinite_distance() -> Self {
        1e100
    }

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}

/// Widen `x` by one representable step towards +inf.
#[inline(always)]
pub fn next_up<T: Scalar>(x: T) -> T {
    if x.is_nan() || x == T::infinity() {
        return x;
    }
    if x == T::zero() {
        return T::min_positive_value();
    }
    let step = x.abs() * T::epsilon();
    let y = x + step;
    if y > x { y } else { x + T::min_positive_value() }
}
