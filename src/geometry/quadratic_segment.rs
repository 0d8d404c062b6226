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
    geometry::{aabb::Aabb, point::Point, point::Point2, ray::Ray2},
    kernel::is_left_of,
    numeric::scalar::Scalar,
};

/// Curved mesh edge through `p0` (r = 0), `p2` (r = 1/2) and `p1` (r = 1):
///
/// `p(r) = p0 (1 - r)(1 - 2r) + p1 r (2r - 1) + p2 4r (1 - r)`
///
/// This is the three-node edge of 6-node triangles and 8-node quads; `p2` is
/// the mid-edge node and lies on the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticSegment<T: Scalar, const N: usize> {
    pub p0: Point<T, N>,
    pub p1: Point<T, N>,
    pub p2: Point<T, N>,
}

impl<T: Scalar, const N: usize> QuadraticSegment<T, N> {
    pub fn new(p0: Point<T, N>, p1: Point<T, N>, p2: Point<T, N>) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn point_at(&self, r: T) -> Point<T, N> {
        let two = T::two();
        let w0 = (T::one() - r) * (T::one() - two * r);
        let w1 = r * (two * r - T::one());
        let w2 = T::from_f64(4.0) * r * (T::one() - r);
        self.p0 * w0 + self.p1 * w1 + self.p2 * w2
    }

    /// Power-basis coefficients `(a, b, c)` with `p(r) = a r^2 + b r + c`.
    pub fn coefficients(&self) -> (Point<T, N>, Point<T, N>, Point<T, N>) {
        let two = T::two();
        let four = T::from_f64(4.0);
        let a = (self.p0 + self.p1) * two - self.p2 * four;
        let b = self.p2 * four - self.p0 * T::from_f64(3.0) - self.p1;
        (a, b, self.p0)
    }

    pub fn derivative(&self, r: T) -> Point<T, N> {
        let (a, b, _) = self.coefficients();
        b + a * (T::two() * r)
    }

    /// Control point of the equivalent quadratic Bezier curve.
    pub fn bezier_control(&self) -> Point<T, N> {
        self.p2 * T::two() - (self.p0 + self.p1) * T::half()
    }

    /// Tight box: endpoints plus any interior extremum on each axis.
    pub fn bounding_box(&self) -> Aabb<T, N> {
        let mut minima = self.p0.min(&self.p1);
        let mut maxima = self.p0.max(&self.p1);
        let (a, b, c) = self.coefficients();
        for i in 0..N {
            if a[i] == T::zero() {
                continue;
            }
            let r = -b[i] / (T::two() * a[i]);
            if r > T::zero() && r < T::one() {
                let v = (a[i] * r + b[i]) * r + c[i];
                minima[i] = minima[i].min(v);
                maxima[i] = maxima[i].max(v);
            }
        }
        Aabb::new(minima, maxima)
    }
}

impl<T: Scalar> QuadraticSegment<T, 2> {
    /// Mid-edge node within tolerance of the chord.
    pub fn is_straight(&self) -> bool {
        let chord = self.p1 - self.p0;
        chord.cross(&(self.p2 - self.p0)).abs() <= T::tolerance() * chord.norm()
    }

    /// Signed area enclosed between the curve and its chord, positive when the
    /// curve bulges to the right of `p0 -> p1`.
    pub fn bulge_area(&self) -> T {
        let c = self.bezier_control();
        T::from_f64(1.0 / 3.0) * (c - self.p0).cross(&(self.p1 - self.p0))
    }

    /// Is `p` on the left of (or on) the curve?
    ///
    /// Works in the chord frame `u = (p - p0) . chord / |chord|^2`,
    /// `w = chord x (p - p0) / |chord|^2`, where the curve spans `u` in
    /// `[0, 1]`. Past either end the chord line decides.
    pub fn is_left(&self, p: &Point2<T>) -> bool {
        if self.is_straight() {
            return is_left_of(&self.p0, &self.p1, p);
        }
        let chord = self.p1 - self.p0;
        let l2 = chord.squared_norm();
        if l2 <= T::tolerance_squared() {
            return true;
        }
        let frame = |q: &Point2<T>| {
            let v = *q - self.p0;
            (v.dot(&chord) / l2, chord.cross(&v) / l2)
        };
        let wtol = T::tolerance() / l2.sqrt();
        let (cu, cw) = frame(&self.bezier_control());
        if cu < T::zero() || cu > T::one() {
            return self.is_left_by_nearest_point(p);
        }
        let (pu, pw) = frame(p);
        if pu < T::zero() || pu > T::one() {
            return pw >= -wtol;
        }
        // u(r) = (1 - 2cu) r^2 + 2cu r is monotone here; invert it.
        let a = T::one() - T::two() * cu;
        let b = T::two() * cu;
        let disc = (b * b + T::from_f64(4.0) * a * pu).max(T::zero());
        let denom = b + disc.sqrt();
        let r = if denom > T::epsilon() {
            (T::two() * pu / denom).clamp(T::zero(), T::one())
        } else {
            T::zero()
        };
        let wc = T::two() * r * (T::one() - r) * cw;
        pw >= wc - wtol
    }

    fn is_left_by_nearest_point(&self, p: &Point2<T>) -> bool {
        let r = self.nearest_parameter(p);
        let q = self.point_at(r);
        let tangent = self.derivative(r);
        let len = tangent.norm();
        if len <= T::tolerance() {
            return is_left_of(&self.p0, &self.p1, p);
        }
        tangent.cross(&(*p - q)) >= -T::tolerance() * len
    }

    /// Parameter of the closest point on the curve to `p`.
    pub fn nearest_parameter(&self, p: &Point2<T>) -> T {
        let (a, b, c) = self.coefficients();
        let dist2 = |r: T| self.point_at(r).squared_distance_to(p);
        let mut best = if dist2(T::zero()) <= dist2(T::one()) {
            T::zero()
        } else {
            T::one()
        };
        let mut best_d = dist2(best);
        // Newton on f(r) = (p(r) - p) . p'(r) from a few seeds.
        for seed in [0.25, 0.5, 0.75] {
            let mut r = T::from_f64(seed);
            for _ in 0..16 {
                let q = (a * r + b) * r + c - *p;
                let dq = b + a * (T::two() * r);
                let f = q.dot(&dq);
                let df = dq.dot(&dq) + q.dot(&a) * T::two();
                if df.abs() <= T::epsilon() {
                    break;
                }
                let step = f / df;
                r = (r - step).clamp(T::zero(), T::one());
                if step.abs() <= T::parametric_tolerance() {
                    break;
                }
            }
            let d = dist2(r);
            if d < best_d {
                best = r;
                best_d = d;
            }
        }
        best
    }

    /// Distances along `ray` to its crossings with the curve, ascending.
    ///
    /// The curve can cross a line twice; missing hits are `None` and come
    /// last. Crossings behind the ray origin are dropped.
    pub fn intersect_ray(&self, ray: &Ray2<T>) -> [Option<T>; 2] {
        let (a, b, c) = self.coefficients();
        let d = ray.direction;
        // (p(r) - o) x d = 0 is a scalar quadratic in r.
        let qa = a.cross(&d);
        let qb = b.cross(&d);
        let qc = (c - ray.origin).cross(&d);

        let mut roots = [None, None];
        if qa.abs() <= T::tolerance() {
            if qb.abs() > T::tolerance() {
                roots[0] = Some(-qc / qb);
            }
        } else {
            let disc = qb * qb - T::from_f64(4.0) * qa * qc;
            if disc >= T::zero() {
                let sq = disc.sqrt();
                let q = -T::half() * (qb + if qb < T::zero() { -sq } else { sq });
                roots[0] = Some(q / qa);
                if q != T::zero() {
                    roots[1] = Some(qc / q);
                }
            }
        }

        let ptol = T::parametric_tolerance();
        let mut hits = roots.map(|root| {
            let r = root.filter(|r| r.is_finite() && *r >= -ptol && *r <= T::one() + ptol)?;
            let t = (self.point_at(r.clamp(T::zero(), T::one())) - ray.origin).dot(&d);
            (t >= -T::tolerance()).then(|| t.max(T::zero()))
        });
        match hits {
            [None, Some(_)] => hits.swap(0, 1),
            [Some(t0), Some(t1)] if t1 < t0 => hits.swap(0, 1),
            _ => {}
        }
        hits
    }
}

pub type QuadraticSegment2<T> = QuadraticSegment<T, 2>;
