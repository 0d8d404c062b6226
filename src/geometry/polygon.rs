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

use smallvec::SmallVec;

use crate::{
    geometry::{
        aabb::Aabb2, point::Point2, quadratic_segment::QuadraticSegment2, segment::LineSegment2,
    },
    kernel::orient2d,
    numeric::scalar::Scalar,
};

/// Polynomial order of a face's edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Straight edges, one node per corner.
    Linear,
    /// Curved edges, corners followed by one mid-edge node per edge.
    Quadratic,
}

impl Order {
    /// Nodes a face with `corners` corners carries at this order.
    pub fn nodes_per_face(self, corners: usize) -> usize {
        match self {
            Order::Linear => corners,
            Order::Quadratic => 2 * corners,
        }
    }

    /// Inverse of [`Order::nodes_per_face`].
    pub fn corners_per_face(self, nodes: usize) -> usize {
        match self {
            Order::Linear => nodes,
            Order::Quadratic => nodes / 2,
        }
    }
}

/// Geometry of a single mesh face, gathered from the mesh's vertex array.
///
/// Corners come first in counter-clockwise order. For quadratic faces the
/// mid-edge nodes follow, node `n + i` sitting on the edge from corner `i` to
/// corner `i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T: Scalar> {
    order: Order,
    vertices: SmallVec<[Point2<T>; 8]>,
}

impl<T: Scalar> Polygon<T> {
    pub fn new<I: IntoIterator<Item = Point2<T>>>(order: Order, vertices: I) -> Self {
        let vertices: SmallVec<[Point2<T>; 8]> = vertices.into_iter().collect();
        debug_assert!(
            order == Order::Linear || vertices.len() % 2 == 0,
            "quadratic face needs one mid-edge node per corner"
        );
        Self { order, vertices }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn vertices(&self) -> &[Point2<T>] {
        &self.vertices
    }

    pub fn num_edges(&self) -> usize {
        self.order.corners_per_face(self.vertices.len())
    }

    pub fn corners(&self) -> &[Point2<T>] {
        &self.vertices[..self.num_edges()]
    }

    /// Chord of edge `i`, from corner `i` to corner `i + 1`.
    pub fn linear_edge(&self, i: usize) -> LineSegment2<T> {
        let n = self.num_edges();
        LineSegment2::new(self.vertices[i], self.vertices[(i + 1) % n])
    }

    /// Edge `i` as a curve; straight edges get their chord midpoint as the
    /// mid-edge node.
    pub fn quadratic_edge(&self, i: usize) -> QuadraticSegment2<T> {
        let n = self.num_edges();
        let p0 = self.vertices[i];
        let p1 = self.vertices[(i + 1) % n];
        let p2 = match self.order {
            Order::Linear => p0.midpoint(&p1),
            Order::Quadratic => self.vertices[n + i],
        };
        QuadraticSegment2::new(p0, p1, p2)
    }

    /// Box of the whole face, curved edges included.
    pub fn bounding_box(&self) -> Aabb2<T> {
        let mut bb = Aabb2::from_point(self.vertices[0]);
        match self.order {
            Order::Linear => {
                for v in &self.vertices[1..] {
                    bb += *v;
                }
            }
            Order::Quadratic => {
                for i in 0..self.num_edges() {
                    bb += self.quadratic_edge(i).bounding_box();
                }
            }
        }
        bb
    }

    /// Point-in-face test for a counter-clockwise face. Points on the
    /// boundary (within tolerance) are inside.
    pub fn contains(&self, p: &Point2<T>) -> bool {
        let n = self.num_edges();
        if n < 3 {
            return false;
        }
        match self.order {
            Order::Linear => (0..n).all(|i| self.linear_edge(i).is_left(p)),
            Order::Quadratic => {
                let bb = self.bounding_box();
                let tol = T::tolerance();
                if p.x() < bb.x_min() - tol
                    || p.x() > bb.x_max() + tol
                    || p.y() < bb.y_min() - tol
                    || p.y() > bb.y_max() + tol
                {
                    return false;
                }
                (0..n).all(|i| self.quadratic_edge(i).is_left(p))
            }
        }
    }

    /// The face with every curved edge replaced by its chord.
    pub fn linear_polygon(&self) -> Polygon<T> {
        Polygon::new(Order::Linear, self.corners().iter().copied())
    }

    /// Signed area, positive for counter-clockwise faces.
    pub fn area(&self) -> T {
        let corners = self.corners();
        let n = corners.len();
        if n < 3 {
            return T::zero();
        }
        let origin = corners[0];
        let mut twice = T::zero();
        for i in 1..n - 1 {
            twice = twice + orient2d(&origin, &corners[i], &corners[i + 1]);
        }
        let mut area = twice * T::half();
        if self.order == Order::Quadratic {
            for i in 0..n {
                area = area + self.quadratic_edge(i).bulge_area();
            }
        }
        area
    }

    /// Area centroid of the corner polygon; the vertex average if that
    /// polygon is degenerate.
    pub fn centroid(&self) -> Point2<T> {
        let corners = self.corners();
        let n = corners.len();
        let origin = corners[0];
        let mut acc = Point2::zero();
        let mut twice = T::zero();
        for i in 1..n.saturating_sub(1) {
            let a = orient2d(&origin, &corners[i], &corners[i + 1]);
            acc += (origin + corners[i] + corners[i + 1]) * a;
            twice = twice + a;
        }
        if twice.abs() <= T::tolerance_squared() {
            let sum = corners.iter().fold(Point2::zero(), |s, v| s + *v);
            return sum / T::from_usize(n);
        }
        acc / (T::from_f64(3.0) * twice)
    }

    pub fn is_ccw(&self) -> bool {
        self.area() > T::zero()
    }
}
