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

use std::cmp::Ordering;

use crate::{
    geometry::{Order, Polygon, Ray2},
    mesh::{BinnedMesh, FaceVertexMesh},
    numeric::{MeshIndex, Scalar},
};

/// Something a ray can be cast against: a set of faces whose edges it may
/// cross.
pub trait RayTarget<T: Scalar> {
    /// Ids of the faces `ray` may cross, each listed once.
    fn candidate_faces(&self, ray: &Ray2<T>) -> Vec<usize>;

    fn face_polygon(&self, f: usize) -> Polygon<T>;
}

impl<T: Scalar, I: MeshIndex> RayTarget<T> for FaceVertexMesh<T, I> {
    fn candidate_faces(&self, _ray: &Ray2<T>) -> Vec<usize> {
        (0..self.num_faces()).collect()
    }

    fn face_polygon(&self, f: usize) -> Polygon<T> {
        self.face(f)
    }
}

impl<T: Scalar, I: MeshIndex> RayTarget<T> for BinnedMesh<'_, T, I> {
    /// Faces listed in the cells the ray passes through.
    fn candidate_faces(&self, ray: &Ray2<T>) -> Vec<usize> {
        let grid = self.grid();
        let mut faces: Vec<usize> = grid
            .cells_crossed_by(ray)
            .into_iter()
            .flat_map(|cell| self.candidates(grid.linear_index(cell)))
            .map(|f| f.to_index())
            .collect();
        faces.sort_unstable();
        faces.dedup();
        faces
    }

    fn face_polygon(&self, f: usize) -> Polygon<T> {
        self.mesh().face(f)
    }
}

/// Outcome of [`intersect_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    /// Distances written to the front of the output buffer.
    pub written: usize,
    /// Distinct crossings that exist.
    pub total: usize,
}

impl Fill {
    pub fn is_truncated(&self) -> bool {
        self.total > self.written
    }
}

fn push_face_hits<T: Scalar>(face: &Polygon<T>, ray: &Ray2<T>, hits: &mut Vec<T>) {
    for i in 0..face.num_edges() {
        match face.order() {
            Order::Linear => hits.extend(face.linear_edge(i).intersect_ray(ray)),
            Order::Quadratic => {
                let edge = face.quadratic_edge(i);
                if edge.is_straight() {
                    hits.extend(face.linear_edge(i).intersect_ray(ray));
                } else {
                    hits.extend(edge.intersect_ray(ray).into_iter().flatten());
                }
            }
        }
    }
}

/// Distances along `ray` at which it crosses an edge of `target`, ascending.
///
/// Crossings closer together than the scalar tolerance are reported once,
/// so a ray through a vertex shared by several edges yields one distance.
/// A miss is an empty list.
pub fn intersect<T: Scalar, R: RayTarget<T> + ?Sized>(ray: &Ray2<T>, target: &R) -> Vec<T> {
    let mut hits = Vec::new();
    for f in target.candidate_faces(ray) {
        push_face_hits(&target.face_polygon(f), ray, &mut hits);
    }
    hits.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    hits.dedup_by(|later, kept| (*later - *kept).abs() <= T::tolerance());
    hits
}

/// [`intersect`] into a caller buffer.
///
/// Writes the nearest `out.len()` distances at most and never past the end
/// of `out`; the returned [`Fill`] tells whether crossings were left out.
pub fn intersect_into<T: Scalar, R: RayTarget<T> + ?Sized>(
    ray: &Ray2<T>,
    target: &R,
    out: &mut [T],
) -> Fill {
    let hits = intersect(ray, target);
    let written = hits.len().min(out.len());
    out[..written].copy_from_slice(&hits[..written]);
    Fill {
        written,
        total: hits.len(),
    }
}
