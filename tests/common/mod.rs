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

#![allow(dead_code)]

use facegrid::prelude::*;

/// Build a point from `f64` coordinates in any scalar type.
pub fn pt<T: Scalar>(x: f64, y: f64) -> Point2<T> {
    Point2::new(T::from_f64(x), T::from_f64(y))
}

fn points<T: Scalar>(coords: &[(f64, f64)]) -> Vec<Point2<T>> {
    coords.iter().map(|&(x, y)| pt(x, y)).collect()
}

/// Unit square split along its diagonal into two triangles.
///
/// ```text
/// 3---2
/// | / |
/// 0---1
/// ```
pub fn tri_mesh<T: Scalar>() -> FaceVertexMesh<T, i32> {
    FaceVertexMesh::new(
        Order::Linear,
        points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
        FaceLayout::Uniform { stride: 3 },
        vec![0, 1, 2, 2, 3, 0],
    )
    .unwrap()
}

/// Two unit squares side by side.
pub fn quad_mesh<T: Scalar>() -> FaceVertexMesh<T, i32> {
    FaceVertexMesh::new(
        Order::Linear,
        points(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (2.0, 0.0),
            (2.0, 1.0),
        ]),
        FaceLayout::Uniform { stride: 4 },
        vec![0, 1, 2, 3, 1, 4, 5, 2],
    )
    .unwrap()
}

/// A unit square and a triangle sharing its right edge.
pub fn tri_quad_mesh<T: Scalar>() -> FaceVertexMesh<T, i32> {
    FaceVertexMesh::new(
        Order::Linear,
        points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (2.0, 0.0)]),
        FaceLayout::Variable {
            offsets: vec![0, 4, 7],
        },
        vec![0, 1, 2, 3, 1, 4, 2],
    )
    .unwrap()
}

/// Two 6-node triangles sharing an edge bowed out to (0.7, 0.5).
pub fn tri6_mesh<T: Scalar>() -> FaceVertexMesh<T, i32> {
    FaceVertexMesh::new(
        Order::Quadratic,
        points(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (0.5, 0.0),
            (0.7, 0.5),
            (0.0, 0.5),
            (1.0, 1.0),
            (1.0, 0.5),
            (0.5, 1.0),
        ]),
        FaceLayout::Uniform { stride: 6 },
        vec![0, 1, 2, 3, 4, 5, 1, 6, 2, 7, 8, 4],
    )
    .unwrap()
}

/// Two 8-node quads sharing an edge bowed out to (1.1, 0.6).
pub fn quad8_mesh<T: Scalar>() -> FaceVertexMesh<T, i32> {
    FaceVertexMesh::new(
        Order::Quadratic,
        points(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (0.5, 0.0),
            (1.1, 0.6),
            (0.5, 1.0),
            (0.0, 0.5),
            (1.5, 0.0),
            (2.0, 0.5),
            (1.5, 1.0),
        ]),
        FaceLayout::Uniform { stride: 8 },
        vec![0, 1, 2, 3, 6, 7, 8, 9, 1, 4, 5, 2, 10, 11, 12, 7],
    )
    .unwrap()
}

/// An 8-node quad and a 6-node triangle sharing an edge bowed in to (0.7, 0.6).
pub fn tri6_quad8_mesh<T: Scalar>() -> FaceVertexMesh<T, i32> {
    FaceVertexMesh::new(
        Order::Quadratic,
        points(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (2.0, 0.0),
            (0.5, 0.0),
            (0.7, 0.6),
            (0.5, 1.0),
            (0.0, 0.5),
            (1.5, 0.0),
            (1.5, 0.5),
        ]),
        FaceLayout::Variable {
            offsets: vec![0, 8, 14],
        },
        vec![0, 1, 2, 3, 5, 6, 7, 8, 1, 4, 2, 9, 10, 6],
    )
    .unwrap()
}

/// Triangulated `n x n` lattice over the unit square with interior nodes
/// moved by up to `0.15 / n` on each axis. Every triangle stays
/// counter-clockwise.
pub fn jittered_tri_mesh(n: usize, rng: &mut impl rand::Rng) -> FaceVertexMesh<f64, u32> {
    lattice(n, |interior| {
        if interior {
            rng.random_range(-0.15..0.15)
        } else {
            0.0
        }
    })
}

/// The same lattice with every node on its grid point, so nodes sit on the
/// corners of a matching `n x n` grid.
pub fn tri_lattice_mesh(n: usize) -> FaceVertexMesh<f64, u32> {
    lattice(n, |_| 0.0)
}

fn lattice(n: usize, mut jitter: impl FnMut(bool) -> f64) -> FaceVertexMesh<f64, u32> {
    let h = 1.0 / n as f64;
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    for j in 0..=n {
        for i in 0..=n {
            let dx = jitter(i > 0 && i < n) * h;
            let dy = jitter(j > 0 && j < n) * h;
            vertices.push(Point2::new(i as f64 * h + dx, j as f64 * h + dy));
        }
    }
    let id = |i: usize, j: usize| (j * (n + 1) + i) as u32;
    let mut fv = Vec::with_capacity(6 * n * n);
    for j in 0..n {
        for i in 0..n {
            fv.extend([id(i, j), id(i + 1, j), id(i + 1, j + 1)]);
            fv.extend([id(i + 1, j + 1), id(i, j + 1), id(i, j)]);
        }
    }
    FaceVertexMesh::new(Order::Linear, vertices, FaceLayout::Uniform { stride: 3 }, fv).unwrap()
}
