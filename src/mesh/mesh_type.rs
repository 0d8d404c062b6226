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
    geometry::Order,
    mesh::face_vertex_mesh::FaceVertexMesh,
    numeric::{MeshIndex, Scalar},
};

/// Kind of 2-D mesh, by face shape and edge order.
///
/// The integer codes are the ones used by mesh-exchange importers; 0 is
/// reserved for "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MeshType {
    Tri = 1,
    Quad = 2,
    TriQuad = 3,
    QuadraticTri = 4,
    QuadraticQuad = 5,
    QuadraticTriQuad = 6,
}

impl MeshType {
    pub fn from_int(code: i32) -> Option<Self> {
        match code {
            1 => Some(MeshType::Tri),
            2 => Some(MeshType::Quad),
            3 => Some(MeshType::TriQuad),
            4 => Some(MeshType::QuadraticTri),
            5 => Some(MeshType::QuadraticQuad),
            6 => Some(MeshType::QuadraticTriQuad),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MeshType::Tri => "TRI",
            MeshType::Quad => "QUAD",
            MeshType::TriQuad => "TRI_QUAD",
            MeshType::QuadraticTri => "QUADRATIC_TRI",
            MeshType::QuadraticQuad => "QUADRATIC_QUAD",
            MeshType::QuadraticTriQuad => "QUADRATIC_TRI_QUAD",
        }
    }

    pub fn order(self) -> Order {
        match self {
            MeshType::Tri | MeshType::Quad | MeshType::TriQuad => Order::Linear,
            _ => Order::Quadratic,
        }
    }

    /// Classify a mesh from its face corner counts. Meshes with faces other
    /// than triangles and quads have no type.
    pub fn of<T: Scalar, I: MeshIndex>(mesh: &FaceVertexMesh<T, I>) -> Option<Self> {
        let (mut tris, mut quads) = (false, false);
        for f in 0..mesh.num_faces() {
            match mesh.order().corners_per_face(mesh.face_vertex_ids(f).len()) {
                3 => tris = true,
                4 => quads = true,
                _ => return None,
            }
        }
        let linear = match (tris, quads) {
            (true, false) => MeshType::Tri,
            (false, true) => MeshType::Quad,
            (true, true) => MeshType::TriQuad,
            (false, false) => return None,
        };
        Some(match (mesh.order(), linear) {
            (Order::Linear, t) => t,
            (Order::Quadratic, MeshType::Tri) => MeshType::QuadraticTri,
            (Order::Quadratic, MeshType::Quad) => MeshType::QuadraticQuad,
            (Order::Quadratic, _) => MeshType::QuadraticTriQuad,
        })
    }
}

impl std::fmt::Display for MeshType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
