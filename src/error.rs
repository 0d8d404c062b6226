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

//! Errors raised while building meshes, grids and partitions.
//!
//! Queries never fail: a point outside the mesh is `None` and a ray that
//! misses is an empty hit list.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// The mesh has no faces or no vertices.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references a vertex that does not exist.
    #[error("face {face} references invalid vertex index {vertex} (mesh has {num_vertices} vertices)")]
    InvalidVertexIndex {
        face: usize,
        vertex: i64,
        num_vertices: usize,
    },

    /// Face offsets do not start at 0, decrease, or do not end at `fv.len()`.
    #[error("invalid face offsets: {0}")]
    InvalidOffsets(String),

    /// A face has a node count its order cannot describe.
    #[error("face {face} has {nodes} nodes, which is not a valid face size")]
    InvalidFaceSize { face: usize, nodes: usize },

    /// Vertex-to-face adjacency is not the transpose of face-to-vertex.
    #[error("vertex-to-face adjacency is inconsistent: {0}")]
    InconsistentAdjacency(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
