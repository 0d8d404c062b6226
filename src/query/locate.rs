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
    geometry::Point2,
    mesh::BinnedMesh,
    numeric::{MeshIndex, Scalar},
};

/// Id of a face containing `p`, or `None` if no face does.
///
/// Only the faces listed in `p`'s grid cell are tested, in ascending id
/// order; the first match wins. A point on an edge shared by two faces
/// therefore always resolves to the lower id. Points outside the grid box
/// return `None` without touching the mesh.
pub fn face_containing<T: Scalar, I: MeshIndex>(
    binned: &BinnedMesh<'_, T, I>,
    p: &Point2<T>,
) -> Option<usize> {
    let mesh = binned.mesh();
    binned
        .candidates_at(p)
        .iter()
        .map(|f| f.to_index())
        .find(|&f| mesh.face(f).contains(p))
}
