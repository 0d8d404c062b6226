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

use std::ops::Range;

use smallvec::SmallVec;

use crate::{
    error::{MeshError, Result},
    geometry::{Aabb2, Order, Point2, Polygon},
    numeric::{MeshIndex, Scalar},
};

/// How face node lists are laid out in the flat `fv` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceLayout<I: MeshIndex> {
    /// Every face has `stride` nodes; face `f` is `fv[f * stride..(f + 1) * stride]`.
    Uniform { stride: usize },
    /// Face `f` is `fv[offsets[f]..offsets[f + 1]]`; `offsets` has one entry
    /// more than there are faces.
    Variable { offsets: Vec<I> },
}

impl<I: MeshIndex> FaceLayout<I> {
    pub fn offsets(&self) -> Option<&[I]> {
        match self {
            FaceLayout::Uniform { .. } => None,
            FaceLayout::Variable { offsets } => Some(offsets),
        }
    }
}

/// Face-vertex mesh: vertex coordinates, face-to-vertex connectivity and its
/// transpose.
///
/// For a two-triangle unit square
///
/// ```text
/// 3---2
/// | / |
/// 0---1
/// ```
///
/// `fv = [0, 1, 2, 2, 3, 0]` with a uniform stride of 3, and
/// `vf_offsets = [0, 2, 3, 5, 6]`, `vf = [0, 1, 0, 0, 1, 1]`: vertex `v`
/// belongs to faces `vf[vf_offsets[v]..vf_offsets[v + 1]]`, ascending.
///
/// The mesh is immutable once built.
#[derive(Debug, Clone)]
pub struct FaceVertexMesh<T: Scalar, I: MeshIndex> {
    order: Order,
    vertices: Vec<Point2<T>>,
    layout: FaceLayout<I>,
    fv: Vec<I>,
    vf_offsets: Vec<I>,
    vf: Vec<I>,
}

impl<T: Scalar, I: MeshIndex> FaceVertexMesh<T, I> {
    /// Build a mesh from imported nodes and connectivity, computing the
    /// vertex-to-face adjacency.
    pub fn new(
        order: Order,
        vertices: Vec<Point2<T>>,
        layout: FaceLayout<I>,
        fv: Vec<I>,
    ) -> Result<Self> {
        check_faces(order, vertices.len(), &layout, &fv)?;
        let (vf_offsets, vf) = transpose(vertices.len(), &layout, &fv);
        let mesh = Self {
            order,
            vertices,
            layout,
            fv,
            vf_offsets,
            vf,
        };
        log::debug!(
            "built {:?} face-vertex mesh: {} vertices, {} faces",
            mesh.order,
            mesh.num_vertices(),
            mesh.num_faces()
        );
        Ok(mesh)
    }

    /// Assemble a mesh from arrays that already satisfy every invariant.
    ///
    /// Only checked in debug builds.
    pub fn from_raw_parts(
        order: Order,
        vertices: Vec<Point2<T>>,
        layout: FaceLayout<I>,
        fv: Vec<I>,
        vf_offsets: Vec<I>,
        vf: Vec<I>,
    ) -> Self {
        let mesh = Self {
            order,
            vertices,
            layout,
            fv,
            vf_offsets,
            vf,
        };
        debug_assert_eq!(mesh.validate(), Ok(()));
        mesh
    }

    /// Check connectivity, offsets and that `vf` is the transpose of `fv`.
    pub fn validate(&self) -> Result<()> {
        check_faces(self.order, self.vertices.len(), &self.layout, &self.fv)?;

        let nv = self.vertices.len();
        if self.vf_offsets.len() != nv + 1 {
            return Err(MeshError::InconsistentAdjacency(format!(
                "vf_offsets has {} entries, expected {}",
                self.vf_offsets.len(),
                nv + 1
            )));
        }
        let (vf_offsets, vf) = transpose(nv, &self.layout, &self.fv);
        if let Some(v) = (0..nv).find(|&v| {
            let range = |off: &[I]| off[v].to_index()..off[v + 1].to_index();
            self.vf_offsets[v] > self.vf_offsets[v + 1]
                || self.vf_offsets[v + 1].to_index() > self.vf.len()
                || self.vf[range(self.vf_offsets.as_slice())] != vf[range(vf_offsets.as_slice())]
        }) {
            return Err(MeshError::InconsistentAdjacency(format!(
                "faces listed for vertex {v} do not match the faces using it"
            )));
        }
        if self.vf_offsets[0] != I::zero() || self.vf.len() != vf.len() {
            return Err(MeshError::InconsistentAdjacency(format!(
                "vf has {} entries, connectivity implies {}",
                self.vf.len(),
                vf.len()
            )));
        }
        Ok(())
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn layout(&self) -> &FaceLayout<I> {
        &self.layout
    }

    pub fn vertices(&self) -> &[Point2<T>] {
        &self.vertices
    }

    pub fn fv(&self) -> &[I] {
        &self.fv
    }

    pub fn vf(&self) -> &[I] {
        &self.vf
    }

    pub fn vf_offsets(&self) -> &[I] {
        &self.vf_offsets
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_faces(&self) -> usize {
        num_faces(&self.layout, self.fv.len())
    }

    fn face_range(&self, f: usize) -> Range<usize> {
        face_range(&self.layout, f)
    }

    /// Node ids of face `f`: corners first, then mid-edge nodes.
    pub fn face_vertex_ids(&self, f: usize) -> &[I] {
        &self.fv[self.face_range(f)]
    }

    pub fn face(&self, f: usize) -> Polygon<T> {
        Polygon::new(
            self.order,
            self.face_vertex_ids(f)
                .iter()
                .map(|v| self.vertices[v.to_index()]),
        )
    }

    /// Faces using vertex `v`, ascending.
    pub fn faces_of_vertex(&self, v: usize) -> &[I] {
        &self.vf[self.vf_offsets[v].to_index()..self.vf_offsets[v + 1].to_index()]
    }

    /// Box covering every face, curved edges included.
    pub fn bounding_box(&self) -> Aabb2<T> {
        match self.order {
            Order::Linear => Aabb2::from_points(&self.vertices),
            Order::Quadratic => (0..self.num_faces())
                .map(|f| self.face(f).bounding_box())
                .reduce(|a, b| a + b),
        }
        .unwrap_or_else(|| Aabb2::from_point(Point2::zero()))
    }

    /// Unique corner-to-corner edges as `(low, high)` vertex pairs, sorted.
    pub fn edges(&self) -> Vec<(I, I)> {
        let mut edges = Vec::with_capacity(self.fv.len());
        for f in 0..self.num_faces() {
            let ids = self.face_vertex_ids(f);
            let n = self.order.corners_per_face(ids.len());
            for i in 0..n {
                let (a, b) = (ids[i], ids[(i + 1) % n]);
                edges.push(if a < b { (a, b) } else { (b, a) });
            }
        }
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// First face containing `p`, scanning every face. The binned query in
    /// [`crate::mesh::BinnedMesh`] gives the same answer in far less time.
    pub fn face_containing(&self, p: &Point2<T>) -> Option<usize> {
        (0..self.num_faces()).find(|&f| self.face(f).contains(p))
    }
}

fn num_faces<I: MeshIndex>(layout: &FaceLayout<I>, fv_len: usize) -> usize {
    match layout {
        FaceLayout::Uniform { stride } => fv_len / (*stride).max(1),
        FaceLayout::Variable { offsets } => offsets.len().saturating_sub(1),
    }
}

fn face_range<I: MeshIndex>(layout: &FaceLayout<I>, f: usize) -> Range<usize> {
    match layout {
        FaceLayout::Uniform { stride } => f * stride..(f + 1) * stride,
        FaceLayout::Variable { offsets } => offsets[f].to_index()..offsets[f + 1].to_index(),
    }
}

fn check_face_size(order: Order, face: usize, nodes: usize) -> Result<()> {
    let valid = match order {
        Order::Linear => nodes >= 3,
        Order::Quadratic => nodes >= 6 && nodes % 2 == 0,
    };
    if valid && nodes <= 8 {
        Ok(())
    } else {
        Err(MeshError::InvalidFaceSize { face, nodes })
    }
}

fn check_faces<I: MeshIndex>(
    order: Order,
    num_vertices: usize,
    layout: &FaceLayout<I>,
    fv: &[I],
) -> Result<()> {
    match layout {
        FaceLayout::Uniform { stride } => {
            check_face_size(order, 0, *stride)?;
            if fv.len() % stride != 0 {
                return Err(MeshError::InvalidOffsets(format!(
                    "{} face nodes is not a multiple of the stride {stride}",
                    fv.len()
                )));
            }
        }
        FaceLayout::Variable { offsets } => {
            if offsets.first().and_then(|o| o.to_usize()) != Some(0) {
                return Err(MeshError::InvalidOffsets("first offset must be 0".into()));
            }
            if offsets.last().and_then(|o| o.to_usize()) != Some(fv.len()) {
                return Err(MeshError::InvalidOffsets(format!(
                    "last offset must equal the {} face nodes",
                    fv.len()
                )));
            }
            for (f, w) in offsets.windows(2).enumerate() {
                if w[1] <= w[0] {
                    return Err(MeshError::InvalidOffsets(format!(
                        "offsets must increase strictly (face {f})"
                    )));
                }
                check_face_size(order, f, w[1].to_index() - w[0].to_index())?;
            }
        }
    }

    let nf = num_faces(layout, fv.len());
    if nf == 0 || num_vertices == 0 {
        return Err(MeshError::EmptyMesh);
    }
    // Face ids and vertex-to-face offsets are stored as `I`; the adjacency
    // holds at most `fv.len()` entries.
    let max_index = I::max_value().to_usize().unwrap_or(usize::MAX);
    if fv.len() > max_index {
        return Err(MeshError::invalid_param(
            "fv",
            fv.len(),
            "face node count does not fit the mesh index type",
        ));
    }
    for f in 0..nf {
        for v in &fv[face_range(layout, f)] {
            if v.to_usize().is_none_or(|v| v >= num_vertices) {
                return Err(MeshError::InvalidVertexIndex {
                    face: f,
                    vertex: v.to_i64().unwrap_or(i64::MAX),
                    num_vertices,
                });
            }
        }
    }
    Ok(())
}

/// Vertex-to-face adjacency by counting sort; faces come out ascending and a
/// face is listed once per vertex even if it repeats that vertex.
fn transpose<I: MeshIndex>(num_vertices: usize, layout: &FaceLayout<I>, fv: &[I]) -> (Vec<I>, Vec<I>) {
    let nf = num_faces(layout, fv.len());
    let unique_nodes = |f: usize| {
        let mut nodes: SmallVec<[usize; 8]> = SmallVec::new();
        for v in &fv[face_range(layout, f)] {
            let v = v.to_index();
            if !nodes.contains(&v) {
                nodes.push(v);
            }
        }
        nodes
    };

    let mut counts = vec![0usize; num_vertices + 1];
    for f in 0..nf {
        for v in unique_nodes(f) {
            counts[v + 1] += 1;
        }
    }
    for v in 0..num_vertices {
        counts[v + 1] += counts[v];
    }

    let mut cursor = counts.clone();
    let mut vf = vec![I::zero(); counts[num_vertices]];
    for f in 0..nf {
        for v in unique_nodes(f) {
            vf[cursor[v]] = I::from_index(f);
            cursor[v] += 1;
        }
    }
    let vf_offsets = counts.into_iter().map(I::from_index).collect();
    (vf_offsets, vf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> FaceVertexMesh<f64, i32> {
        FaceVertexMesh::new(
            Order::Linear,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
            FaceLayout::Uniform { stride: 3 },
            vec![0, 1, 2, 2, 3, 0],
        )
        .unwrap()
    }

    #[test]
    fn transpose_matches_documented_example() {
        let mesh = square();
        assert_eq!(mesh.vf_offsets(), &[0, 2, 3, 5, 6]);
        assert_eq!(mesh.vf(), &[0, 1, 0, 0, 1, 1]);
        assert_eq!(mesh.faces_of_vertex(2), &[0, 1]);
        assert_eq!(mesh.validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_vertex() {
        let err = FaceVertexMesh::<f64, i32>::new(
            Order::Linear,
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)],
            FaceLayout::Uniform { stride: 3 },
            vec![0, 1, 3],
        )
        .unwrap_err();
        assert!(matches!(err, MeshError::InvalidVertexIndex { face: 0, vertex: 3, .. }));
    }

    #[test]
    fn rejects_bad_offsets() {
        let verts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)];
        let err = FaceVertexMesh::<f64, u32>::new(
            Order::Linear,
            verts,
            FaceLayout::Variable { offsets: vec![0, 4] },
            vec![0, 1, 2],
        )
        .unwrap_err();
        assert!(matches!(err, MeshError::InvalidOffsets(_)));
    }

    #[test]
    fn detects_tampered_adjacency() {
        let mesh = square();
        let broken = FaceVertexMesh {
            vf: vec![0, 1, 0, 1, 1, 1],
            ..mesh
        };
        assert!(matches!(
            broken.validate(),
            Err(MeshError::InconsistentAdjacency(_))
        ));
    }

    #[test]
    fn edges_are_unique() {
        let e = square().edges();
        assert_eq!(e, vec![(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)]);
    }
}
