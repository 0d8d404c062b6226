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

//! # facegrid
//!
//! Point location and ray casting on 2-D polygon meshes with straight or
//! quadratic (curved) edges.
//!
//! A [`FaceVertexMesh`](mesh::FaceVertexMesh) holds the imported geometry.
//! A [`BinnedMesh`](mesh::BinnedMesh) lays a uniform grid over it and lists,
//! per cell, the faces whose bounding box overlaps that cell, so that a
//! query only runs exact geometric tests against a handful of faces.
//!
//! ```
//! use facegrid::prelude::*;
//!
//! let mesh = FaceVertexMesh::<f64, u32>::new(
//!     Order::Linear,
//!     vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(1.0, 0.0),
//!         Point2::new(1.0, 1.0),
//!         Point2::new(0.0, 1.0),
//!     ],
//!     FaceLayout::Uniform { stride: 3 },
//!     vec![0, 1, 2, 2, 3, 0],
//! )?;
//! let binned = BinnedMesh::new(&mesh, &PartitionOptions::default())?;
//!
//! assert_eq!(binned.face_containing(&Point2::new(0.75, 0.25)), Some(0));
//! assert_eq!(binned.face_containing(&Point2::new(0.25, 0.75)), Some(1));
//! assert_eq!(binned.face_containing(&Point2::new(2.0, 2.0)), None);
//!
//! let ray = Ray2::new(Point2::new(-1.0, 0.5), Point2::new(1.0, 0.0));
//! assert_eq!(intersect(&ray, &binned), vec![1.0, 1.5, 2.0]);
//! # Ok::<(), facegrid::MeshError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod logger;
pub mod mesh;
pub mod numeric;
pub mod query;

pub use error::{MeshError, Result};

pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::geometry::{
        Aabb, Aabb2, LineSegment2, Order, Point, Point2, Polygon, QuadraticSegment2, Ray2,
    };
    pub use crate::logger::{LogConfig, Logger, Verbosity};
    pub use crate::mesh::{
        BinnedMesh, CellRange, FaceLayout, FaceVertexMesh, MAX_CELLS, MeshType, PartitionOptions,
        RegularGrid, Resolution,
    };
    pub use crate::numeric::{MeshIndex, Scalar};
    pub use crate::query::{Fill, RayTarget, face_containing, intersect, intersect_into};
}
