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

mod common;

use common::pt;
use facegrid::prelude::*;
use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

fn assert_hits<T: Scalar>(hits: &[T], expected: &[f64]) {
    assert_eq!(hits.len(), expected.len(), "{hits:?} vs {expected:?}");
    for (h, e) in hits.iter().zip(expected) {
        assert!(
            (h.to_f64().unwrap() - e).abs() < 1e-4,
            "{hits:?} vs {expected:?}"
        );
    }
}

fn assert_same_hits(binned: &[f64], brute: &[f64], ray: &Ray2<f64>) {
    assert_eq!(binned.len(), brute.len(), "{ray:?}: {binned:?} vs {brute:?}");
    for (b, e) in binned.iter().zip(brute) {
        assert!((b - e).abs() < 1e-9, "{ray:?}: {binned:?} vs {brute:?}");
    }
}

fn random_ray(rng: &mut impl Rng) -> Ray2<f64> {
    let theta = rng.random_range(0.0..std::f64::consts::TAU);
    Ray2::new(
        pt(rng.random_range(-0.5..1.5), rng.random_range(-0.5..1.5)),
        pt(theta.cos(), theta.sin()),
    )
}

#[test]
fn unit_square_point_location() {
    let mesh = common::tri_mesh::<f64>();
    let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();
    assert_eq!(binned.face_containing(&pt(0.75, 0.25)), Some(0));
    assert_eq!(binned.face_containing(&pt(0.25, 0.75)), Some(1));
    // On the shared diagonal: the lower id wins.
    assert_eq!(binned.face_containing(&pt(0.25, 0.25)), Some(0));
    assert_eq!(binned.face_containing(&pt(0.9, 0.9)), Some(0));
    assert_eq!(binned.face_containing(&pt(2.0, 2.0)), None);
    assert_eq!(binned.face_containing(&pt(-0.1, 0.5)), None);
    // Corners and boundary points are inside.
    assert_eq!(binned.face_containing(&pt(1.0, 1.0)), Some(0));
    assert_eq!(binned.face_containing(&pt(0.0, 0.5)), Some(1));
}

#[test]
fn mixed_and_quadratic_point_location() {
    let mesh = common::tri_quad_mesh::<f32>();
    let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();
    assert_eq!(binned.face_containing(&pt(0.5, 0.5)), Some(0));
    assert_eq!(binned.face_containing(&pt(1.25, 0.25)), Some(1));
    assert_eq!(binned.face_containing(&pt(1.75, 0.75)), None);

    let mesh = common::tri6_mesh::<f64>();
    let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();
    // Right of the chord x + y = 1 but left of the bowed edge.
    assert_eq!(binned.face_containing(&pt(0.6, 0.5)), Some(0));
    assert_eq!(binned.face_containing(&pt(0.8, 0.5)), Some(1));

    let mesh = common::tri6_quad8_mesh::<f64>();
    let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();
    assert_eq!(binned.face_containing(&pt(0.5, 0.5)), Some(0));
    assert_eq!(binned.face_containing(&pt(0.9, 0.5)), Some(1));
}

#[test]
fn binned_location_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mesh = common::jittered_tri_mesh(20, &mut rng);
    let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();
    for _ in 0..2000 {
        let p = pt(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
        let found = binned.face_containing(&p);
        assert!(found.is_some(), "{p:?} not located");
        assert_eq!(found, mesh.face_containing(&p), "{p:?}");
    }
}

#[test]
fn quadratic_location_matches_brute_force() {
    let mesh = common::tri6_quad8_mesh::<f64>();
    let binned = BinnedMesh::new(&mesh, &PartitionOptions::default().with_cells(4, 2)).unwrap();
    let mut rng = StdRng::seed_from_u64(0xc0ffee);
    for _ in 0..2000 {
        let p = pt(rng.random_range(0.0..2.0), rng.random_range(0.0..1.0));
        assert_eq!(binned.face_containing(&p), mesh.face_containing(&p), "{p:?}");
    }
}

#[test]
fn concurrent_queries_agree() {
    let mut rng = StdRng::seed_from_u64(17);
    let mesh = common::jittered_tri_mesh(16, &mut rng);
    let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();
    let points: Vec<Point2<f64>> = (0..500)
        .map(|_| pt(rng.random_range(-0.1..1.1), rng.random_range(-0.1..1.1)))
        .collect();
    let expected: Vec<_> = points.iter().map(|p| binned.face_containing(p)).collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| points.iter().map(|p| binned.face_containing(p)).collect::<Vec<_>>()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
    assert_eq!(binned.face_containing_many(&points), expected);
}

#[test]
fn ray_through_linear_meshes() {
    fn check<T: Scalar>() {
        let ray = Ray2::new(pt::<T>(-1.0, 0.5), pt(1.0, 0.0));
        let cases = [
            (common::tri_mesh::<T>(), [1.0, 1.5, 2.0]),
            (common::quad_mesh::<T>(), [1.0, 2.0, 3.0]),
            (common::tri_quad_mesh::<T>(), [1.0, 2.0, 2.5]),
        ];
        for (mesh, expected) in cases {
            assert_hits(&intersect(&ray, &mesh), &expected);
            let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();
            assert_hits(&intersect(&ray, &binned), &expected);
        }
    }
    check::<f32>();
    check::<f64>();
}

#[test]
fn ray_through_quadratic_meshes() {
    let ray = Ray2::new(pt::<f64>(-1.0, 0.5), pt(1.0, 0.0));

    let mesh = common::tri6_mesh::<f64>();
    let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();
    assert_hits(&intersect(&ray, &mesh), &[1.0, 1.7, 2.0]);
    assert_hits(&intersect(&ray, &binned), &[1.0, 1.7, 2.0]);

    // The shared edge of the 8-node quads bows out to x = 1 + 0.4 r (1 - r).
    let mesh = common::quad8_mesh::<f64>();
    let binned = BinnedMesh::new(&mesh, &PartitionOptions::default().with_cells(3, 3)).unwrap();
    let r = (1.4 - 1.16f64.sqrt()) / 0.8;
    let crossing = 2.0 + 0.4 * r * (1.0 - r);
    assert_hits(&intersect(&ray, &mesh), &[1.0, crossing, 3.0]);
    assert_hits(&intersect(&ray, &binned), &[1.0, crossing, 3.0]);
}

#[test]
fn ray_from_inside_and_misses() {
    let mesh = common::tri_mesh::<f64>();
    let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();

    // The diagonal is behind the origin.
    let inside = Ray2::new(pt(0.5, 0.25), pt(1.0, 0.0));
    assert_hits(&intersect(&inside, &binned), &[0.5]);

    let above = Ray2::new(pt(-1.0, 5.0), pt(1.0, 0.0));
    assert!(intersect(&above, &mesh).is_empty());
    assert!(intersect(&above, &binned).is_empty());

    let away = Ray2::new(pt(-1.0, 0.5), pt(-1.0, 0.0));
    assert!(intersect(&away, &binned).is_empty());
}

#[test]
fn ray_through_a_shared_vertex_is_reported_once() {
    let mesh = common::tri_mesh::<f64>();
    let ray = Ray2::new(pt(-1.0, 0.0), pt(1.0, 0.0));
    // Along the bottom edge: the left edge and the diagonal meet at t = 1.
    assert_hits(&intersect(&ray, &mesh), &[1.0, 2.0]);
}

#[test]
fn ray_through_a_grid_corner_finds_the_diagonal_face() {
    let mesh = FaceVertexMesh::<f64, u32>::new(
        Order::Linear,
        vec![
            pt(1.0, 1.0),
            pt(2.0, 1.0),
            pt(1.0, 2.0),
            pt(0.0, 0.0),
            pt(0.5, 0.0),
            pt(0.0, 0.5),
        ],
        FaceLayout::Uniform { stride: 3 },
        vec![0, 1, 2, 3, 4, 5],
    )
    .unwrap();
    let grid = RegularGrid::new(pt(0.0, 0.0), [1.0, 1.0], [2, 2]).unwrap();
    let binned = BinnedMesh::build(&mesh, grid, &PartitionOptions::default());

    // Touches the first triangle only at its corner (1, 1), a grid node.
    let ray = Ray2::new(pt(0.0, 2.0), pt(1.0, -1.0).normalized());
    assert_hits(&intersect(&ray, &mesh), &[2f64.sqrt()]);
    assert_hits(&intersect(&ray, &binned), &[2f64.sqrt()]);
}

#[test]
fn binned_rays_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(0xface);
    let mesh = common::jittered_tri_mesh(12, &mut rng);
    let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();
    for _ in 0..500 {
        let ray = random_ray(&mut rng);
        assert_same_hits(&intersect(&ray, &binned), &intersect(&ray, &mesh), &ray);
    }
}

#[test]
fn rays_aimed_at_grid_nodes_match_brute_force() {
    // Mesh nodes coincide with the grid nodes.
    let mesh = common::tri_lattice_mesh(8);
    let binned = BinnedMesh::new(&mesh, &PartitionOptions::default().with_cells(8, 8)).unwrap();
    assert_eq!(binned.grid().spacing(), &[0.125, 0.125]);
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..500 {
        let node = pt(
            f64::from(rng.random_range(0..=8u8)) * 0.125,
            f64::from(rng.random_range(0..=8u8)) * 0.125,
        );
        let theta = if rng.random_bool(0.5) {
            f64::from(rng.random_range(0..4u8)) * std::f64::consts::FRAC_PI_2
                + std::f64::consts::FRAC_PI_4
        } else {
            rng.random_range(0.0..std::f64::consts::TAU)
        };
        let dir = pt(theta.cos(), theta.sin());
        let ray = Ray2::new(node - dir * rng.random_range(0.1..2.0), dir);
        assert_same_hits(&intersect(&ray, &binned), &intersect(&ray, &mesh), &ray);
    }
}

#[test]
fn caller_buffer_is_never_overrun() {
    let mesh = common::tri_mesh::<f64>();
    let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();
    let ray = Ray2::new(pt(-1.0, 0.5), pt(1.0, 0.0));

    let mut small = [0.0; 2];
    let fill = intersect_into(&ray, &binned, &mut small);
    assert_eq!(fill, Fill { written: 2, total: 3 });
    assert!(fill.is_truncated());
    assert_eq!(small, [1.0, 1.5]);

    let mut large = [-1.0; 5];
    let fill = intersect_into(&ray, &binned, &mut large);
    assert_eq!(fill, Fill { written: 3, total: 3 });
    assert!(!fill.is_truncated());
    assert_eq!(large, [1.0, 1.5, 2.0, -1.0, -1.0]);

    let fill = intersect_into(&ray, &binned, &mut []);
    assert_eq!(fill, Fill { written: 0, total: 3 });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn binned_location_has_no_false_negatives(
        seed in any::<u64>(),
        x in 0.0..1.0f64,
        y in 0.0..1.0f64,
    ) {
        let mesh = common::jittered_tri_mesh(6, &mut StdRng::seed_from_u64(seed));
        let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();
        let p = pt(x, y);
        let found = binned.face_containing(&p);
        prop_assert!(found.is_some());
        prop_assert_eq!(found, mesh.face_containing(&p));
    }

    #[test]
    fn binned_rays_have_no_false_negatives(
        seed in any::<u64>(),
        origin in prop::array::uniform2(-0.5..1.5f64),
        theta in 0.0..std::f64::consts::TAU,
    ) {
        let mesh = common::jittered_tri_mesh(6, &mut StdRng::seed_from_u64(seed));
        let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();
        let ray = Ray2::new(pt(origin[0], origin[1]), pt(theta.cos(), theta.sin()));
        let brute = intersect(&ray, &mesh);
        let hits = intersect(&ray, &binned);
        prop_assert_eq!(hits.len(), brute.len());
        for (h, e) in hits.iter().zip(&brute) {
            prop_assert!((h - e).abs() < 1e-9);
        }
    }

    #[test]
    fn repeated_queries_agree(
        seed in any::<u64>(),
        points in prop::collection::vec(prop::array::uniform2(-0.2..1.2f64), 1..40),
        theta in 0.0..std::f64::consts::TAU,
    ) {
        let mesh = common::jittered_tri_mesh(6, &mut StdRng::seed_from_u64(seed));
        let binned = BinnedMesh::new(&mesh, &PartitionOptions::default()).unwrap();
        let points: Vec<Point2<f64>> = points.iter().map(|p| pt(p[0], p[1])).collect();
        let one_by_one: Vec<_> = points.iter().map(|p| binned.face_containing(p)).collect();
        prop_assert_eq!(binned.face_containing_many(&points), one_by_one);

        let ray = Ray2::new(points[0], pt(theta.cos(), theta.sin()));
        prop_assert_eq!(intersect(&ray, &binned), intersect(&ray, &binned));
    }
}
