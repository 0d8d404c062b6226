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

fn line_round_trip<T: Scalar>() {
    let eps = T::from_f64(1e-4);
    let two = T::from_f64(2.0);
    let dir = pt::<T>(1.0, 1.0).normalized();
    let ray = Ray2::new(pt(0.0, -1.0), dir);

    let l = LineSegment2::new(pt::<T>(0.0, 1.0), pt(2.0, -1.0));
    let t = l.intersect_ray(&ray).unwrap();
    assert!((t - two.sqrt()).abs() < eps);

    let l = LineSegment2::new(pt::<T>(1.0, -1.0), pt(1.0, 1.0));
    let t = l.intersect_ray(&ray).unwrap();
    assert!((t - two.sqrt()).abs() < eps);
}

#[test]
fn line_segment_ray_f32() {
    line_round_trip::<f32>();
}

#[test]
fn line_segment_ray_f64() {
    line_round_trip::<f64>();
}

fn quadratic_hits<T: Scalar>() {
    let eps = T::from_f64(1e-4);
    let q = QuadraticSegment2::new(pt::<T>(0.0, 0.0), pt(2.0, 0.0), pt(1.0, 1.0));

    let up = Ray2::new(pt(1.0, -1.0), pt(0.0, 1.0));
    let [t0, t1] = q.intersect_ray(&up);
    assert!((t0.unwrap() - T::from_f64(2.0)).abs() < eps);
    assert_eq!(t1, None);

    let across = Ray2::new(pt(0.0, 0.75), pt(1.0, 0.0));
    let [t0, t1] = q.intersect_ray(&across);
    assert!((t0.unwrap() - T::from_f64(0.5)).abs() < eps);
    assert!((t1.unwrap() - T::from_f64(1.5)).abs() < eps);
}

#[test]
fn quadratic_segment_ray_f32() {
    quadratic_hits::<f32>();
}

#[test]
fn quadratic_segment_ray_f64() {
    quadratic_hits::<f64>();
}

#[test]
fn quadratic_segment_behind_and_beside() {
    let q = QuadraticSegment2::new(pt::<f64>(0.0, 0.0), pt(2.0, 0.0), pt(1.0, 1.0));
    // Origin between the two crossings: only the forward one counts.
    let from_inside = Ray2::new(pt(1.0, 0.75), pt(1.0, 0.0));
    let [t0, t1] = q.intersect_ray(&from_inside);
    assert!((t0.unwrap() - 0.5).abs() < 1e-9);
    assert_eq!(t1, None);
    // Passes above the apex.
    let above = Ray2::new(pt(-1.0, 1.5), pt(1.0, 0.0));
    assert_eq!(q.intersect_ray(&above), [None, None]);
}

#[test]
fn straight_quadratic_segment_acts_like_a_line() {
    let q = QuadraticSegment2::new(pt::<f64>(0.0, 0.0), pt(2.0, 0.0), pt(1.0, 0.0));
    assert!(q.is_straight());
    let up = Ray2::new(pt(0.5, -1.0), pt(0.0, 1.0));
    let [t0, t1] = q.intersect_ray(&up);
    assert!((t0.unwrap() - 1.0).abs() < 1e-12);
    assert_eq!(t1, None);
    assert!(q.is_left(&pt(1.0, 0.5)));
    assert!(!q.is_left(&pt(1.0, -0.5)));
}

#[test]
fn aabb_union_and_containment() {
    let mut bb = Aabb2::from_point(pt::<f64>(0.0, 0.0));
    bb += pt(2.0, 1.0);
    bb += Aabb2::new(pt(-1.0, 0.5), pt(0.0, 3.0));
    assert!(bb.is_approx(&Aabb2::new(pt(-1.0, 0.0), pt(2.0, 3.0))));
    assert!(bb.contains(&pt(2.0, 3.0)));
    assert!(!bb.contains(&pt(2.0 + 1e-9, 3.0)));
    assert_eq!(bb.width(), 3.0);
    assert_eq!(bb.height(), 3.0);
    assert!(bb.centroid().is_approx(&pt(0.5, 1.5)));

    let touching = Aabb2::new(pt(2.0, 3.0), pt(4.0, 4.0));
    assert!(bb.intersects(&touching));
}

#[test]
fn point_algebra() {
    let a = pt::<f64>(3.0, 4.0);
    let b = pt::<f64>(1.0, 0.0);
    assert_eq!(a.norm(), 5.0);
    assert_eq!(a.dot(&b), 3.0);
    assert_eq!(b.cross(&a), 4.0);
    assert_eq!(a - b, pt(2.0, 4.0));
    assert_eq!(-a * 2.0, pt(-6.0, -8.0));
    assert_eq!(a.distance_to(&b), 20.0_f64.sqrt());
    assert!(a.normalized().is_approx(&pt(0.6, 0.8)));
}

#[test]
fn quadratic_face_area_and_box() {
    let mesh = common::tri6_mesh::<f64>();
    let face = mesh.face(0);
    assert_eq!(face.num_edges(), 3);
    // Chord (1,0)-(0,1) bowed out by the node at (0.7, 0.5).
    let bulge = face.quadratic_edge(1).bulge_area();
    assert!(bulge > 0.0);
    assert!((face.area() - (0.5 + bulge)).abs() < 1e-12);
    assert!(face.is_ccw());
    assert!(face.bounding_box().x_max() > 0.7);
    assert!((face.linear_polygon().area() - 0.5).abs() < 1e-12);
}
