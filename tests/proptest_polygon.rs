//! Property-based tests for 2D polygons and ear-clipping triangulation.
//!
//! Run with: cargo test --test proptest_polygon
//! Set `RUST_LOG=geokern=trace` to see every clipped ear.

#![allow(clippy::unwrap_used)]

use geokern::geometry::{Polygon2D, WindingOrder};
use geokern::math::polygon_2d::signed_area_2d;
use geokern::math::{Angle, Vector2};
use geokern::tessellation::{TriangulationContext, VertexTriangle};
use proptest::prelude::*;

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Strategies
// =============================================================================

fn arb_point() -> impl Strategy<Value = Vector2<f64>> {
    (-100.0..100.0f64, -100.0..100.0f64).prop_map(|(x, y)| Vector2::new(x, y))
}

/// Anticlockwise polygon that is star-shaped about the origin: one vertex per
/// equal angular step, each at its own radius.
fn arb_star_polygon() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec(0.5..10.0f64, 3..40).prop_map(|radii| {
        #[allow(clippy::cast_precision_loss)]
        let step = 360.0 / radii.len() as f64;
        radii
            .iter()
            .enumerate()
            .map(|(i, &r)| {
                #[allow(clippy::cast_precision_loss)]
                let angle = Angle::from_degrees(step * i as f64);
                Vector2::from_polar(angle, r)
            })
            .collect()
    })
}

fn triangle_area(vertices: &[Vector2<f64>], tri: VertexTriangle) -> f64 {
    signed_area_2d(&[vertices[tri.a], vertices[tri.b], vertices[tri.c]])
}

// =============================================================================
// Triangulation
// =============================================================================

proptest! {
    #[test]
    fn star_polygon_areas_sum(vertices in arb_star_polygon()) {
        init_tracing();
        let polygon = Polygon2D::new(&vertices, WindingOrder::Anticlockwise);
        let mut dest = vec![VertexTriangle::default(); polygon.triangle_count()];
        let written = polygon.triangulate(&mut dest).unwrap();
        prop_assert_eq!(written, vertices.len() - 2);

        let area = polygon.signed_area();
        let sum: f64 = dest.iter().map(|&tri| triangle_area(&vertices, tri)).sum();
        prop_assert!((sum - area).abs() < 1e-6 * area.abs().max(1.0));
        for &tri in &dest {
            prop_assert!(triangle_area(&vertices, tri) > -1e-9);
        }
    }

    #[test]
    fn reversed_star_polygon_triangulates_clockwise(vertices in arb_star_polygon()) {
        let mut reversed = vertices.clone();
        reversed.reverse();
        let polygon = Polygon2D::new(&reversed, WindingOrder::Clockwise);
        let mut dest = vec![VertexTriangle::default(); polygon.triangle_count()];
        polygon.triangulate(&mut dest).unwrap();

        let sum: f64 = dest.iter().map(|&tri| triangle_area(&reversed, tri)).sum();
        prop_assert!(sum < 0.0);
        prop_assert!((sum + signed_area_2d(&vertices)).abs() < 1e-6 * sum.abs().max(1.0));
    }

    #[test]
    fn every_vertex_is_used(vertices in arb_star_polygon()) {
        let polygon = Polygon2D::new(&vertices, WindingOrder::Anticlockwise);
        let mut context = TriangulationContext::new();
        let mut dest = vec![VertexTriangle::default(); polygon.triangle_count()];
        polygon.triangulate_with(&mut context, &mut dest).unwrap();

        let mut seen = vec![false; vertices.len()];
        for tri in &dest {
            for i in tri.indices() {
                seen[i] = true;
            }
        }
        prop_assert!(seen.iter().all(|&s| s));
        prop_assert_eq!(context.clipped_indices().len(), vertices.len() - 3);
    }

    #[test]
    fn short_buffer_is_rejected(vertices in arb_star_polygon()) {
        let polygon = Polygon2D::new(&vertices, WindingOrder::Anticlockwise);
        let mut dest = vec![VertexTriangle::default(); polygon.triangle_count() - 1];
        prop_assert!(polygon.triangulate(&mut dest).is_err());
        prop_assert!(dest.iter().all(|&tri| tri == VertexTriangle::default()));
    }
}

// =============================================================================
// Polygon queries
// =============================================================================

proptest! {
    #[test]
    fn centroid_follows_translation(vertices in arb_star_polygon(), offset in arb_point()) {
        let moved: Vec<_> = vertices.iter().map(|&v| v + offset).collect();
        let before = Polygon2D::new(&vertices, WindingOrder::Anticlockwise).centroid();
        let after = Polygon2D::new(&moved, WindingOrder::Anticlockwise).centroid();
        prop_assert!(after.equals_within(before + offset, 1e-9));
    }

    #[test]
    fn origin_is_inside_star_polygon(vertices in arb_star_polygon()) {
        let polygon = Polygon2D::new(&vertices, WindingOrder::Anticlockwise);
        prop_assert!(polygon.contains(Vector2::zero()));
        prop_assert_eq!(polygon.distance_from(Vector2::zero()), Some(0.0));
    }

    #[test]
    fn closest_point_is_no_farther_than_any_vertex(
        vertices in arb_star_polygon(),
        point in arb_point(),
    ) {
        let polygon = Polygon2D::new(&vertices, WindingOrder::Anticlockwise);
        let closest = polygon.edge_point_closest_to(point).unwrap();
        let d = closest.distance_from(point);
        for &v in &vertices {
            prop_assert!(d <= v.distance_from(point) + 1e-9);
        }
    }
}

// =============================================================================
// Vectors
// =============================================================================

proptest! {
    #[test]
    fn rotation_keeps_length(v in arb_point(), degrees in -720.0..720.0f64) {
        let rotated = v.rotated_by(Angle::from_degrees(degrees));
        prop_assert!((rotated.length() - v.length()).abs() < 1e-9);
    }

    #[test]
    fn vector_angle_is_symmetric(a in arb_point(), b in arb_point()) {
        let ab = a.angle_to(b).radians();
        let ba = b.angle_to(a).radians();
        prop_assert!((ab - ba).abs() < 1e-12);
    }
}
