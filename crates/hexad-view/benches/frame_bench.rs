//! Benchmarks for Hexad camera and frame geometry

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glam::DVec3;
use hexad_core::RealmId;
use hexad_view::{rotation_matrix, Camera, Viewer, ViewerConfig};

fn bench_rotation_matrix(c: &mut Criterion) {
    let axis = DVec3::new(4.0, 4.0, 1.0);
    c.bench_function("rotation_matrix", |b| {
        b.iter(|| black_box(rotation_matrix(black_box(1.2), black_box(axis))))
    });
}

fn bench_camera_rotate(c: &mut Criterion) {
    let mut camera = Camera::new(DVec3::new(1.0, 1.0, 0.0), DVec3::Y).unwrap();
    c.bench_function("camera_rotate", |b| {
        b.iter(|| camera.rotate(black_box(0.5), black_box(DVec3::new(0.3, 1.0, 0.2))))
    });
}

fn bench_frame_geometry(c: &mut Criterion) {
    let config = ViewerConfig::default().with_frame_delay(Duration::ZERO);
    let mut viewer = Viewer::with_config(config).unwrap();
    for realm in RealmId::all() {
        viewer.toggle_realm(realm);
    }

    c.bench_function("frame_geometry_all_lattices", |b| {
        b.iter(|| black_box(viewer.frame()))
    });
}

criterion_group!(benches, bench_rotation_matrix, bench_camera_rotate, bench_frame_geometry);
criterion_main!(benches);
