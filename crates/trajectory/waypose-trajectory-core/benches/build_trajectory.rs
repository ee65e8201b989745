use criterion::{black_box, criterion_group, criterion_main, Criterion};

use waypose_trajectory_core::{
    build_trajectory,
    builder::TrajectoryBuilder,
    config::{AngularRateMode, BuildConfig},
    data::Waypoint,
    value::{RotationMatrix, Vector3},
};

fn zigzag() -> Vec<Waypoint> {
    [
        (-1.0, 1.0, 1.0),
        (1.0, 4.0, 1.0),
        (1.0, -2.0, 1.0),
        (4.0, -2.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Waypoint::new(Vector3::new(x, y, z), RotationMatrix::identity()))
    .collect()
}

fn bench_build(c: &mut Criterion) {
    let waypoints = zigzag();

    c.bench_function("build 3x100 quaternion", |b| {
        b.iter(|| build_trajectory(black_box(&waypoints), black_box(100)))
    });

    c.bench_function("build 3x1000 quaternion", |b| {
        b.iter(|| build_trajectory(black_box(&waypoints), black_box(1000)))
    });

    let heading = TrajectoryBuilder::new(BuildConfig {
        angular_rate: AngularRateMode::Heading,
        ..Default::default()
    });
    c.bench_function("build 3x100 heading", |b| {
        b.iter(|| heading.build(black_box(&waypoints), black_box(100)))
    });
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
