use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use narrowphase::geometry::geo_traits::{CollidesWith, Separation};
use narrowphase::geometry::primitives::{AABox, Capsule, Circle, Vector2};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, bool_bench, manifest_bench);

const N_PAIRS: usize = 1000;
/// Half-width of the square in which the shapes are scattered, a smaller world means more collisions
const WORLD_SIZES: [f32; 3] = [25.0, 100.0, 400.0];

struct Shapes {
    circles: Vec<Circle>,
    boxes: Vec<AABox>,
    capsules: Vec<Capsule>,
}

fn generate_shapes(world_size: f32, rng: &mut SmallRng) -> Shapes {
    let point = |rng: &mut SmallRng| {
        Vector2(
            rng.random_range(-world_size..world_size),
            rng.random_range(-world_size..world_size),
        )
    };
    let circles = (0..N_PAIRS * 2)
        .map(|_| Circle::try_new(point(rng), rng.random_range(1.0..10.0)).unwrap())
        .collect();
    let boxes = (0..N_PAIRS * 2)
        .map(|_| {
            let min = point(rng);
            let size = Vector2(rng.random_range(1.0..20.0), rng.random_range(1.0..20.0));
            AABox::from_min_max(min, min + size)
        })
        .collect();
    let capsules = (0..N_PAIRS * 2)
        .map(|_| Capsule::try_new(point(rng), point(rng), rng.random_range(1.0..5.0)).unwrap())
        .collect();
    Shapes {
        circles,
        boxes,
        capsules,
    }
}

/// Benchmark the boolean predicates for every shape pairing, with different shape densities
fn bool_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("bool_1k");
    group.throughput(Throughput::Elements(N_PAIRS as u64));
    for world_size in WORLD_SIZES {
        let mut rng = SmallRng::seed_from_u64(0);
        let shapes = generate_shapes(world_size, &mut rng);

        group.bench_with_input(
            BenchmarkId::new("box_box", world_size),
            &shapes,
            |b, s| {
                b.iter(|| {
                    s.boxes
                        .chunks_exact(2)
                        .filter(|p| black_box(p[0].collides_with(&p[1])))
                        .count()
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("circle_box", world_size),
            &shapes,
            |b, s| {
                b.iter(|| {
                    s.circles
                        .iter()
                        .zip(s.boxes.iter())
                        .filter(|(circle, aabox)| black_box(circle.collides_with(*aabox)))
                        .count()
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("capsule_capsule", world_size),
            &shapes,
            |b, s| {
                b.iter(|| {
                    s.capsules
                        .chunks_exact(2)
                        .filter(|p| black_box(p[0].collides_with(&p[1])))
                        .count()
                })
            },
        );
    }
    group.finish();
}

/// Benchmark the manifest generators, which run the full axis sweep even when a separating axis is found early
fn manifest_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest_1k");
    group.throughput(Throughput::Elements(N_PAIRS as u64));
    for world_size in WORLD_SIZES {
        let mut rng = SmallRng::seed_from_u64(0);
        let shapes = generate_shapes(world_size, &mut rng);

        group.bench_with_input(
            BenchmarkId::new("circle_circle", world_size),
            &shapes,
            |b, s| {
                b.iter(|| {
                    s.circles
                        .chunks_exact(2)
                        .filter_map(|p| black_box(p[0].separation(&p[1])).into_manifest())
                        .count()
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("box_box", world_size),
            &shapes,
            |b, s| {
                b.iter(|| {
                    s.boxes
                        .chunks_exact(2)
                        .filter_map(|p| black_box(p[0].separation(&p[1])).into_manifest())
                        .count()
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("circle_box", world_size),
            &shapes,
            |b, s| {
                b.iter(|| {
                    s.circles
                        .iter()
                        .zip(s.boxes.iter())
                        .filter_map(|(circle, aabox)| black_box(circle.separation(aabox)).into_manifest())
                        .count()
                })
            },
        );
    }
    group.finish();
}
