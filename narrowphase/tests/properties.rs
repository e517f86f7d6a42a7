#[cfg(test)]
mod tests {
    use log::info;
    use narrowphase::geometry::geo_traits::{CollidesWith, Separation};
    use narrowphase::geometry::primitives::{AABox, Capsule, Circle, Vector2};
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};

    const N_SAMPLES: usize = 10_000;
    /// Remaining penetration tolerated after applying a push along a non axis-aligned direction
    const RESIDUAL_TOLERANCE: f32 = 1e-3;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
    }

    //integer coordinates keep the axis-aligned cases exact
    fn coord(rng: &mut SmallRng) -> f32 {
        rng.random_range(-20..=20) as f32
    }

    fn random_circle(rng: &mut SmallRng) -> Circle {
        let center = Vector2(coord(rng), coord(rng));
        let radius = rng.random_range(0..=10) as f32;
        Circle::try_new(center, radius).unwrap()
    }

    fn random_box(rng: &mut SmallRng) -> AABox {
        let min = Vector2(coord(rng), coord(rng));
        let size = Vector2(
            rng.random_range(1..=15) as f32,
            rng.random_range(1..=15) as f32,
        );
        AABox::from_min_max(min, min + size)
    }

    /// Box whose corners are individually displaced, its edges are no longer axis-aligned nor perpendicular
    fn random_quad(rng: &mut SmallRng) -> AABox {
        let corners = random_box(rng).corners.map(|c| {
            let jitter = Vector2(
                rng.random_range(-3..=3) as f32,
                rng.random_range(-3..=3) as f32,
            );
            c + jitter
        });
        AABox::try_new(corners).unwrap()
    }

    /// Axis-aligned box which may be flattened into a segment or a single point
    fn random_degenerate_box(rng: &mut SmallRng) -> AABox {
        let min = Vector2(coord(rng), coord(rng));
        let size = Vector2(
            rng.random_range(0..=2) as f32 * 5.0,
            rng.random_range(0..=2) as f32 * 5.0,
        );
        AABox::from_min_max(min, min + size)
    }

    fn random_capsule(rng: &mut SmallRng) -> Capsule {
        let start = Vector2(coord(rng), coord(rng));
        let end = Vector2(coord(rng), coord(rng));
        let radius = rng.random_range(0..=5) as f32;
        Capsule::try_new(start, end, radius).unwrap()
    }

    /// Penetration still left after moving, zero if no longer colliding
    fn residual_depth<A, B>(a: &A, b: &B, depth: impl Fn(&A, &B) -> Option<f32>) -> f32 {
        depth(a, b).unwrap_or(0.0)
    }

    #[test]
    fn predicates_are_symmetric() {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(0);
        let mut n_collisions = 0;
        for _ in 0..N_SAMPLES {
            let (c1, c2) = (random_circle(&mut rng), random_circle(&mut rng));
            let (b1, b2) = (random_box(&mut rng), random_box(&mut rng));
            let (k1, k2) = (random_capsule(&mut rng), random_capsule(&mut rng));

            assert_eq!(c1.collides_with(&c2), c2.collides_with(&c1));
            assert_eq!(b1.collides_with(&b2), b2.collides_with(&b1));
            assert_eq!(c1.collides_with(&b1), b1.collides_with(&c1));
            assert_eq!(k1.collides_with(&k2), k2.collides_with(&k1));
            assert_eq!(k1.collides_with(&c1), c1.collides_with(&k1));
            n_collisions += b1.collides_with(&b2) as usize;
        }
        info!("{n_collisions}/{N_SAMPLES} colliding box pairs");
        assert!(n_collisions > 0 && n_collisions < N_SAMPLES);
    }

    #[test]
    fn manifests_agree_with_predicates() {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..N_SAMPLES {
            let (c1, c2) = (random_circle(&mut rng), random_circle(&mut rng));
            let (b1, b2) = (random_box(&mut rng), random_box(&mut rng));

            let cc = c1.separation(&c2);
            assert_eq!(cc.collision(), c1.collides_with(&c2));
            assert_eq!(cc.manifest().is_some(), cc.collision());

            let bb = b1.separation(&b2);
            assert_eq!(bb.collision(), b1.collides_with(&b2));
            assert_eq!(bb.manifest().is_some(), bb.collision());

            let cb = c1.separation(&b1);
            assert_eq!(cb.collision(), c1.collides_with(&b1));
            assert_eq!(cb.manifest().is_some(), cb.collision());
        }
    }

    #[test]
    fn pushes_are_exact_negations() {
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..N_SAMPLES {
            let (c1, c2) = (random_circle(&mut rng), random_circle(&mut rng));
            let (b1, b2) = (random_box(&mut rng), random_box(&mut rng));

            if let Some(m) = c1.separation(&c2).manifest() {
                assert_eq!(m.left_distance, -m.right_distance);
            }
            if let Some(m) = b1.separation(&b2).manifest() {
                assert_eq!(m.left_distance, -m.right_distance);
            }
            if let Some(m) = c1.separation(&b1).manifest() {
                assert_eq!(m.circle_distance, -m.box_distance);
            }
        }
    }

    #[test]
    fn box_push_closes_the_gap() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..N_SAMPLES {
            let (left, right) = (random_box(&mut rng), random_box(&mut rng));
            if let Some(m) = left.separation(&right).into_manifest() {
                assert!(!left.translated(m.left_distance).collides_with(&right));
                assert!(!left.collides_with(&right.translated(m.right_distance)));
            }
        }
    }

    #[test]
    fn circle_push_closes_the_gap() {
        let mut rng = SmallRng::seed_from_u64(4);
        let depth = |a: &Circle, b: &Circle| {
            a.separation(b)
                .into_manifest()
                .map(|m| m.left_distance.length())
        };
        for _ in 0..N_SAMPLES {
            let (left, right) = (random_circle(&mut rng), random_circle(&mut rng));
            if left.center == right.center {
                //no direction to push in
                continue;
            }
            if let Some(m) = left.separation(&right).into_manifest() {
                let moved = left.translated(m.left_distance);
                assert!(residual_depth(&moved, &right, depth) < RESIDUAL_TOLERANCE);
            }
        }
    }

    #[test]
    fn circle_box_push_closes_the_gap() {
        let mut rng = SmallRng::seed_from_u64(5);
        let depth = |c: &Circle, b: &AABox| {
            c.separation(b)
                .into_manifest()
                .map(|m| m.circle_distance.length())
        };
        for _ in 0..N_SAMPLES {
            let (circle, aabox) = (random_circle(&mut rng), random_box(&mut rng));
            if let Some(m) = circle.separation(&aabox).into_manifest() {
                let moved = circle.translated(m.circle_distance);
                assert!(residual_depth(&moved, &aabox, depth) < RESIDUAL_TOLERANCE);
            }
        }
    }

    #[test]
    fn quad_predicates_are_symmetric_and_agree() {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(6);
        let mut n_collisions = 0;
        for _ in 0..N_SAMPLES {
            let (q1, q2) = (random_quad(&mut rng), random_quad(&mut rng));
            let (d1, d2) = (random_degenerate_box(&mut rng), random_degenerate_box(&mut rng));
            let circle = random_circle(&mut rng);

            for (a, b) in [(q1, q2), (d1, d2), (q1, d1)] {
                assert_eq!(a.collides_with(&b), b.collides_with(&a));
                let result = a.separation(&b);
                assert_eq!(result.collision(), a.collides_with(&b));
                if let Some(m) = result.manifest() {
                    assert_eq!(m.left_distance, -m.right_distance);
                }
            }
            let cb = circle.separation(&q1);
            assert_eq!(cb.collision(), circle.collides_with(&q1));
            assert_eq!(cb.collision(), q1.collides_with(&circle));
            n_collisions += q1.collides_with(&q2) as usize;
        }
        info!("{n_collisions}/{N_SAMPLES} colliding quad pairs");
        assert!(n_collisions > 0 && n_collisions < N_SAMPLES);
    }

    #[test]
    fn quad_push_closes_the_gap() {
        let mut rng = SmallRng::seed_from_u64(7);
        let depth = |a: &AABox, b: &AABox| {
            a.separation(b)
                .into_manifest()
                .map(|m| m.left_distance.length())
        };
        for _ in 0..N_SAMPLES {
            let (left, right) = (random_quad(&mut rng), random_quad(&mut rng));
            if let Some(m) = left.separation(&right).into_manifest() {
                let moved = left.translated(m.left_distance);
                assert!(residual_depth(&moved, &right, depth) < RESIDUAL_TOLERANCE);
            }
        }
    }

    #[test]
    fn circle_quad_push_closes_the_gap() {
        let mut rng = SmallRng::seed_from_u64(8);
        let depth = |c: &Circle, b: &AABox| {
            c.separation(b)
                .into_manifest()
                .map(|m| m.circle_distance.length())
        };
        for _ in 0..N_SAMPLES {
            let (circle, quad) = (random_circle(&mut rng), random_quad(&mut rng));
            if let Some(m) = circle.separation(&quad).into_manifest() {
                let moved = circle.translated(m.circle_distance);
                assert!(residual_depth(&moved, &quad, depth) < RESIDUAL_TOLERANCE);
            }
        }
    }

    #[test]
    fn degenerate_box_push_is_zero_only_without_axes() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut n_zero_pushes = 0;
        for _ in 0..N_SAMPLES {
            let (left, right) = (random_degenerate_box(&mut rng), random_degenerate_box(&mut rng));
            let Some(m) = left.separation(&right).into_manifest() else {
                continue;
            };
            let no_axes = left.axes().iter().chain(right.axes().iter()).all(Vector2::is_zero);
            assert_eq!(m.right_distance.is_zero(), no_axes);
            if no_axes {
                n_zero_pushes += 1;
            } else {
                assert!(!left.translated(m.left_distance).collides_with(&right));
            }
        }
        info!("{n_zero_pushes} pairs of points without a push direction");
    }
}
