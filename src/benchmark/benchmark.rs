use std::time::Instant;

use crate::configuration::config::RadiusMode;
use crate::error::Result;
use crate::host::scene::{MemoryScene, PrimitiveKind, Scene};
use crate::simulation::geometry::{Axis, Vec3};
use crate::simulation::integrator::{floor_gravity_step, pairwise_force_step};
use crate::simulation::params::DEFAULT_GRAVITY;
use crate::simulation::states::{Body, BodyId, System};

/// Helper to build `n` falling cubes plus their scene
fn make_falling(n: usize) -> Result<(System, MemoryScene)> {
    let mut scene = MemoryScene::new();
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic heights, no rand needed
        let position = Vec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            1000.0 + (i_f * 0.07).sin() * 500.0,
        );

        let name = format!("cube_{i}");
        let handle = scene.create_primitive(PrimitiveKind::Cube, &name, 2.0, position)?;

        bodies.push(Body {
            name,
            size: 2.0,
            mass: None,
            velocity: 0.0,
            collided: false,
            radius_mode: RadiusMode::Exact,
            handle,
        });
    }

    Ok((System::new(bodies), scene))
}

/// Benchmark the floor gravity step over a range of body counts
/// Paste output directly into excel to graph
pub fn bench_floor_gravity() -> Result<()> {
    println!("N,ticks_per_ms");

    let ticks = 600; // 10 simulated seconds per measurement

    for n in [200, 400, 800, 1600, 3200, 6400] {
        let (mut sys, mut scene) = make_falling(n)?;

        // Warm up
        floor_gravity_step(&mut sys, &mut scene, DEFAULT_GRAVITY)?;

        let t0 = Instant::now();
        for _ in 0..ticks {
            floor_gravity_step(&mut sys, &mut scene, DEFAULT_GRAVITY)?;
        }
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.3}", n, ticks as f64 / elapsed_ms);
    }

    Ok(())
}

/// Benchmark the pairwise force step over increasingly long runs
/// Throughput includes the per-tick recorder growth
pub fn bench_pairwise_step() -> Result<()> {
    println!("ticks,ms_total,ticks_per_ms");

    for ticks in [1_000usize, 10_000, 100_000] {
        let mut scene = MemoryScene::new();
        let h1 = scene.create_primitive(PrimitiveKind::Sphere, "p1", 2.0, Vec3::new(0.0, 2.0, 1.0))?;
        let h2 = scene.create_primitive(PrimitiveKind::Sphere, "p2", 2.0, Vec3::new(0.0, -2.0, 1.0))?;

        let bodies = vec![
            Body {
                name: "p1".into(),
                size: 2.0,
                mass: Some(0.5),
                velocity: 0.0,
                collided: false,
                radius_mode: RadiusMode::Exact,
                handle: h1,
            },
            Body {
                name: "p2".into(),
                size: 2.0,
                mass: Some(0.5),
                velocity: 0.0,
                collided: false,
                radius_mode: RadiusMode::Exact,
                handle: h2,
            },
        ];
        let mut sys = System::new(bodies);
        let (p1, p2) = (BodyId(0), BodyId(1));

        // Warm up
        pairwise_force_step(&mut sys, &mut scene, p1, p2, 2.0, Axis::Y)?;

        let t0 = Instant::now();
        for _ in 0..ticks {
            pairwise_force_step(&mut sys, &mut scene, p1, p2, 2.0, Axis::Y)?;
        }
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.3},{:.3}", ticks, elapsed_ms, ticks as f64 / elapsed_ms);
    }

    Ok(())
}
