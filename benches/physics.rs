//! Benchmarks for sway chain stepping.

use criterion::{criterion_group, criterion_main, Criterion};
use sway::*;

fn bench_particle_chain(c: &mut Criterion) {
    c.bench_function("particle_chain_50_links_240_steps", |b| {
        b.iter(|| {
            let config: ChainConfig<f32> = ChainConfig::new(ChainKind::Particle, 50);
            let mut sim = initialize(&config).unwrap();
            for _ in 0..240 {
                sim.step(1.0 / 240.0);
            }
            sim.positions()
        });
    });
}

fn bench_rigid_chain(c: &mut Criterion) {
    c.bench_function("rigid_chain_50_links_240_steps", |b| {
        b.iter(|| {
            let config: ChainConfig<f32> = ChainConfig::new(ChainKind::Rigid, 50);
            let mut sim = initialize(&config).unwrap();
            for _ in 0..240 {
                sim.step(1.0 / 240.0);
            }
            sim.angles()
        });
    });
}

fn bench_spring_force(c: &mut Criterion) {
    let bodies: Vec<Body<f64>> = vec![
        RigidBody::new(Vec2::new(0.0, 0.0), 4.0, 1.0).with_angle(0.3).into(),
        RigidBody::new(Vec2::new(7.0, 1.0), 4.0, 1.0).with_angle(-0.2).into(),
    ];
    let spring = Spring::new(
        Anchor::at(0, Vec2::new(2.0, 0.0)),
        Anchor::at(1, Vec2::new(-2.0, 0.0)),
        1000.0,
        5.0,
        2.0,
    );
    c.bench_function("rigid_spring_force", |b| {
        b.iter(|| spring.force(&bodies, 1e-6));
    });
}

criterion_group!(benches, bench_particle_chain, bench_rigid_chain, bench_spring_force);
criterion_main!(benches);
