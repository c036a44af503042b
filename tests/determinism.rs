use sway::{initialize, BodyState, ChainConfig, ChainKind, PhysicsError, Vec2};

fn config(kind: ChainKind) -> ChainConfig<f64> {
    ChainConfig::new(kind, 12).with_anchor(Vec2::new(960.0, 135.0))
}

#[test]
fn chain_deterministic() {
    for kind in [ChainKind::Particle, ChainKind::Rigid] {
        let results: Vec<_> = (0..5).map(|_| {
            let mut sim = initialize(&config(kind)).unwrap();
            for _ in 0..240 {
                sim.step(1.0 / 240.0);
            }
            sim.snapshot()
        }).collect();

        for r in &results[1..] {
            assert_eq!(&results[0], r);
        }
    }
}

#[test]
fn restore_replays_trajectory() {
    for kind in [ChainKind::Particle, ChainKind::Rigid] {
        let mut sim = initialize(&config(kind)).unwrap();
        for _ in 0..100 {
            sim.step(1.0 / 240.0);
        }
        let saved = sim.snapshot();
        let json = serde_json::to_string(&saved).unwrap();

        let mut frames = Vec::new();
        for i in 0..200 {
            sim.step(1.0 / 240.0 + (i % 3) as f64 * 1e-4);
            frames.push(sim.snapshot());
        }

        let restored: Vec<BodyState<f64>> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, saved);

        let mut replay = initialize(&config(kind)).unwrap();
        replay.restore(&restored).unwrap();
        for (i, expected) in frames.iter().enumerate() {
            replay.step(1.0 / 240.0 + (i % 3) as f64 * 1e-4);
            assert_eq!(&replay.snapshot(), expected, "{:?} diverged at frame {}", kind, i);
        }
    }
}

#[test]
fn restore_rejects_wrong_length() {
    let mut sim = initialize(&config(ChainKind::Particle)).unwrap();
    let short = vec![BodyState::default(); 3];
    assert_eq!(
        sim.restore(&short),
        Err(PhysicsError::SnapshotMismatch { expected: 12, got: 3 })
    );
}
