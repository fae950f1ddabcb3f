//! Long-running behaviour of the sphere without user input.

use approx::assert_relative_eq;
use luminary_engine::color::color_for_temperature;
use luminary_engine::config::{Params, StepMode};
use luminary_engine::input::{Action, Cue};
use luminary_engine::sim::{radius, RADIUS_OFFSET};
use luminary_engine::Luminary;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn world(params: Params) -> Luminary {
    Luminary::with_params(params, 64, 32, 42).unwrap()
}

#[test]
fn idle_sphere_cools_monotonically() {
    let mut w = world(Params::default());
    for _ in 0..50 {
        w.apply(Action::AddEnergy).unwrap();
    }

    let mut prev = w.state().kinetic_energy();
    for frame in 0..10_000 {
        w.tick(frame as f64 * FRAME_MS);
        let e = w.state().kinetic_energy();
        assert!(e <= prev, "energy rose at frame {frame}");
        assert!(e > 0.0);
        prev = e;
    }
    assert!(prev < 5001.0);
}

#[test]
fn default_start_stays_positive_unbounded() {
    // Without bounds the loss at ~1 K is ~1e-14 per frame
    let mut w = world(Params::original());
    for frame in 0..100_000 {
        w.tick(frame as f64);
    }
    assert!(w.state().kinetic_energy() > 0.0);
    assert!(w.temperature().is_finite());
}

#[test]
fn floor_holds_for_violent_starts() {
    let mut w = world(Params::default().with_initial_energy(1e6));
    for frame in 0..100 {
        w.tick(frame as f64 * FRAME_MS);
        assert!(w.state().kinetic_energy() >= 1e-6);
        assert!(w.radius() >= RADIUS_OFFSET && w.radius().is_finite());
        let c = w.sphere().inner;
        assert!(c.channels().iter().all(|v| (0.0..=255.0).contains(v)));
    }
}

#[test]
fn unbounded_euler_overshoots() {
    let mut w = world(Params::original().with_initial_energy(1e6));
    w.tick(0.0);
    assert!(w.state().kinetic_energy() < 0.0);
    // The mapper still answers with a defined color
    assert_eq!(color_for_temperature(w.temperature()).channels(), [0.0; 3]);
}

#[test]
fn pressure_squeezes_and_releases() {
    let mut w = world(Params::default());
    w.apply(Action::AddEnergy).unwrap();
    let relaxed = w.radius();

    for _ in 0..6 {
        assert_eq!(w.apply(Action::AddPressure), Ok(Cue::None));
    }
    assert_relative_eq!(w.pressure(), 3.0f64.exp(), max_relative = 1e-12);
    assert!(w.radius() < relaxed);
    assert_relative_eq!(w.radius(), radius(101.0, w.pressure()));

    w.apply(Action::ResetPressure).unwrap();
    assert_eq!(w.pressure(), 1.0);
    assert_eq!(w.radius(), relaxed);
}

#[test]
fn fixed_step_is_frame_rate_independent() {
    let params = Params::default()
        .with_initial_energy(5_000.0)
        .with_step_mode(StepMode::Fixed { step_ms: 5.0, max_steps: 16 });

    // One simulated second at 50 Hz and at 100 Hz
    let mut slow = world(params.clone());
    for i in 0..=50 {
        slow.tick(i as f64 * 20.0);
    }
    let mut fast = world(params);
    for i in 0..=100 {
        fast.tick(i as f64 * 10.0);
    }

    assert_relative_eq!(
        slow.state().kinetic_energy(),
        fast.state().kinetic_energy(),
        max_relative = 1e-3
    );
}

#[test]
fn noise_changes_every_frame() {
    let mut w = world(Params::default().with_noise_density(0.5));
    w.tick(0.0);
    let a = w.noise().bytes().to_vec();
    w.tick(FRAME_MS);
    assert_ne!(a, w.noise().bytes());
}
