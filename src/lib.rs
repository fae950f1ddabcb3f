use wasm_bindgen::prelude::*;

pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod scene;
pub mod sim;

#[cfg(target_arch = "wasm32")]
mod web;

use crate::config::Params;
use crate::error::{ConfigError, SimError};
use crate::input::{Action, Cue};
use crate::render::{NoiseField, SphereFrame};
use crate::sim::{FrameClock, SimulationState};

// ============================================================================
// LUMINARY - A glowing sphere that radiates away whatever energy it is given
// ============================================================================

#[wasm_bindgen]
pub struct Luminary {
    params: Params,
    state: SimulationState,
    clock: FrameClock,
    sphere: SphereFrame,
    noise: NoiseField,
    frames: u64,
}

#[wasm_bindgen]
impl Luminary {
    /// Default parameters; `w` x `h` is the noise surface in device pixels
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32, seed: u32) -> Self {
        Self::build(Params::default(), w, h, seed as u64)
    }

    /// Unbounded, frame-coupled variant
    pub fn original(w: u32, h: u32, seed: u32) -> Self {
        Self::build(Params::original(), w, h, seed as u64)
    }

    /// One animation frame: step physics, refresh the sphere, regenerate noise
    pub fn tick(&mut self, now_ms: f64) {
        for _ in 0..self.clock.steps(now_ms) {
            self.state.step();
        }
        self.sphere = SphereFrame::from_state(&self.state);
        self.noise.regenerate();
        self.frames += 1;
    }

    pub fn add_energy(&mut self) {
        self.act(Action::AddEnergy);
    }

    pub fn add_pressure(&mut self) {
        self.act(Action::AddPressure);
    }

    pub fn undo_pressure(&mut self) {
        self.act(Action::ResetPressure);
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.noise.resize(w, h);
    }

    /// Call when the page becomes visible again
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    pub fn temperature(&self) -> f64 { self.state.temperature() }
    pub fn radius(&self) -> f64 { self.state.radius() }
    pub fn loss(&self) -> f64 { self.state.loss() }
    pub fn pressure(&self) -> f64 { self.state.imposed_pressure() }
    pub fn sphere_color(&self) -> String { self.sphere.inner.to_css() }
    pub fn temperature_text(&self) -> String { format!("Core Temperature: {:.2} Kelvin", self.temperature()) }
    pub fn power_text(&self) -> String { format!("Power Emission: {:.2} Kilowatt", self.loss()) }

    // Accessors for the JS side
    pub fn noise_ptr(&self) -> *const u8 { self.noise.ptr() }
    pub fn noise_len(&self) -> usize { self.noise.len() }
    pub fn width(&self) -> u32 { self.noise.width() }
    pub fn height(&self) -> u32 { self.noise.height() }
}

impl Luminary {
    pub fn with_params(params: Params, w: u32, h: u32, seed: u64) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self::build(params, w, h, seed))
    }

    fn build(params: Params, w: u32, h: u32, seed: u64) -> Self {
        let state = SimulationState::new(&params);
        Self {
            clock: FrameClock::new(params.step_mode),
            sphere: SphereFrame::from_state(&state),
            noise: NoiseField::new(w, h, params.noise_density, seed),
            state,
            params,
            frames: 0,
        }
    }

    pub fn apply(&mut self, action: Action) -> Result<Cue, SimError> {
        match action {
            Action::AddEnergy => self.state.add_energy(self.params.energy_step)?,
            Action::AddPressure => self.state.multiply_pressure(self.params.pressure_factor)?,
            Action::ResetPressure => self.state.reset_pressure(),
            Action::PlayMusic => return Ok(Cue::PlayMusic),
        }
        Ok(Cue::None)
    }

    // Params are validated, so the configured steps cannot fail
    fn act(&mut self, action: Action) {
        if let Err(e) = self.apply(action) {
            log::warn!("{action:?} rejected: {e}");
        }
    }

    pub fn state(&self) -> &SimulationState { &self.state }
    pub fn sphere(&self) -> &SphereFrame { &self.sphere }
    pub fn noise(&self) -> &NoiseField { &self.noise }
    pub fn frames(&self) -> u64 { self.frames }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StepMode;

    #[test]
    fn buttons_drive_the_model() {
        let mut l = Luminary::new(16, 16, 1);
        l.add_energy();
        assert_eq!(l.temperature(), 101.0);

        l.add_pressure();
        l.add_pressure();
        assert!((l.pressure() - 1.0f64.exp()).abs() < 1e-12);

        l.undo_pressure();
        assert_eq!(l.pressure(), 1.0);
    }

    #[test]
    fn music_is_a_cue_not_a_mutation() {
        let mut l = Luminary::new(4, 4, 1);
        let before = l.state().clone();
        assert_eq!(l.apply(Action::PlayMusic), Ok(Cue::PlayMusic));
        assert_eq!(l.state(), &before);
        assert_eq!(l.apply(Action::AddEnergy), Ok(Cue::None));
    }

    #[test]
    fn tick_steps_and_redraws() {
        let mut l = Luminary::new(32, 32, 1);
        l.add_energy();
        let loss = l.loss();
        l.tick(16.0);
        assert_eq!(l.frames(), 1);
        assert_eq!(l.state().kinetic_energy(), 101.0 - loss);
        assert_eq!(l.sphere().radius, l.radius());
        assert_eq!(l.sphere_color(), l.sphere().inner.to_css());
    }

    #[test]
    fn readouts_use_two_decimals() {
        let mut l = Luminary::new(4, 4, 1);
        l.add_energy();
        assert_eq!(l.temperature_text(), "Core Temperature: 101.00 Kelvin");
        assert_eq!(l.power_text(), "Power Emission: 0.00 Kilowatt");
    }

    #[test]
    fn fixed_mode_waits_for_time() {
        let params = Params::default().with_step_mode(StepMode::Fixed { step_ms: 10.0, max_steps: 4 });
        let mut l = Luminary::with_params(params, 4, 4, 1).unwrap();
        l.tick(0.0);
        assert_eq!(l.state().kinetic_energy(), 1.0);
        l.tick(5.0);
        assert_eq!(l.state().kinetic_energy(), 1.0);
        l.tick(25.0);
        assert!(l.state().kinetic_energy() < 1.0);
    }

    #[test]
    fn hidden_time_is_not_replayed() {
        let params = Params::default().with_step_mode(StepMode::Fixed { step_ms: 10.0, max_steps: 1000 });
        let mut l = Luminary::with_params(params, 4, 4, 1).unwrap();
        l.add_energy();
        l.tick(0.0);

        // Ten seconds hidden, then the first visible frame
        l.reset_clock();
        l.tick(10_000.0);
        assert_eq!(l.state().kinetic_energy(), 101.0);
        l.tick(10_010.0);
        assert!(l.state().kinetic_energy() < 101.0);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = Params::default().with_noise_density(-0.1);
        assert!(Luminary::with_params(params, 4, 4, 1).is_err());
    }

    #[test]
    fn resize_follows_viewport() {
        let mut l = Luminary::new(4, 4, 1);
        l.resize(8, 2);
        assert_eq!((l.width(), l.height()), (8, 2));
        assert_eq!(l.noise_len(), 8 * 2 * 4);
    }
}
