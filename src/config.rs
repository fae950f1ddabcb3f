// config.rs - Simulation parameters
//
// Physical constants, input step sizes, drift bounds and the stepping mode.
// Params::default() is the bounded variant; Params::original() reproduces the
// unbounded, frame-coupled behaviour of the first version of the page.

use crate::error::ConfigError;

/// Stefan-Boltzmann-like radiative constant
pub const SIGMA: f64 = 5.67e-8;

/// How physics steps relate to rendered frames
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepMode {
    /// One Euler step per rendered frame, whatever the refresh rate
    FrameCoupled,
    /// Steps of `step_ms` wall-clock milliseconds, at most `max_steps` per frame
    Fixed { step_ms: f64, max_steps: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    /// Euler step
    pub dt: f64,
    pub mass: f64,
    pub initial_energy: f64,
    pub sigma: f64,

    /// Energy added by one "add energy" press
    pub energy_step: f64,
    /// Pressure multiplier of one "add pressure" press
    pub pressure_factor: f64,

    /// Kinetic energy never drops below this (None = unbounded)
    pub energy_floor: Option<f64>,
    /// Imposed pressure never rises above this (None = unbounded)
    pub pressure_ceiling: Option<f64>,

    pub step_mode: StepMode,

    /// Probability that a noise pixel lights up in a frame
    pub noise_density: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            dt: 1e-9,
            mass: 1.0,
            initial_energy: 1.0,
            sigma: SIGMA,
            energy_step: 100.0,
            pressure_factor: 0.5f64.exp(),
            energy_floor: Some(1e-6),
            pressure_ceiling: Some(1e12),
            step_mode: StepMode::FrameCoupled,
            noise_density: 0.01,
        }
    }
}

impl Params {
    /// Unbounded drift, one step per frame
    pub fn original() -> Self {
        Self {
            energy_floor: None,
            pressure_ceiling: None,
            ..Self::default()
        }
    }

    pub fn with_step_mode(mut self, mode: StepMode) -> Self {
        self.step_mode = mode;
        self
    }

    pub fn with_initial_energy(mut self, energy: f64) -> Self {
        self.initial_energy = energy;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_bounds(mut self, energy_floor: Option<f64>, pressure_ceiling: Option<f64>) -> Self {
        self.energy_floor = energy_floor;
        self.pressure_ceiling = pressure_ceiling;
        self
    }

    pub fn with_noise_density(mut self, density: f64) -> Self {
        self.noise_density = density;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("dt", self.dt)?;
        positive("mass", self.mass)?;
        positive("initial_energy", self.initial_energy)?;
        positive("sigma", self.sigma)?;
        positive("energy_step", self.energy_step)?;
        positive("pressure_factor", self.pressure_factor)?;

        if !(0.0..=1.0).contains(&self.noise_density) {
            return Err(ConfigError::NoiseDensity(self.noise_density));
        }

        if let Some(floor) = self.energy_floor {
            if !floor.is_finite() || floor <= 0.0 {
                return Err(ConfigError::EnergyFloor(floor));
            }
            if self.initial_energy < floor {
                return Err(ConfigError::EnergyBelowFloor { energy: self.initial_energy, floor });
            }
        }

        if let Some(ceiling) = self.pressure_ceiling {
            // NaN fails the comparison too
            if !(ceiling >= 1.0) {
                return Err(ConfigError::PressureCeiling(ceiling));
            }
        }

        if let StepMode::Fixed { step_ms, max_steps } = self.step_mode {
            positive("step_ms", step_ms)?;
            if max_steps == 0 {
                return Err(ConfigError::ZeroMaxSteps);
            }
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Params::default().validate(), Ok(()));
        assert_eq!(Params::original().validate(), Ok(()));
    }

    #[test]
    fn original_preset_drops_bounds_only() {
        let p = Params::original();
        assert_eq!(p.energy_floor, None);
        assert_eq!(p.pressure_ceiling, None);
        assert_eq!(p.step_mode, StepMode::FrameCoupled);
        assert_eq!(p.dt, Params::default().dt);
    }

    #[test]
    fn rejects_bad_constants() {
        let p = Params::default().with_mass(0.0);
        assert_eq!(p.validate(), Err(ConfigError::NonPositive { name: "mass", value: 0.0 }));

        let p = Params::default().with_noise_density(1.5);
        assert_eq!(p.validate(), Err(ConfigError::NoiseDensity(1.5)));

        let p = Params::default().with_bounds(Some(1e-6), Some(0.5));
        assert_eq!(p.validate(), Err(ConfigError::PressureCeiling(0.5)));

        let p = Params::default().with_bounds(Some(2.0), None);
        assert_eq!(p.validate(), Err(ConfigError::EnergyBelowFloor { energy: 1.0, floor: 2.0 }));

        let p = Params::default().with_step_mode(StepMode::Fixed { step_ms: 16.0, max_steps: 0 });
        assert_eq!(p.validate(), Err(ConfigError::ZeroMaxSteps));
    }

    #[test]
    fn pressure_factor_is_root_e() {
        assert!((Params::default().pressure_factor - 1.6487212707).abs() < 1e-9);
    }
}
