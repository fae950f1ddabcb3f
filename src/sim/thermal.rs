// thermal.rs - Kinetic energy, pressure and radiative loss
//
// The sphere is a lump of kinetic energy squeezed by an imposed pressure.
// Temperature, radius and loss are derived on demand; only energy and
// pressure are stored.

use std::f64::consts::PI;

use crate::config::Params;
use crate::error::SimError;

/// Deliberately not 1/3
pub const RADIUS_EXPONENT: f64 = 0.33;
/// Keeps the sphere visible as the bracketed term shrinks
pub const RADIUS_OFFSET: f64 = 10.0;

#[inline]
pub fn temperature(kinetic_energy: f64, mass: f64) -> f64 {
    kinetic_energy / mass
}

/// Radius for a temperature and pressure, evaluated as ((4T / P) * pi)^0.33 + 10
#[inline]
pub fn radius(temperature: f64, pressure: f64) -> f64 {
    (4.0 * temperature / pressure * PI).powf(RADIUS_EXPONENT) + RADIUS_OFFSET
}

/// Energy radiated during one step of length dt
#[inline]
pub fn radiative_loss(dt: f64, sigma: f64, temperature: f64, radius: f64) -> f64 {
    dt * sigma * temperature.powi(4) * radius.powi(2)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    mass: f64,
    kinetic_energy: f64,
    imposed_pressure: f64,
    dt: f64,
    sigma: f64,
    energy_floor: Option<f64>,
    pressure_ceiling: Option<f64>,
}

impl SimulationState {
    /// Params are assumed validated
    pub fn new(params: &Params) -> Self {
        Self {
            mass: params.mass,
            kinetic_energy: params.initial_energy,
            imposed_pressure: 1.0,
            dt: params.dt,
            sigma: params.sigma,
            energy_floor: params.energy_floor,
            pressure_ceiling: params.pressure_ceiling,
        }
    }

    pub fn mass(&self) -> f64 { self.mass }
    pub fn kinetic_energy(&self) -> f64 { self.kinetic_energy }
    pub fn imposed_pressure(&self) -> f64 { self.imposed_pressure }

    pub fn temperature(&self) -> f64 {
        temperature(self.kinetic_energy, self.mass)
    }

    pub fn radius(&self) -> f64 {
        radius(self.temperature(), self.imposed_pressure)
    }

    pub fn loss(&self) -> f64 {
        radiative_loss(self.dt, self.sigma, self.temperature(), self.radius())
    }

    pub fn add_energy(&mut self, amount: f64) -> Result<(), SimError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(SimError::InvalidEnergy(amount));
        }
        let next = self.kinetic_energy + amount;
        if !derived_finite(temperature(next, self.mass), self.imposed_pressure, self) {
            return Err(SimError::EnergyOutOfRange(next));
        }
        self.kinetic_energy = next;
        Ok(())
    }

    pub fn multiply_pressure(&mut self, factor: f64) -> Result<(), SimError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(SimError::InvalidPressureFactor(factor));
        }
        let mut p = self.imposed_pressure * factor;
        if let Some(ceiling) = self.pressure_ceiling {
            if p > ceiling {
                log::debug!("pressure {p:e} clamped to {ceiling:e}");
                p = ceiling;
            }
        }
        if !(p > 0.0) || !derived_finite(self.temperature(), p, self) {
            return Err(SimError::PressureOutOfRange(p));
        }
        self.imposed_pressure = p;
        Ok(())
    }

    pub fn reset_pressure(&mut self) {
        self.imposed_pressure = 1.0;
    }

    /// One forward-Euler step. Returns the energy actually removed.
    pub fn step(&mut self) -> f64 {
        let loss = self.loss();
        let mut next = self.kinetic_energy - loss;
        if let Some(floor) = self.energy_floor {
            if !(next >= floor) {
                log::trace!("kinetic energy {next:e} clamped to floor {floor:e}");
                next = floor.min(self.kinetic_energy);
            }
        }
        let removed = self.kinetic_energy - next;
        self.kinetic_energy = next;
        removed
    }
}

// Radius and loss overflow long before energy or pressure do
fn derived_finite(t: f64, pressure: f64, s: &SimulationState) -> bool {
    let r = radius(t, pressure);
    t.is_finite() && r.is_finite() && radiative_loss(s.dt, s.sigma, t, r).is_finite()
}
