// sim/ - Sphere physics
//
// Thermal state and the clock that decides how often it is stepped.

mod clock;
mod thermal;

pub use clock::FrameClock;
pub use thermal::{
    radiative_loss, radius, temperature, SimulationState, RADIUS_EXPONENT, RADIUS_OFFSET,
};
