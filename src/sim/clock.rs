// clock.rs - Frame to physics-step mapping
//
// Frame-coupled mode steps once per rendered frame, so the sphere cools
// faster on a 144 Hz display than on a 60 Hz one. Fixed mode accumulates
// wall-clock time and steps in fixed slices instead.

use crate::config::StepMode;

#[derive(Clone, Debug)]
pub struct FrameClock {
    mode: StepMode,
    last_ms: Option<f64>,
    acc_ms: f64,
}

impl FrameClock {
    pub fn new(mode: StepMode) -> Self {
        Self { mode, last_ms: None, acc_ms: 0.0 }
    }

    /// Number of Euler steps to run for a frame stamped `now_ms`
    pub fn steps(&mut self, now_ms: f64) -> u32 {
        match self.mode {
            StepMode::FrameCoupled => 1,
            StepMode::Fixed { step_ms, max_steps } => {
                let Some(last) = self.last_ms.replace(now_ms) else {
                    return 0;
                };

                // Timestamps can repeat or jump back after a tab switch
                self.acc_ms += (now_ms - last).max(0.0);

                let due = (self.acc_ms / step_ms).floor();
                if due > max_steps as f64 {
                    log::debug!("dropping {:.0} ms of step backlog", self.acc_ms);
                    self.acc_ms = 0.0;
                    return max_steps;
                }
                self.acc_ms -= due * step_ms;
                due as u32
            }
        }
    }

    /// Forget timing history so a long pause does not count as elapsed time
    pub fn reset(&mut self) {
        self.last_ms = None;
        self.acc_ms = 0.0;
    }
}
