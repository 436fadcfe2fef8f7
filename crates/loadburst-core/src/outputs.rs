//! Per-frame outputs from the driver.
//!
//! Drawing goes straight to the surface; what remains to report are the
//! discrete signals a host may care about (phase changes, cycle end).

use serde::{Deserialize, Serialize};

use crate::driver::Phase;

/// Discrete signals emitted while stepping.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DriverEvent {
    PhaseChanged { from: Phase, to: Phase },
    /// All particles finished; the driver rebuilt them and went back to
    /// Loading without re-arming the scheduler.
    CycleCompleted,
}

/// Outputs returned by `Driver::advance_frame()`, valid until the next call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<DriverEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: DriverEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
