use crate::input::Latches;

/// Lowest temperature either setpoint or reading may take.
pub const TEMP_MIN: f32 = -10.0;
/// Highest temperature either setpoint or reading may take.
pub const TEMP_MAX: f32 = 40.0;

/// Rates and step sizes of the simulation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tuning {
    /// Vent openness units per second.
    pub vent_anim_speed: f32,
    /// Degrees per second the reading moves toward the setpoint.
    pub temp_drift_speed: f32,
    /// Degrees per key press or button click.
    pub temp_change_step: f32,
    /// Bowl fraction added per whole second of running time.
    pub water_fill_per_second: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            vent_anim_speed: 1.5,
            temp_drift_speed: 0.8,
            temp_change_step: 1.0,
            water_fill_per_second: 0.1,
        }
    }
}

/// The simulation record.
///
/// One instance lives for the whole run, owned by the driver and passed by
/// `&mut` into the update functions once per frame.
///
/// Invariants after every update: both temperatures are in
/// [`TEMP_MIN`]..=[`TEMP_MAX`], `vent_openness` and `water_level` are in
/// `0..=1`, and a full bowl means `locked_by_full_bowl && !is_on`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub is_on: bool,
    pub locked_by_full_bowl: bool,
    pub vent_openness: f32,
    pub desired_temp: f32,
    pub current_temp: f32,
    pub water_level: f32,

    /// Running time not yet turned into whole water ticks.
    pub water_accumulator: f32,

    /// Input levels seen last frame, for edge detection.
    pub latches: Latches,

    pub tuning: Tuning,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl AppState {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            is_on: false,
            locked_by_full_bowl: false,
            vent_openness: 0.0,
            desired_temp: 24.0,
            current_temp: 30.0,
            water_level: 0.0,
            water_accumulator: 0.0,
            latches: Latches::default(),
            tuning,
        }
    }

    /// Running and not locked out: the vent opens, the reading drifts and
    /// the bowl fills only in this state.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.is_on && !self.locked_by_full_bowl
    }
}

/// Clamps a temperature to the supported range.
#[inline]
pub fn clamp_temp(t: f32) -> f32 {
    t.clamp(TEMP_MIN, TEMP_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_matches_power_on_defaults() {
        let s = AppState::default();
        assert!(!s.is_on);
        assert!(!s.locked_by_full_bowl);
        assert_eq!(s.vent_openness, 0.0);
        assert_eq!(s.desired_temp, 24.0);
        assert_eq!(s.current_temp, 30.0);
        assert_eq!(s.water_level, 0.0);
        assert_eq!(s.tuning, Tuning::default());
    }

    #[test]
    fn running_requires_power_and_no_lockout() {
        let mut s = AppState::default();
        assert!(!s.is_running());
        s.is_on = true;
        assert!(s.is_running());
        s.locked_by_full_bowl = true;
        assert!(!s.is_running());
    }

    #[test]
    fn clamp_temp_bounds() {
        assert_eq!(clamp_temp(-25.0), TEMP_MIN);
        assert_eq!(clamp_temp(55.0), TEMP_MAX);
        assert_eq!(clamp_temp(21.5), 21.5);
    }
}
