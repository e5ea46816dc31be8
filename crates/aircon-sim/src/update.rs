//! Per-frame simulation updates.
//!
//! Each function mutates one concern of [`AppState`]. [`step`] runs them in
//! the fixed per-frame order and commits the input latches last.

use aircon_engine::coords::Vec2;
use aircon_engine::shape::CircleShape;

use crate::input::{Edges, FrameInput};
use crate::layout::Layout;
use crate::state::{AppState, clamp_temp};

/// Water level within this distance of full counts as full.
const FULL_EPSILON: f32 = 1e-4;

/// Water accrues in whole ticks of this many seconds.
const WATER_TICK_SECS: f32 = 1.0;

/// Advances the simulation by one frame.
///
/// Order: power toggle, arrow button, keyboard setpoint, bowl reset, vent,
/// temperature drift, water. Edges are taken against last frame's levels and
/// the latches are updated once at the end.
pub fn step(state: &mut AppState, input: &FrameInput, layout: &Layout) {
    let edges = state.latches.edges(input);
    let dt = input.dt.max(0.0);

    handle_power_toggle(state, edges.click, input.pointer, &layout.lamp);
    handle_arrow_button(state, edges.click, input.pointer, layout);
    handle_temperature_input(state, &edges);
    if edges.space {
        reset_water(state);
    }
    update_vent(state, dt);
    update_temperature(state, dt);
    update_water(state, dt);

    state.latches.commit(input);
}

/// Flips power on a click inside the lamp. Ignored while locked out.
pub fn handle_power_toggle(state: &mut AppState, clicked: bool, pointer: Vec2, lamp: &CircleShape) {
    if !clicked || state.locked_by_full_bowl || !lamp.contains(pointer) {
        return;
    }
    state.is_on = !state.is_on;
    log::debug!("power {}", if state.is_on { "on" } else { "off" });
}

/// Steps the setpoint on a click in either half of the arrow button.
/// Ignored while locked out.
pub fn handle_arrow_button(state: &mut AppState, clicked: bool, pointer: Vec2, layout: &Layout) {
    if !clicked || state.locked_by_full_bowl {
        return;
    }
    let step = state.tuning.temp_change_step;
    if layout.arrow_up_zone().contains(pointer) {
        state.desired_temp = clamp_temp(state.desired_temp + step);
    } else if layout.arrow_down_zone().contains(pointer) {
        state.desired_temp = clamp_temp(state.desired_temp - step);
    }
}

/// Steps the setpoint once per Up/Down press. Both in one frame cancel.
pub fn handle_temperature_input(state: &mut AppState, edges: &Edges) {
    let step = state.tuning.temp_change_step;
    let mut desired = state.desired_temp;
    if edges.up {
        desired += step;
    }
    if edges.down {
        desired -= step;
    }
    state.desired_temp = clamp_temp(desired);
}

/// Empties the bowl and lifts the lockout. Power stays off.
pub fn reset_water(state: &mut AppState) {
    if state.locked_by_full_bowl || state.water_level > 0.0 {
        log::info!("bowl emptied");
    }
    state.water_level = 0.0;
    state.locked_by_full_bowl = false;
}

/// Moves the vent toward open while running, toward closed otherwise, at
/// `vent_anim_speed` per second.
pub fn update_vent(state: &mut AppState, dt: f32) {
    let target = if state.is_running() { 1.0 } else { 0.0 };
    let delta = state.tuning.vent_anim_speed * dt;
    state.vent_openness = if state.vent_openness < target {
        (state.vent_openness + delta).min(target)
    } else {
        (state.vent_openness - delta).max(target)
    };
}

/// Drifts the reading toward the setpoint while running. Snaps onto the
/// setpoint when the remaining gap fits in one step.
pub fn update_temperature(state: &mut AppState, dt: f32) {
    if !state.is_running() {
        return;
    }
    let diff = state.desired_temp - state.current_temp;
    let step = state.tuning.temp_drift_speed * dt;
    state.current_temp = if diff.abs() <= step {
        state.desired_temp
    } else {
        state.current_temp + step.copysign(diff)
    };
    state.current_temp = clamp_temp(state.current_temp);
}

/// Fills the bowl by `water_fill_per_second` per whole second of running
/// time. A full bowl powers the unit off and locks it out.
pub fn update_water(state: &mut AppState, dt: f32) {
    if !state.is_running() {
        return;
    }
    state.water_accumulator += dt;
    while state.water_accumulator >= WATER_TICK_SECS {
        state.water_accumulator -= WATER_TICK_SECS;
        state.water_level = (state.water_level + state.tuning.water_fill_per_second).min(1.0);
        if state.water_level >= 1.0 - FULL_EPSILON {
            state.water_level = 1.0;
            state.water_accumulator = 0.0;
            state.is_on = false;
            state.locked_by_full_bowl = true;
            log::info!("bowl full, unit locked out");
            break;
        }
    }
}
