use aircon_engine::coords::Vec2;

/// Input levels and elapsed time for one frame, as sampled by the driver.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame. Never negative.
    pub dt: f32,
    /// Pointer position in logical pixels.
    pub pointer: Vec2,
    pub mouse_down: bool,
    pub up: bool,
    pub down: bool,
    pub space: bool,
}

/// Levels from the previous frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Latches {
    pub mouse_down: bool,
    pub up: bool,
    pub down: bool,
    pub space: bool,
}

/// Rising edges for the current frame: down now, up last frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Edges {
    pub click: bool,
    pub up: bool,
    pub down: bool,
    pub space: bool,
}

impl Latches {
    /// Edges of `input` against these latches. Does not modify the latches;
    /// see [`Latches::commit`].
    pub fn edges(&self, input: &FrameInput) -> Edges {
        Edges {
            click: input.mouse_down && !self.mouse_down,
            up: input.up && !self.up,
            down: input.down && !self.down,
            space: input.space && !self.space,
        }
    }

    /// Stores this frame's levels. Called once, after every consumer ran.
    pub fn commit(&mut self, input: &FrameInput) {
        *self = Latches {
            mouse_down: input.mouse_down,
            up: input.up,
            down: input.down,
            space: input.space,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_fires_only_on_transition() {
        let mut latches = Latches::default();
        let held = FrameInput { up: true, ..Default::default() };

        assert!(latches.edges(&held).up);
        latches.commit(&held);
        assert!(!latches.edges(&held).up);

        let released = FrameInput::default();
        latches.commit(&released);
        assert!(latches.edges(&held).up);
    }

    #[test]
    fn edges_are_independent() {
        let latches = Latches { up: true, ..Default::default() };
        let input = FrameInput { up: true, down: true, mouse_down: true, ..Default::default() };
        let e = latches.edges(&input);
        assert!(!e.up);
        assert!(e.down);
        assert!(e.click);
        assert!(!e.space);
    }
}
