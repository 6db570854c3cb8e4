// Level in, edges out. One call to `update` per polled frame.

// Raw level reported for a button on a given frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Pressed,
    Released,
}

impl From<bool> for ButtonAction {
    fn from(pressed: bool) -> Self {
        if pressed {
            ButtonAction::Pressed
        } else {
            ButtonAction::Released
        }
    }
}

/// Pressed/released tracking with edge detection across polling calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    pressed: bool,
    just_pressed: bool,
    just_released: bool,
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the state by one frame. Returns true if the level changed.
    pub fn update(&mut self, action: ButtonAction) -> bool {
        self.just_pressed = false;
        self.just_released = false;

        match action {
            ButtonAction::Pressed => {
                let changed = !self.pressed;
                self.just_pressed = changed;
                self.pressed = true;
                changed
            }
            ButtonAction::Released => {
                let changed = self.pressed;
                self.just_released = changed;
                self.pressed = false;
                changed
            }
        }
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn just_pressed(&self) -> bool {
        self.just_pressed
    }

    pub fn just_released(&self) -> bool {
        self.just_released
    }
}
