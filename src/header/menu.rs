/// Mobile navigation panel plus the background scroll lock it holds while open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    open: bool,
    /// Body `overflow` value captured when the lock was taken.
    saved_overflow: Option<String>,
}

/// What the DOM has to do after a menu transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEffect {
    /// Lock background scrolling.
    Opened,
    /// Put the body `overflow` back to this value (empty means unset).
    Closed { restore_overflow: String },
    Unchanged,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `current_overflow` is the body's inline overflow at the moment of the click.
    pub fn toggle(&mut self, current_overflow: &str) -> MenuEffect {
        if self.open {
            self.close()
        } else {
            self.open = true;
            self.saved_overflow = Some(current_overflow.to_string());
            MenuEffect::Opened
        }
    }

    pub fn close(&mut self) -> MenuEffect {
        if !self.open {
            return MenuEffect::Unchanged;
        }
        self.open = false;
        MenuEffect::Closed {
            restore_overflow: self.saved_overflow.take().unwrap_or_default(),
        }
    }

    /// Click somewhere on the document that was not the toggle.
    pub fn outside_click(&mut self, inside_menu: bool, inside_toggle: bool) -> MenuEffect {
        if self.open && !inside_menu && !inside_toggle {
            self.close()
        } else {
            MenuEffect::Unchanged
        }
    }
}
