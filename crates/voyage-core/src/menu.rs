//! Mobile navigation panel state

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        *self == MenuState::Open
    }

    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Used when a link in the panel is followed
    pub fn close(self) -> Self {
        MenuState::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert!(menu.toggle().is_open());
        assert_eq!(menu.toggle().toggle(), MenuState::Closed);
    }

    #[test]
    fn test_close_is_idempotent() {
        assert_eq!(MenuState::Open.close(), MenuState::Closed);
        assert_eq!(MenuState::Closed.close(), MenuState::Closed);
    }
}
