//! Keyboard input and page shortcuts.

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A key press as reported by the browser (`KeyboardEvent.key`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyPress {
    #[must_use]
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self { key: key.into(), modifiers }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape: close the mobile menu.
    CloseMenu,
    /// Ctrl+Shift+D: toggle the theme.
    ToggleTheme,
}

impl Shortcut {
    #[must_use]
    pub fn resolve(press: &KeyPress) -> Option<Self> {
        let mods = press.modifiers;
        if press.key == "Escape" {
            return Some(Self::CloseMenu);
        }
        if mods.ctrl && mods.shift && press.key.eq_ignore_ascii_case("d") {
            return Some(Self::ToggleTheme);
        }
        None
    }

    /// Whether the browser default must be suppressed for this shortcut.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::ToggleTheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl_shift() -> Modifiers {
        Modifiers { ctrl: true, shift: true, ..Default::default() }
    }

    #[test]
    fn escape_closes_menu() {
        let press = KeyPress::new("Escape", Modifiers::default());
        assert_eq!(Shortcut::resolve(&press), Some(Shortcut::CloseMenu));
        assert!(!Shortcut::CloseMenu.prevents_default());
    }

    #[test]
    fn ctrl_shift_d_toggles_theme() {
        assert_eq!(Shortcut::resolve(&KeyPress::new("D", ctrl_shift())), Some(Shortcut::ToggleTheme));
        assert_eq!(Shortcut::resolve(&KeyPress::new("d", ctrl_shift())), Some(Shortcut::ToggleTheme));
        assert!(Shortcut::ToggleTheme.prevents_default());
    }

    #[test]
    fn d_without_both_modifiers_is_ignored() {
        let ctrl_only = Modifiers { ctrl: true, ..Default::default() };
        let shift_only = Modifiers { shift: true, ..Default::default() };
        assert_eq!(Shortcut::resolve(&KeyPress::new("D", ctrl_only)), None);
        assert_eq!(Shortcut::resolve(&KeyPress::new("D", shift_only)), None);
        assert_eq!(Shortcut::resolve(&KeyPress::new("Enter", ctrl_shift())), None);
    }
}
