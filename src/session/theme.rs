// SPDX-License-Identifier: MPL-2.0
//! Light/dark display flag.

/// Page display mode. Only rendering parameters depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeFlag {
    #[default]
    Light,
    Dark,
}

impl ThemeFlag {
    /// Flips to the other mode.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeFlag::Light => ThemeFlag::Dark,
            ThemeFlag::Dark => ThemeFlag::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeFlag::Dark
    }

    /// Opacity of the page background gradient.
    #[must_use]
    pub fn background_opacity(self) -> f32 {
        match self {
            ThemeFlag::Light => 1.0,
            ThemeFlag::Dark => 0.35,
        }
    }
}

impl From<bool> for ThemeFlag {
    fn from(dark: bool) -> Self {
        if dark {
            ThemeFlag::Dark
        } else {
            ThemeFlag::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        for start in [ThemeFlag::Light, ThemeFlag::Dark] {
            let mut flag = start;
            flag.toggle();
            assert_ne!(flag, start);
            flag.toggle();
            assert_eq!(flag, start);
        }
    }

    #[test]
    fn dark_mode_dims_the_background() {
        assert!(ThemeFlag::Dark.background_opacity() < ThemeFlag::Light.background_opacity());
    }

    #[test]
    fn from_bool_maps_dark() {
        assert!(ThemeFlag::from(true).is_dark());
        assert!(!ThemeFlag::from(false).is_dark());
    }
}
