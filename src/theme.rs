//! Dark/light presentation modes and the class palette each one maps to.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class name put on the app root container.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Icon shown on the toggle button: the mode you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "sun",
            Theme::Light => "moon",
        }
    }

    pub fn palette(self) -> &'static Palette {
        Palette::for_theme(self)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Tailwind classes for every themed surface.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    /// Browser chrome color for the `theme-color` meta tag.
    pub theme_color: &'static str,
    pub shell: &'static str,
    pub sidebar: &'static str,
    pub brand: &'static str,
    pub nav_link: &'static str,
    pub theme_button: &'static str,
    pub field: &'static str,
    pub field_icon: &'static str,
    pub hint: &'static str,
    pub card: &'static str,
    pub card_art: &'static str,
    pub card_title: &'static str,
    pub card_subtitle: &'static str,
}

static DARK: Palette = Palette {
    theme_color: "#130f40",
    shell: "bg-gradient-to-br from-[#1a2a6c] via-[#b21f1f] to-[#fdbb2d] text-white",
    sidebar: "bg-[#130f40]",
    brand: "text-[#fdbb2d]",
    nav_link: "hover:text-[#fdbb2d]",
    theme_button: "text-yellow-300",
    field: "bg-[#3c40c6] text-white placeholder-gray-200",
    field_icon: "text-gray-200",
    hint: "text-gray-200",
    card: "bg-[#3c40c6]",
    card_art: "bg-gradient-to-tr from-[#fdbb2d] to-[#ff5e62]",
    card_title: "text-white",
    card_subtitle: "text-gray-200",
};

static LIGHT: Palette = Palette {
    theme_color: "#e5e7eb",
    shell: "bg-gradient-to-br from-white via-gray-100 to-gray-200 text-black",
    sidebar: "bg-gray-200",
    brand: "text-[#130f40]",
    nav_link: "hover:text-[#3c40c6]",
    theme_button: "text-gray-800",
    field: "bg-gray-300 text-black placeholder-gray-500",
    field_icon: "text-gray-600",
    hint: "text-gray-700",
    card: "bg-gray-100",
    card_art: "bg-gray-300",
    card_title: "text-black",
    card_subtitle: "text-gray-600",
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::default().class_name(), "dark");
    }

    #[test]
    fn toggle_twice_is_identity() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn toggle_icon_follows_theme() {
        assert_eq!(Theme::Dark.toggle_icon(), "sun");
        assert_eq!(Theme::Light.toggle_icon(), "moon");
    }

    #[test]
    fn display_is_class_name() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn theme_color_follows_theme() {
        assert_eq!(Theme::Dark.palette().theme_color, "#130f40");
        assert_eq!(Theme::Light.palette().theme_color, "#e5e7eb");
        assert_eq!(Theme::Light.toggled().palette().theme_color, "#130f40");
    }

    #[test]
    fn palettes_differ_per_theme() {
        let dark = Theme::Dark.palette();
        let light = Theme::Light.palette();
        assert_ne!(dark, light);
        assert!(dark.shell.contains("text-white"));
        assert!(light.shell.contains("text-black"));
    }
}
