// Theme system for the TUI
//
// Provides customizable color themes that can be switched at runtime.
// Each theme defines colors for the chrome plus the four keycap classes
// (digit, function, accent equals, danger clear) and their hover/pressed
// shades.

use crate::engine::ButtonClass;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Monokai,
    Dracula,
    Nord,
    Solarized,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Monokai,
            ThemeKind::Dracula,
            ThemeKind::Nord,
            ThemeKind::Solarized,
        ]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get the previous theme in the cycle
    pub fn prev(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + themes.len() - 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Monokai => "Monokai",
            ThemeKind::Dracula => "Dracula",
            ThemeKind::Nord => "Nord",
            ThemeKind::Solarized => "Solarized",
        }
    }

    /// Resolve a configured theme name; unknown names fall back to the
    /// default, the way a missing background image degrades to a plain color
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Monokai => Theme::monokai(),
            ThemeKind::Dracula => Theme::dracula(),
            ThemeKind::Nord => Theme::nord(),
            ThemeKind::Solarized => Theme::solarized(),
        }
    }
}

/// Color pair for one keycap class, with its interaction states
#[derive(Debug, Clone, Copy)]
pub struct KeyColors {
    pub fg: Color,
    pub bg: Color,
    /// Mouse-over shade
    pub hover_bg: Color,
    /// Flash while activated
    pub pressed_bg: Color,
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Display field
    pub display_fg: Color,
    pub display_bg: Color,
    /// Pending-operation indicator in the display corner
    pub display_pending: Color,

    // Keycap classes
    pub key_digit: KeyColors,
    pub key_function: KeyColors,
    pub key_accent: KeyColors,
    pub key_danger: KeyColors,

    // Tape panel
    pub tape_expression: Color,
    pub tape_result: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,

            title: Color::Cyan,
            status_bar: Color::Green,

            display_fg: Color::White,
            display_bg: Color::Reset,
            display_pending: Color::Yellow,

            key_digit: KeyColors {
                fg: Color::White,
                bg: Color::Reset,
                hover_bg: Color::DarkGray,
                pressed_bg: Color::Gray,
            },
            key_function: KeyColors {
                fg: Color::Gray,
                bg: Color::Reset,
                hover_bg: Color::DarkGray,
                pressed_bg: Color::Gray,
            },
            key_accent: KeyColors {
                fg: Color::Black,
                bg: Color::Cyan,
                hover_bg: Color::LightCyan,
                pressed_bg: Color::Blue,
            },
            key_danger: KeyColors {
                fg: Color::Black,
                bg: Color::Red,
                hover_bg: Color::LightRed,
                pressed_bg: Color::Magenta,
            },

            tape_expression: Color::Gray,
            tape_result: Color::White,
            selected_bg: Color::DarkGray,
            selected_fg: Color::Yellow,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,

            title: Color::Blue,
            status_bar: Color::DarkGray,

            display_fg: Color::Rgb(50, 50, 50),
            display_bg: Color::Rgb(240, 240, 240),
            display_pending: Color::Rgb(184, 134, 11),

            key_digit: KeyColors {
                fg: Color::Black,
                bg: Color::Rgb(255, 255, 255),
                hover_bg: Color::Rgb(200, 200, 200),
                pressed_bg: Color::Rgb(170, 170, 170),
            },
            key_function: KeyColors {
                fg: Color::Black,
                bg: Color::Rgb(230, 230, 230),
                hover_bg: Color::Rgb(210, 210, 210),
                pressed_bg: Color::Rgb(180, 180, 180),
            },
            key_accent: KeyColors {
                fg: Color::White,
                bg: Color::Rgb(0, 120, 215),
                hover_bg: Color::Rgb(40, 150, 235),
                pressed_bg: Color::Rgb(0, 90, 170),
            },
            key_danger: KeyColors {
                fg: Color::White,
                bg: Color::Rgb(255, 100, 100),
                hover_bg: Color::Rgb(255, 130, 130),
                pressed_bg: Color::Rgb(210, 70, 70),
            },

            tape_expression: Color::DarkGray,
            tape_result: Color::Black,
            selected_bg: Color::LightBlue,
            selected_fg: Color::Black,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,
        }
    }

    /// Monokai theme
    pub fn monokai() -> Self {
        Self {
            bg: Color::Rgb(39, 40, 34),
            fg: Color::Rgb(248, 248, 242),
            border: Color::Rgb(117, 113, 94),
            border_focused: Color::Rgb(166, 226, 46),

            title: Color::Rgb(166, 226, 46),
            status_bar: Color::Rgb(102, 217, 239),

            display_fg: Color::Rgb(248, 248, 242),
            display_bg: Color::Rgb(49, 50, 44),
            display_pending: Color::Rgb(230, 219, 116),

            key_digit: KeyColors {
                fg: Color::Rgb(248, 248, 242),
                bg: Color::Rgb(49, 50, 44),
                hover_bg: Color::Rgb(73, 72, 62),
                pressed_bg: Color::Rgb(95, 94, 80),
            },
            key_function: KeyColors {
                fg: Color::Rgb(200, 196, 180),
                bg: Color::Rgb(43, 44, 38),
                hover_bg: Color::Rgb(63, 62, 54),
                pressed_bg: Color::Rgb(85, 84, 72),
            },
            key_accent: KeyColors {
                fg: Color::Rgb(39, 40, 34),
                bg: Color::Rgb(102, 217, 239),
                hover_bg: Color::Rgb(140, 230, 245),
                pressed_bg: Color::Rgb(80, 180, 200),
            },
            key_danger: KeyColors {
                fg: Color::Rgb(248, 248, 242),
                bg: Color::Rgb(249, 38, 114),
                hover_bg: Color::Rgb(252, 90, 150),
                pressed_bg: Color::Rgb(200, 30, 95),
            },

            tape_expression: Color::Rgb(117, 113, 94),
            tape_result: Color::Rgb(248, 248, 242),
            selected_bg: Color::Rgb(73, 72, 62),
            selected_fg: Color::Rgb(230, 219, 116),

            log_error: Color::Rgb(249, 38, 114),
            log_warn: Color::Rgb(230, 219, 116),
            log_info: Color::Rgb(102, 217, 239),
            log_debug: Color::Rgb(117, 113, 94),
            log_trace: Color::Rgb(117, 113, 94),
        }
    }

    /// Dracula theme
    pub fn dracula() -> Self {
        Self {
            bg: Color::Rgb(40, 42, 54),
            fg: Color::Rgb(248, 248, 242),
            border: Color::Rgb(68, 71, 90),
            border_focused: Color::Rgb(189, 147, 249),

            title: Color::Rgb(139, 233, 253),
            status_bar: Color::Rgb(80, 250, 123),

            display_fg: Color::Rgb(248, 248, 242),
            display_bg: Color::Rgb(50, 52, 66),
            display_pending: Color::Rgb(241, 250, 140),

            key_digit: KeyColors {
                fg: Color::Rgb(248, 248, 242),
                bg: Color::Rgb(50, 52, 66),
                hover_bg: Color::Rgb(68, 71, 90),
                pressed_bg: Color::Rgb(98, 102, 128),
            },
            key_function: KeyColors {
                fg: Color::Rgb(189, 147, 249),
                bg: Color::Rgb(44, 46, 58),
                hover_bg: Color::Rgb(60, 63, 80),
                pressed_bg: Color::Rgb(86, 90, 114),
            },
            key_accent: KeyColors {
                fg: Color::Rgb(40, 42, 54),
                bg: Color::Rgb(139, 233, 253),
                hover_bg: Color::Rgb(170, 240, 255),
                pressed_bg: Color::Rgb(110, 190, 210),
            },
            key_danger: KeyColors {
                fg: Color::Rgb(248, 248, 242),
                bg: Color::Rgb(255, 85, 85),
                hover_bg: Color::Rgb(255, 120, 120),
                pressed_bg: Color::Rgb(205, 65, 65),
            },

            tape_expression: Color::Rgb(98, 114, 164),
            tape_result: Color::Rgb(248, 248, 242),
            selected_bg: Color::Rgb(68, 71, 90),
            selected_fg: Color::Rgb(241, 250, 140),

            log_error: Color::Rgb(255, 85, 85),
            log_warn: Color::Rgb(241, 250, 140),
            log_info: Color::Rgb(139, 233, 253),
            log_debug: Color::Rgb(98, 114, 164),
            log_trace: Color::Rgb(68, 71, 90),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(236, 239, 244),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208),

            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(163, 190, 140),

            display_fg: Color::Rgb(236, 239, 244),
            display_bg: Color::Rgb(59, 66, 82),
            display_pending: Color::Rgb(235, 203, 139),

            key_digit: KeyColors {
                fg: Color::Rgb(236, 239, 244),
                bg: Color::Rgb(59, 66, 82),
                hover_bg: Color::Rgb(67, 76, 94),
                pressed_bg: Color::Rgb(86, 97, 120),
            },
            key_function: KeyColors {
                fg: Color::Rgb(129, 161, 193),
                bg: Color::Rgb(52, 58, 72),
                hover_bg: Color::Rgb(62, 70, 86),
                pressed_bg: Color::Rgb(80, 90, 110),
            },
            key_accent: KeyColors {
                fg: Color::Rgb(46, 52, 64),
                bg: Color::Rgb(136, 192, 208),
                hover_bg: Color::Rgb(160, 210, 225),
                pressed_bg: Color::Rgb(108, 155, 170),
            },
            key_danger: KeyColors {
                fg: Color::Rgb(236, 239, 244),
                bg: Color::Rgb(191, 97, 106),
                hover_bg: Color::Rgb(210, 125, 133),
                pressed_bg: Color::Rgb(155, 75, 83),
            },

            tape_expression: Color::Rgb(76, 86, 106),
            tape_result: Color::Rgb(236, 239, 244),
            selected_bg: Color::Rgb(67, 76, 94),
            selected_fg: Color::Rgb(235, 203, 139),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
            log_trace: Color::Rgb(59, 66, 82),
        }
    }

    /// Solarized dark theme
    pub fn solarized() -> Self {
        Self {
            bg: Color::Rgb(0, 43, 54),
            fg: Color::Rgb(131, 148, 150),
            border: Color::Rgb(88, 110, 117),
            border_focused: Color::Rgb(38, 139, 210),

            title: Color::Rgb(38, 139, 210),
            status_bar: Color::Rgb(133, 153, 0),

            display_fg: Color::Rgb(147, 161, 161),
            display_bg: Color::Rgb(7, 54, 66),
            display_pending: Color::Rgb(181, 137, 0),

            key_digit: KeyColors {
                fg: Color::Rgb(147, 161, 161),
                bg: Color::Rgb(7, 54, 66),
                hover_bg: Color::Rgb(15, 65, 78),
                pressed_bg: Color::Rgb(30, 80, 94),
            },
            key_function: KeyColors {
                fg: Color::Rgb(42, 161, 152),
                bg: Color::Rgb(3, 48, 60),
                hover_bg: Color::Rgb(12, 60, 73),
                pressed_bg: Color::Rgb(25, 75, 88),
            },
            key_accent: KeyColors {
                fg: Color::Rgb(0, 43, 54),
                bg: Color::Rgb(38, 139, 210),
                hover_bg: Color::Rgb(70, 160, 225),
                pressed_bg: Color::Rgb(30, 110, 168),
            },
            key_danger: KeyColors {
                fg: Color::Rgb(253, 246, 227),
                bg: Color::Rgb(220, 50, 47),
                hover_bg: Color::Rgb(235, 85, 82),
                pressed_bg: Color::Rgb(175, 40, 38),
            },

            tape_expression: Color::Rgb(88, 110, 117),
            tape_result: Color::Rgb(147, 161, 161),
            selected_bg: Color::Rgb(7, 54, 66),
            selected_fg: Color::Rgb(181, 137, 0),

            log_error: Color::Rgb(220, 50, 47),
            log_warn: Color::Rgb(181, 137, 0),
            log_info: Color::Rgb(38, 139, 210),
            log_debug: Color::Rgb(88, 110, 117),
            log_trace: Color::Rgb(101, 123, 131),
        }
    }

    // Helper methods for creating styles

    /// Base style with theme foreground
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Border style, focused or not
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Title style
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Status bar style
    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }

    /// Selected tape entry style
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Colors for a keycap class
    pub fn key_colors(&self, class: ButtonClass) -> KeyColors {
        match class {
            ButtonClass::Digit => self.key_digit,
            ButtonClass::Function => self.key_function,
            ButtonClass::Accent => self.key_accent,
            ButtonClass::Danger => self.key_danger,
        }
    }

    /// Style for a keycap in the given interaction state
    pub fn key_style(&self, class: ButtonClass, hovered: bool, pressed: bool) -> Style {
        let colors = self.key_colors(class);
        let bg = if pressed {
            colors.pressed_bg
        } else if hovered {
            colors.hover_bg
        } else {
            colors.bg
        };
        Style::default()
            .fg(colors.fg)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a log level line
    pub fn log_style(&self, level: crate::logging::LogLevel) -> Style {
        use crate::logging::LogLevel;
        let color = match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug => self.log_debug,
            LogLevel::Trace => self.log_trace,
        };
        Style::default().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cycle_wraps_both_directions() {
        let mut kind = ThemeKind::default();
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::default());
        assert_eq!(ThemeKind::Dark.prev(), ThemeKind::Solarized);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(ThemeKind::from_name("nord"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name("MONOKAI"), ThemeKind::Monokai);
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(ThemeKind::from_name("gruvbox"), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name(""), ThemeKind::Dark);
    }
}
