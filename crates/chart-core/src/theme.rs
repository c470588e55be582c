// File: crates/chart-core/src/theme.rs
// Summary: Light/dark/slate theming for chart chrome (background, grid, axes, labels, legend).
// Series and wedge colors come from the spec and the default palette, never from the theme.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub legend_text: Color,
    pub placeholder_text: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from("#FFFFFF"),
            grid: Color::from("#E5E7EB"),
            axis_line: Color::from("#9CA3AF"),
            axis_label: Color::from("#6B7280"),
            legend_text: Color::from("#374151"),
            placeholder_text: Color::from("#9CA3AF"),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from("#121214"),
            grid: Color::from("#28282D"),
            axis_line: Color::from("#B4B4BE"),
            axis_label: Color::from("#D2D2DC"),
            legend_text: Color::from("#EBEBF5"),
            placeholder_text: Color::from("#96969F"),
        }
    }

    pub fn slate() -> Self {
        Self {
            name: "slate",
            background: Color::from("#0F172A"), // slate-900
            grid: Color::from("#1E293B"),       // slate-800
            axis_line: Color::from("#64748B"),  // slate-500
            axis_label: Color::from("#94A3B8"), // slate-400
            legend_text: Color::from("#E2E8F0"), // slate-200
            placeholder_text: Color::from("#64748B"),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::slate()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
