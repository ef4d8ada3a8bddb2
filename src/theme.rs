use eframe::egui::{self, Color32};

/// Colors of one selectable theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub bg: Color32,
    pub text: Color32,
    pub input_bg: Color32,
    pub button_bg: Color32,
    pub primary_button_bg: Color32,
}

/// Used when the stored or selected name is unknown.
pub const DEFAULT_THEME: &str = "Dark Knight";

pub static THEMES: [Theme; 4] = [
    Theme {
        name: "Dark Knight",
        bg: Color32::from_rgb(26, 26, 51),
        text: Color32::from_rgb(255, 255, 255),
        input_bg: Color32::from_rgb(51, 51, 77),
        button_bg: Color32::from_rgb(77, 77, 102),
        primary_button_bg: Color32::from_rgb(51, 153, 51),
    },
    Theme {
        name: "Arctic Light",
        bg: Color32::from_rgb(242, 242, 255),
        text: Color32::from_rgb(0, 0, 0),
        input_bg: Color32::from_rgb(255, 255, 255),
        button_bg: Color32::from_rgb(204, 217, 230),
        primary_button_bg: Color32::from_rgb(77, 179, 77),
    },
    Theme {
        name: "Ocean Blue",
        bg: Color32::from_rgb(0x00, 0x3B, 0x46),
        text: Color32::from_rgb(0xEF, 0xEF, 0xEF),
        input_bg: Color32::from_rgb(0x07, 0x57, 0x5B),
        button_bg: Color32::from_rgb(0x66, 0xA5, 0xAD),
        primary_button_bg: Color32::from_rgb(0xC4, 0xDF, 0xE6),
    },
    Theme {
        name: "Sunset Orange",
        bg: Color32::from_rgb(0x33, 0x33, 0x33),
        text: Color32::from_rgb(0xFF, 0xFF, 0xFF),
        input_bg: Color32::from_rgb(0x55, 0x55, 0x55),
        button_bg: Color32::from_rgb(0xD9, 0x5D, 0x39),
        primary_button_bg: Color32::from_rgb(0xF0, 0xA2, 0x02),
    },
];

impl Theme {
    /// Looks a theme up by name, falling back to [`DEFAULT_THEME`].
    pub fn named(name: &str) -> &'static Theme {
        THEMES
            .iter()
            .find(|theme| theme.name == name)
            .unwrap_or(&THEMES[0])
    }

    pub fn is_dark(&self) -> bool {
        let [r, g, b, _] = self.bg.to_array();
        let luma = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000;
        luma < 128
    }

    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = if self.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.panel_fill = self.bg;
        visuals.window_fill = self.bg;
        visuals.extreme_bg_color = self.input_bg;
        visuals.override_text_color = Some(self.text);
        visuals.widgets.inactive.bg_fill = self.button_bg;
        visuals.widgets.inactive.weak_bg_fill = self.button_bg;
        visuals
    }
}

// Same in every theme
pub const STOP_BUTTON_BG: Color32 = Color32::from_rgb(0xD9, 0x39, 0x39);
pub const BUTTON_MAIN_TEXT: Color32 = Color32::from_rgb(255, 255, 255);
pub const TEXT_ERROR: Color32 = Color32::from_rgb(255, 80, 80);
pub const BORDER_COLOR: Color32 = Color32::from_rgba_premultiplied(60, 60, 67, 15);

// Sizing & Spacing
pub const ROUNDING_FRAME: f32 = 4.0;
pub const ROUNDING_BUTTON: f32 = 6.0;
pub const MIN_SIZE_BUTTON: egui::Vec2 = egui::Vec2::new(100.0, 40.0);

pub const BUTTON_FONT_SIZE: f32 = 16.0;
