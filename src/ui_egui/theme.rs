//! Colours for the booking grid and calendar panel.

use egui::Color32;

use crate::models::settings::ThemePreference;

#[derive(Debug, Clone, PartialEq)]
pub struct BookingTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,
    /// Fill behind a slot that holds a booking
    pub booked_cell: Color32,
    /// Fill behind free slots in today's column
    pub today_column: Color32,
    /// Today's day name and calendar number
    pub today_text: Color32,
    pub secondary_text: Color32,
}

impl BookingTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            booked_cell: Color32::from_rgb(220, 235, 255),
            today_column: Color32::from_rgb(245, 248, 240),
            today_text: Color32::from_rgb(50, 150, 50),
            secondary_text: Color32::from_gray(100),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            booked_cell: Color32::from_rgb(40, 60, 90),
            today_column: Color32::from_rgb(38, 44, 36),
            today_text: Color32::from_rgb(100, 220, 120),
            secondary_text: Color32::from_gray(160),
        }
    }

    /// Resolve the configured preference, asking the OS when set to system.
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_preferences_are_honoured() {
        assert!(!BookingTheme::for_preference(ThemePreference::Light).is_dark);
        assert!(BookingTheme::for_preference(ThemePreference::Dark).is_dark);
    }

    #[test]
    fn booked_cells_stand_out_from_today_column() {
        for theme in [BookingTheme::light(), BookingTheme::dark()] {
            assert_ne!(theme.booked_cell, theme.today_column);
        }
    }
}
