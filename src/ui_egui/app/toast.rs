//! Short-lived feedback messages ("Bookings saved", "Export failed", ...).
//!
//! Toasts stack up from the bottom-right corner above the status bar and
//! fade out on their own.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

const TOAST_WIDTH: f32 = 340.0;
const TOAST_HEIGHT: f32 = 40.0;
const FADE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✗",
        }
    }

    /// Problems stay up longer than confirmations.
    pub fn duration(&self) -> Duration {
        match self {
            ToastLevel::Success | ToastLevel::Info => Duration::from_secs(3),
            ToastLevel::Warning | ToastLevel::Error => Duration::from_secs(6),
        }
    }

    pub fn colors(&self, is_dark_theme: bool) -> (Color32, Color32) {
        match (self, is_dark_theme) {
            (ToastLevel::Success, true) => (Color32::from_rgb(30, 70, 40), Color32::from_rgb(100, 220, 120)),
            (ToastLevel::Info, true) => (Color32::from_rgb(30, 50, 80), Color32::from_rgb(100, 180, 255)),
            (ToastLevel::Warning, true) => (Color32::from_rgb(80, 60, 20), Color32::from_rgb(255, 200, 80)),
            (ToastLevel::Error, true) => (Color32::from_rgb(80, 30, 30), Color32::from_rgb(255, 120, 120)),
            (ToastLevel::Success, false) => (Color32::from_rgb(220, 255, 220), Color32::from_rgb(30, 120, 50)),
            (ToastLevel::Info, false) => (Color32::from_rgb(220, 235, 255), Color32::from_rgb(30, 80, 150)),
            (ToastLevel::Warning, false) => (Color32::from_rgb(255, 245, 200), Color32::from_rgb(150, 100, 0)),
            (ToastLevel::Error, false) => (Color32::from_rgb(255, 220, 220), Color32::from_rgb(180, 40, 40)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.level.duration()
    }

    /// 1.0 until the last half second, then linearly down to 0.0.
    pub fn opacity(&self) -> f32 {
        let remaining = self.level.duration().saturating_sub(self.created_at.elapsed());
        (remaining.as_secs_f32() / FADE.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastLevel::Success));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastLevel::Info));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastLevel::Warning));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastLevel::Error));
    }

    #[cfg(test)]
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn render(&mut self, ctx: &Context, is_dark_theme: bool) {
        self.toasts.retain(|t| !t.is_expired());
        if self.toasts.is_empty() {
            return;
        }

        // Keep repainting while anything is fading
        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let margin = 10.0;
        let spacing = 5.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            let (bg, fg) = toast.level.colors(is_dark_theme);
            let bg = Color32::from_rgba_unmultiplied(bg.r(), bg.g(), bg.b(), (230.0 * opacity) as u8);
            let fg = Color32::from_rgba_unmultiplied(fg.r(), fg.g(), fg.b(), (255.0 * opacity) as u8);

            let y_offset = i as f32 * (TOAST_HEIGHT + spacing);
            let pos = Pos2::new(
                screen_rect.right() - TOAST_WIDTH - margin,
                // Above status bar
                screen_rect.bottom() - TOAST_HEIGHT - margin - y_offset - 30.0,
            );

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(bg)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, fg.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_width(TOAST_WIDTH - 24.0);
                            ui.horizontal_wrapped(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(fg).strong());
                                ui.label(RichText::new(&toast.message).color(fg));
                            });
                        });
                });
        }
    }
}
