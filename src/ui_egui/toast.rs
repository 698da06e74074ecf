//! Toast notifications for brief feedback messages.
//!
//! Non-blocking notices that stack in the bottom-right corner and fade
//! away. Every user-visible notice goes through here: the candidate cap,
//! validation failures, malformed-token recovery, link-copied confirmation.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

const TOAST_LIFETIME: Duration = Duration::from_secs(3);
const FADE_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✗",
        }
    }

    fn colors(&self, is_dark_theme: bool) -> (Color32, Color32) {
        // (background, text)
        if is_dark_theme {
            match self {
                ToastLevel::Success => (Color32::from_rgb(30, 70, 40), Color32::from_rgb(100, 220, 120)),
                ToastLevel::Warning => (Color32::from_rgb(80, 60, 20), Color32::from_rgb(255, 200, 80)),
                ToastLevel::Error => (Color32::from_rgb(80, 30, 30), Color32::from_rgb(255, 120, 120)),
            }
        } else {
            match self {
                ToastLevel::Success => (Color32::from_rgb(220, 255, 220), Color32::from_rgb(30, 120, 50)),
                ToastLevel::Warning => (Color32::from_rgb(255, 245, 200), Color32::from_rgb(150, 100, 0)),
                ToastLevel::Error => (Color32::from_rgb(255, 220, 220), Color32::from_rgb(180, 40, 40)),
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    level: ToastLevel,
    created_at: Instant,
}

impl Toast {
    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_LIFETIME
    }

    /// Opacity based on remaining time, for the fade out.
    fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed();
        let fade_start = TOAST_LIFETIME.saturating_sub(FADE_WINDOW);

        if elapsed >= TOAST_LIFETIME {
            0.0
        } else if elapsed >= fade_start {
            ((TOAST_LIFETIME - elapsed).as_secs_f32() / FADE_WINDOW.as_secs_f32()).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Manager for toast notifications.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    fn add(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toasts.push(Toast {
            message: message.into(),
            level,
            created_at: Instant::now(),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.add(message, ToastLevel::Success);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.add(message, ToastLevel::Warning);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.add(message, ToastLevel::Error);
    }

    /// Render all active toasts, dropping expired ones.
    pub fn render(&mut self, ctx: &Context, is_dark_theme: bool) {
        self.toasts.retain(|t| !t.is_expired());
        if self.toasts.is_empty() {
            return;
        }

        // Repaint while toasts animate
        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let toast_width = 300.0;
        let toast_height = 40.0;
        let margin = 10.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let y_offset = (i as f32) * (toast_height + 5.0);
            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.bottom() - toast_height - margin - y_offset,
            );

            let (bg, text) = toast.level.colors(is_dark_theme);
            let bg = Color32::from_rgba_unmultiplied(bg.r(), bg.g(), bg.b(), (230.0 * opacity) as u8);
            let text =
                Color32::from_rgba_unmultiplied(text.r(), text.g(), text.b(), (255.0 * opacity) as u8);

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(bg)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, text.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(text).strong());
                                ui.label(RichText::new(&toast.message).color(text));
                            });
                        });
                });
        }
    }
}
