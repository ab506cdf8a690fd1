//! Retro page furniture: banner, visitor counter, footer controls.

use crossbeam_channel::Sender;
use egui::{Align, Color32, Layout, RichText};
use rainbowtrail_core::DrawMode;

use crate::UiEvent;

const MARQUEE: &str = "  ~*~ welcome to my corner of the web ~*~ move your mouse ~*~ click for fireworks ~*~ sign the guestbook! ~*~";
const HOT_PINK: Color32 = Color32::from_rgb(0xFF, 0x00, 0x6E);
const LIME: Color32 = Color32::from_rgb(0x06, 0xFF, 0xA5);

/// Rotates the marquee text one character every eighth of a second.
pub fn marquee_frame(text: &str, time: f64) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let shift = (time * 8.0) as usize % chars.len();
    chars[shift..].iter().chain(chars[..shift].iter()).collect()
}

/// Zero-padded odometer digits.
pub fn odometer(count: u32) -> String {
    format!("{count:07}")
}

pub fn banner(ctx: &egui::Context) {
    let time = ctx.input(|i| i.time);
    egui::TopBottomPanel::top("banner").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("✨ Rainbow Trail ✨").color(HOT_PINK).strong());
            ui.label(RichText::new(marquee_frame(MARQUEE, time)).monospace().color(LIME));
        });
    });
}

pub struct FooterState {
    pub draw_mode: DrawMode,
    pub particle_count: usize,
    pub visitor_number: u32,
}

pub fn footer(ctx: &egui::Context, state: &FooterState, events: &Sender<UiEvent>) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("🧹 Clear").clicked() {
                let _ = events.send(UiEvent::ClearCanvas);
            }
            if ui
                .button(format!("🎨 Mode: {}", state.draw_mode.label()))
                .on_hover_text("Cycle particle shape")
                .clicked()
            {
                let _ = events.send(UiEvent::CycleDrawMode);
            }
            if ui.button("⚙ Settings").clicked() {
                let _ = events.send(UiEvent::ToggleSettings);
            }
            if ui.button("📖 Guestbook").clicked() {
                let _ = events.send(UiEvent::OpenGuestbook);
            }
            ui.label(format!("{} particles", state.particle_count));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(odometer(state.visitor_number))
                        .monospace()
                        .background_color(Color32::BLACK)
                        .color(LIME),
                );
                ui.label("You are visitor #");
            });
        });
        ui.vertical_centered(|ui| {
            ui.small("Best viewed at 800x600 with any browser. Made with <3 and pixels.");
        });
    });
}
