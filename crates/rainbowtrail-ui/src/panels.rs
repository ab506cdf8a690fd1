use crossbeam_channel::Sender;
use egui::{Color32, RichText};
use rainbowtrail_core::settings::{DECAY_RATE_RANGE, SIZE_BASE_RANGE};
use rainbowtrail_core::{ColorMode, Guestbook, Settings};

use crate::UiEvent;

/// Unsent guestbook form contents.
#[derive(Debug, Default, Clone)]
pub struct GuestbookDraft {
    pub name: String,
    pub message: String,
    pub error: Option<String>,
}

impl GuestbookDraft {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn settings_window(
    ctx: &egui::Context,
    open: &mut bool,
    current: Settings,
    events: &Sender<UiEvent>,
) {
    let mut draft = current;
    egui::Window::new("Settings")
        .open(open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            let size = ui.add(
                egui::Slider::new(&mut draft.size_base, SIZE_BASE_RANGE).text("Particle size"),
            );
            let decay = ui.add(
                egui::Slider::new(&mut draft.decay_rate, DECAY_RATE_RANGE)
                    .text("Fade speed")
                    .max_decimals(3),
            );
            let mut changed = size.changed() || decay.changed();
            let mut persist = settled(&size) || settled(&decay);
            egui::ComboBox::from_label("Colors")
                .selected_text(draft.color_mode.label())
                .show_ui(ui, |ui| {
                    for mode in ColorMode::ALL {
                        if ui
                            .selectable_value(&mut draft.color_mode, mode, mode.label())
                            .changed()
                        {
                            changed = true;
                            persist = true;
                        }
                    }
                });
            let toggled = ui.checkbox(&mut draft.show_stars, "Twinkling stars").changed()
                | ui.checkbox(&mut draft.sound_on, "Sound").changed();
            changed |= toggled;
            persist |= toggled;
            if changed || persist {
                let _ = events.send(UiEvent::SettingsChanged {
                    settings: draft,
                    persist,
                });
            }
        });
}

/// A slider value is final once the drag ends or it moved without a drag.
fn settled(slider: &egui::Response) -> bool {
    slider.drag_stopped() || (slider.changed() && !slider.dragged())
}

pub fn guestbook_modal(
    ctx: &egui::Context,
    draft: &mut GuestbookDraft,
    book: &Guestbook,
    events: &Sender<UiEvent>,
) {
    let modal = egui::Modal::new(egui::Id::new("guestbook")).show(ctx, |ui| {
        ui.set_width(360.0);
        ui.heading("📖 Sign my guestbook!");
        ui.add(egui::TextEdit::singleline(&mut draft.name).hint_text("Your name"));
        ui.add(
            egui::TextEdit::multiline(&mut draft.message)
                .hint_text("Leave a message")
                .desired_rows(3),
        );
        if let Some(error) = &draft.error {
            ui.colored_label(Color32::LIGHT_RED, error.as_str());
        }
        ui.horizontal(|ui| {
            if ui.button("Sign").clicked() {
                let _ = events.send(UiEvent::GuestbookSubmitted {
                    name: draft.name.clone(),
                    message: draft.message.clone(),
                });
            }
            if ui.button("Close").clicked() {
                let _ = events.send(UiEvent::CloseGuestbook);
            }
        });
        ui.separator();
        egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
            if book.is_empty() {
                ui.weak("No entries yet. Be the first!");
            }
            for entry in book.entries() {
                ui.label(RichText::new(format!("{} ({})", entry.name, entry.date)).strong());
                ui.label(entry.message.as_str());
                ui.add_space(4.0);
            }
        });
    });
    if modal.should_close() {
        let _ = events.send(UiEvent::CloseGuestbook);
    }
}
