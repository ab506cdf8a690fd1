//! egui front end: the trail canvas plus settings, guestbook and page chrome.

use crossbeam_channel::{Receiver, Sender};
use egui::Sense;
use glam::Vec2;
use rand::Rng;
use tracing::{debug, info, warn};

use rainbowtrail_core::guestbook::today;
use rainbowtrail_core::{Guestbook, RetainedCanvas, Settings, TrailConfig, TrailSession};
use rainbowtrail_platform::{AudioSink, KeyValueStore, SurfaceSize};

mod chrome;
mod panels;
mod surface;

pub use surface::{to_color32, EguiSurface};

use crate::chrome::FooterState;
use crate::panels::GuestbookDraft;

pub enum UiEvent {
    ClearCanvas,
    CycleDrawMode,
    ToggleSettings,
    /// `persist` is false while a slider is still being dragged.
    SettingsChanged { settings: Settings, persist: bool },
    OpenGuestbook,
    CloseGuestbook,
    GuestbookSubmitted { name: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// What the host provides to the UI.
pub struct HostServices {
    pub config: TrailConfig,
    pub store: Box<dyn KeyValueStore>,
    pub audio: Box<dyn AudioSink>,
}

pub fn run(services: HostServices) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rainbow Trail")
            .with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Rainbow Trail",
        native_options,
        Box::new(move |_creation_context| Ok(Box::new(RainbowTrailApp::new(services)))),
    )
}

pub struct RainbowTrailApp {
    session: TrailSession,
    canvas: RetainedCanvas,
    guestbook: Guestbook,
    store: Box<dyn KeyValueStore>,
    audio: Box<dyn AudioSink>,
    audio_warned: bool,
    event_sender: Sender<UiEvent>,
    event_receiver: Receiver<UiEvent>,
    loop_state: LoopState,
    last_pointer: Option<Vec2>,
    settings_open: bool,
    guestbook_open: bool,
    draft: GuestbookDraft,
    visitor_number: u32,
}

impl RainbowTrailApp {
    pub fn new(services: HostServices) -> Self {
        let HostServices {
            config,
            store,
            audio,
        } = services;
        let settings = Settings::load(&*store);
        let guestbook = Guestbook::load(&*store);
        info!(
            "loaded settings {:?}, {} guestbook entries",
            settings,
            guestbook.len()
        );
        let (event_sender, event_receiver) = crossbeam_channel::unbounded::<UiEvent>();
        Self {
            canvas: RetainedCanvas::new(config.retained_frames),
            session: TrailSession::new(config, settings),
            guestbook,
            store,
            audio,
            audio_warned: false,
            event_sender,
            event_receiver,
            loop_state: LoopState::Running,
            last_pointer: None,
            settings_open: false,
            guestbook_open: false,
            draft: GuestbookDraft::default(),
            visitor_number: rand::thread_rng().gen_range(1_000..100_000),
        }
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    fn chime(&mut self) {
        if !self.session.settings().sound_on {
            return;
        }
        if let Err(err) = self.audio.play_chime() {
            if !self.audio_warned {
                debug!("sound skipped: {err}");
                self.audio_warned = true;
            }
        }
    }

    fn press(&mut self, at: Vec2) {
        self.session.pointer_pressed(at);
        self.chime();
    }

    fn persist_settings(&mut self) {
        if let Err(err) = self.session.settings().save(self.store.as_mut()) {
            warn!("failed to save settings: {err}");
        }
    }

    fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::ClearCanvas => {
                self.session.clear();
                self.canvas.clear();
            }
            UiEvent::CycleDrawMode => {
                let mode = self.session.cycle_draw_mode();
                info!("UI: draw mode -> {}", mode.label());
            }
            UiEvent::ToggleSettings => self.settings_open = !self.settings_open,
            UiEvent::SettingsChanged { settings, persist } => {
                self.session.apply_settings(settings);
                if persist {
                    self.persist_settings();
                }
            }
            UiEvent::OpenGuestbook => self.guestbook_open = true,
            UiEvent::CloseGuestbook => {
                self.guestbook_open = false;
                self.draft.error = None;
            }
            UiEvent::GuestbookSubmitted { name, message } => {
                let signed = self.guestbook.sign(&name, &message, today()).map(|_| ());
                match signed {
                    Ok(()) => {
                        self.draft.reset();
                        if let Err(err) = self.guestbook.save(self.store.as_mut()) {
                            warn!("failed to save guestbook: {err}");
                        }
                    }
                    Err(err) => self.draft.error = Some(err.to_string()),
                }
            }
        }
    }

    fn trail_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        self.session
            .resize(SurfaceSize::new(rect.width(), rect.height()));

        match response.hover_pos() {
            Some(hover) => {
                let local = hover - rect.min;
                let at = Vec2::new(local.x, local.y);
                if self.last_pointer != Some(at) {
                    self.session.pointer_moved(at);
                    self.last_pointer = Some(at);
                }
                if ui.input(|i| i.pointer.primary_pressed()) {
                    self.press(at);
                }
            }
            None => self.last_pointer = None,
        }

        let dt = ui.input(|i| i.stable_dt);
        let frame = self.session.tick(dt);
        self.canvas.commit(frame.trail);

        let mut surface = EguiSurface::new(&painter, rect.min);
        self.canvas
            .replay(&mut surface, self.session.size(), self.session.config().background);
    }
}

impl eframe::App for RainbowTrailApp {
    fn update(&mut self, context: &egui::Context, _frame: &mut eframe::Frame) {
        if context.input(|i| i.viewport().close_requested()) && self.loop_state == LoopState::Running {
            info!("UI: close requested, stopping frame loop");
            self.loop_state = LoopState::Stopped;
        }
        if self.loop_state == LoopState::Stopped {
            return;
        }

        chrome::banner(context);
        chrome::footer(
            context,
            &FooterState {
                draw_mode: self.session.draw_mode(),
                particle_count: self.session.particles().len(),
                visitor_number: self.visitor_number,
            },
            &self.event_sender,
        );
        panels::settings_window(
            context,
            &mut self.settings_open,
            *self.session.settings(),
            &self.event_sender,
        );
        if self.guestbook_open {
            panels::guestbook_modal(context, &mut self.draft, &self.guestbook, &self.event_sender);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(context, |ui| self.trail_canvas(ui));

        while let Ok(event) = self.event_receiver.try_recv() {
            self.handle_event(event);
        }
        context.request_repaint();
    }
}
