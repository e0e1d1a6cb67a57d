//! GUI example using egui.
//!
//! This example demonstrates how to feed egui's IME composition events into
//! submit_jp so that confirming a Japanese conversion with Enter does not send
//! the message.
//! Run with: cargo run --example egui_app

use eframe::egui;
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;
use submit_jp::{
    Controller, KeyCode, KeyCombo, KeyDisposition, KeyEvent, Modifiers, SubmitEvent,
    SubmitSource, traits::SubmitTarget,
};

/// Message form backed by shared strings so the submit callback can read it
#[derive(Default)]
struct MessageForm {
    draft: Rc<RefCell<String>>,
    messages: Rc<RefCell<Vec<String>>>,
    pending: Vec<SubmitEvent>,
}

impl SubmitTarget for MessageForm {
    type Error = Infallible;

    fn request_submit(&mut self, source: SubmitSource) -> Result<(), Self::Error> {
        self.pending.push(SubmitEvent::new(source));
        Ok(())
    }
}

struct SubmitApp {
    controller: Controller,
    form: MessageForm,
    submit_key: KeyCombo,
    composition_enters: Rc<RefCell<u32>>,
}

impl Default for SubmitApp {
    fn default() -> Self {
        let form = MessageForm::default();
        let draft = form.draft.clone();
        let messages = form.messages.clone();
        let composition_enters = Rc::new(RefCell::new(0));
        let enters = composition_enters.clone();

        let controller = Controller::builder()
            .submit_keys([KeyCombo::Enter])
            .on_submit(move |event| {
                event.prevent_default();
                let text = std::mem::take(&mut *draft.borrow_mut());
                if !text.trim().is_empty() {
                    messages.borrow_mut().push(text.trim_end().to_string());
                }
            })
            .on_composition_enter(move || *enters.borrow_mut() += 1)
            .build();

        Self {
            controller,
            form,
            submit_key: KeyCombo::Enter,
            composition_enters,
        }
    }
}

impl SubmitApp {
    /// Returns true when the key press submitted the form.
    fn handle_key_event(&mut self, key: egui::Key, modifiers: egui::Modifiers) -> bool {
        let Some(mut event) = convert_egui_event(key, modifiers) else {
            return false;
        };

        let disposition = match self.controller.on_key_down(&mut self.form, &mut event) {
            Ok(disposition) => disposition,
            Err(never) => match never {},
        };
        self.dispatch_submits();
        disposition == KeyDisposition::Submitted
    }

    fn send_clicked(&mut self) {
        if let Err(never) = self.controller.trigger_submit(&mut self.form) {
            match never {}
        }
        self.dispatch_submits();
    }

    fn dispatch_submits(&mut self) {
        for mut submit in self.form.pending.drain(..) {
            self.controller.on_submit(&mut submit);
        }
    }
}

fn convert_egui_event(key: egui::Key, modifiers: egui::Modifiers) -> Option<KeyEvent> {
    let code = match key {
        egui::Key::Enter => KeyCode::Enter,
        egui::Key::Escape => KeyCode::Esc,
        egui::Key::Backspace => KeyCode::Backspace,
        egui::Key::Tab => KeyCode::Tab,
        _ => return None,
    };

    let mods = Modifiers::from_flags(
        modifiers.ctrl,
        modifiers.mac_cmd,
        modifiers.shift,
        modifiers.alt,
    );

    // egui exposes no native composing flag; the boundary events carry it
    Some(KeyEvent::new(code, mods))
}

impl eframe::App for SubmitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Composition boundaries must be applied before the keys that follow them
        let events = ctx.input(|i| i.events.clone());
        let mut submitted = false;
        for event in &events {
            match event {
                egui::Event::CompositionStart => self.controller.on_composition_start(),
                egui::Event::CompositionEnd(_) => self.controller.on_composition_end(),
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => submitted |= self.handle_key_event(*key, *modifiers),
                _ => {}
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("submit_jp GUI Demo");
            ui.label("Enter that confirms an IME conversion does not send the message.");

            ui.horizontal(|ui| {
                ui.label("Submit key:");
                let mut selected = self.submit_key;
                egui::ComboBox::from_id_source("submit_key")
                    .selected_text(selected.to_string())
                    .show_ui(ui, |ui| {
                        for combo in KeyCombo::PRESETS {
                            ui.selectable_value(&mut selected, combo, combo.to_string());
                        }
                    });
                if selected != self.submit_key {
                    self.submit_key = selected;
                    self.controller.set_submit_keys([selected]);
                }
            });

            ui.separator();

            for message in self.form.messages.borrow().iter() {
                ui.label(format!("> {message}"));
            }

            ui.separator();

            {
                let mut draft = self.form.draft.borrow_mut();
                ui.add(
                    egui::TextEdit::multiline(&mut *draft)
                        .desired_width(f32::INFINITY)
                        .desired_rows(4)
                        .hint_text("メッセージを入力..."),
                );
                // The text edit saw the submitting Enter too and added a newline
                if submitted {
                    draft.clear();
                }
            }

            ui.horizontal(|ui| {
                let status = if self.controller.is_composing() {
                    "変換中..."
                } else {
                    "入力待ち"
                };
                ui.label(status);
                ui.label(format!(
                    "IME Enter presses: {}",
                    self.composition_enters.borrow()
                ));
                if ui.button("Send").clicked() {
                    self.send_clicked();
                }
            });
        });
    }
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("submit_jp=debug")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "submit_jp GUI Demo",
        options,
        Box::new(|_cc| Box::<SubmitApp>::default()),
    )
}
