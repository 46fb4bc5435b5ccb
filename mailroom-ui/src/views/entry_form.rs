//! Entry form window: one text input per user field, Submit, validation.

use eframe::egui;
use mailroom_core::writer::append_row;
use mailroom_core::{Store, StorePaths};
use tracing::error;

use crate::app::MessageType;

/// What a single frame of [`EntryForm::show`] produced.
pub struct FormResponse {
    /// `false` once the form was submitted successfully or closed by the
    /// user; the app drops the form either way.
    pub keep_open: bool,
    /// Status-bar message to surface, if any.
    pub message: Option<(String, MessageType)>,
}

/// Outcome of one submission attempt, separated from the widget code so it
/// can be exercised without a UI.
#[derive(Debug)]
enum SubmitOutcome {
    Saved,
    Invalid(Vec<String>),
    Failed(String),
}

fn submit_entry(paths: &StorePaths, store: Store, inputs: &[String]) -> SubmitOutcome {
    let row = match store.schema().build_row(inputs) {
        Ok(row) => row,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };

    match append_row(paths, store, &row) {
        Ok(()) => SubmitOutcome::Saved,
        Err(e) => {
            error!(store = store.title(), %e, "failed to append entry");
            SubmitOutcome::Failed(format!("Could not save entry: {e}"))
        }
    }
}

/// One "Add …" window. Input typed here lives only until the window closes;
/// closing without submitting discards it silently.
pub struct EntryForm {
    window_id: u64,
    store: Store,
    inputs: Vec<String>,
    errors: Vec<String>,
}

impl EntryForm {
    pub fn new(window_id: u64, store: Store) -> Self {
        Self {
            window_id,
            store,
            inputs: vec![String::new(); store.schema().prompt_count()],
            errors: Vec::new(),
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, paths: &StorePaths) -> FormResponse {
        let mut open = true;
        let mut submitted = false;

        egui::Window::new(format!("Add {} Entry", self.store.title()))
            .id(egui::Id::new(("entry-form", self.window_id)))
            .open(&mut open)
            .resizable(false)
            .default_width(340.0)
            .show(ctx, |ui| {
                egui::Grid::new(("entry-form-grid", self.window_id))
                    .num_columns(2)
                    .spacing([10.0, 8.0])
                    .show(ui, |ui| {
                        for (prompt, value) in
                            self.store.schema().prompts().zip(self.inputs.iter_mut())
                        {
                            ui.label(prompt);
                            ui.add(egui::TextEdit::singleline(value).desired_width(220.0));
                            ui.end_row();
                        }
                    });

                if !self.errors.is_empty() {
                    ui.add_space(8.0);
                    for err in &self.errors {
                        ui.colored_label(egui::Color32::RED, err);
                    }
                }

                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Submit").clicked() {
                        submitted = true;
                    }
                });
            });

        let mut message = None;
        if submitted {
            match submit_entry(paths, self.store, &self.inputs) {
                SubmitOutcome::Saved => {
                    message = Some(("Entry added successfully!".to_string(), MessageType::Success));
                    open = false;
                }
                SubmitOutcome::Invalid(errors) => {
                    // Keep the window open for correction; nothing was written.
                    self.errors = errors;
                }
                SubmitOutcome::Failed(msg) => {
                    self.errors.clear();
                    message = Some((msg, MessageType::Error));
                }
            }
        }

        FormResponse {
            keep_open: open,
            message,
        }
    }
}
