//! Main application state and the top-level menu.

use eframe::egui;
use mailroom_core::{Store, StorePaths};

use crate::views::{EntryForm, RecordViewer};

/// One button on the main menu. The full menu is this table iterated in
/// order; nothing else decides which windows can be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddEntry(Store),
    ViewRecords(Store),
}

impl MenuAction {
    pub fn all() -> [MenuAction; 6] {
        [
            MenuAction::AddEntry(Store::Dairy),
            MenuAction::AddEntry(Store::Dispatch),
            MenuAction::AddEntry(Store::FileMovement),
            MenuAction::ViewRecords(Store::Dairy),
            MenuAction::ViewRecords(Store::Dispatch),
            MenuAction::ViewRecords(Store::FileMovement),
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddEntry(Store::Dairy) => "Add Dairy Entry",
            MenuAction::AddEntry(Store::Dispatch) => "Add Dispatch Entry",
            MenuAction::AddEntry(Store::FileMovement) => "Track File Movement",
            MenuAction::ViewRecords(Store::Dairy) => "View Dairy Records",
            MenuAction::ViewRecords(Store::Dispatch) => "View Dispatch Records",
            MenuAction::ViewRecords(Store::FileMovement) => "View File Movement Records",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

/// Main application state.
///
/// Forms and viewers are independent windows; any number may be open at
/// once and they share nothing but the store files on disk.
pub struct MailroomApp {
    paths: StorePaths,
    forms: Vec<EntryForm>,
    viewers: Vec<RecordViewer>,
    next_window_id: u64,
    status_message: Option<(String, MessageType)>,
}

impl MailroomApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, paths: StorePaths) -> Self {
        Self {
            paths,
            forms: Vec::new(),
            viewers: Vec::new(),
            next_window_id: 0,
            status_message: None,
        }
    }

    pub fn show_message(&mut self, msg: impl Into<String>, msg_type: MessageType) {
        self.status_message = Some((msg.into(), msg_type));
    }

    pub fn clear_message(&mut self) {
        self.status_message = None;
    }

    fn next_window_id(&mut self) -> u64 {
        self.next_window_id += 1;
        self.next_window_id
    }

    fn open(&mut self, action: MenuAction) {
        let id = self.next_window_id();
        match action {
            MenuAction::AddEntry(store) => self.forms.push(EntryForm::new(id, store)),
            MenuAction::ViewRecords(store) => {
                self.viewers.push(RecordViewer::open(id, store, &self.paths));
            }
        }
    }
}

impl eframe::App for MailroomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Main menu
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading("Official Mail & File Management System");
                ui.add_space(16.0);

                for action in MenuAction::all() {
                    if ui
                        .add_sized([280.0, 26.0], egui::Button::new(action.label()))
                        .clicked()
                    {
                        self.open(action);
                    }
                    ui.add_space(4.0);
                }

                ui.add_space(12.0);
                if ui.add_sized([280.0, 26.0], egui::Button::new("Exit")).clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((msg, msg_type)) = &self.status_message {
                    let color = match msg_type {
                        MessageType::Info => egui::Color32::GRAY,
                        MessageType::Success => egui::Color32::GREEN,
                        MessageType::Error => egui::Color32::RED,
                    };
                    ui.colored_label(color, msg);

                    if ui.small_button("✖").clicked() {
                        self.clear_message();
                    }
                }
            });
        });

        // Open entry forms; each reports whether it stays open and may
        // produce a status message on submit.
        let paths = &self.paths;
        let mut messages: Vec<(String, MessageType)> = Vec::new();
        self.forms.retain_mut(|form| {
            let response = form.show(ctx, paths);
            if let Some(message) = response.message {
                messages.push(message);
            }
            response.keep_open
        });

        // Open record viewers.
        self.viewers.retain_mut(|viewer| viewer.show(ctx));

        for (msg, msg_type) in messages {
            self.show_message(msg, msg_type);
        }
    }
}
