//! Record viewer window: a read-only table of everything in one store.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use mailroom_core::reader::read_store;
use mailroom_core::{Store, StoreContents, StoreError, StorePaths};
use tracing::warn;

/// One "View … Records" window. The store file is read in full when the
/// window opens; the snapshot is what gets displayed. Each viewer is
/// independent and never writes.
pub struct RecordViewer {
    window_id: u64,
    store: Store,
    contents: Result<StoreContents, StoreError>,
}

impl RecordViewer {
    pub fn open(window_id: u64, store: Store, paths: &StorePaths) -> Self {
        let contents = read_store(paths, store);
        if let Err(e) = &contents {
            warn!(store = store.title(), %e, "cannot read store for viewing");
        }
        Self {
            window_id,
            store,
            contents,
        }
    }

    /// Renders the window; returns `false` once the user closed it.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;

        egui::Window::new(format!("{} Records", self.store.title()))
            .id(egui::Id::new(("record-viewer", self.window_id)))
            .open(&mut open)
            .default_size([580.0, 360.0])
            .show(ctx, |ui| match &self.contents {
                Ok(contents) => Self::table(ui, contents),
                Err(e) => {
                    let text = if e.is_not_found() {
                        "File not found.".to_string()
                    } else {
                        e.to_string()
                    };
                    ui.colored_label(egui::Color32::RED, text);
                }
            });

        open
    }

    fn table(ui: &mut egui::Ui, contents: &StoreContents) {
        if contents.headers.is_empty() {
            ui.weak("This store is empty.");
            return;
        }

        let text_height = egui::TextStyle::Body.resolve(ui.style()).size;

        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .max_scroll_height(320.0);
        for _ in &contents.headers {
            builder = builder.column(Column::auto().at_least(70.0).resizable(true));
        }

        builder
            .header(text_height + 6.0, |mut header| {
                for name in &contents.headers {
                    header.col(|ui| {
                        ui.strong(name.as_str());
                    });
                }
            })
            .body(|body| {
                let column_count = contents.headers.len();
                body.rows(text_height + 6.0, contents.rows.len(), |mut row| {
                    let record = &contents.rows[row.index()];
                    for i in 0..column_count {
                        row.col(|ui| {
                            ui.label(record.get(i).map(String::as_str).unwrap_or(""));
                        });
                    }
                });
            });
    }
}
