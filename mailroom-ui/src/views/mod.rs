//! Secondary windows opened from the main menu.

mod entry_form;
mod record_viewer;

pub use entry_form::EntryForm;
pub use record_viewer::RecordViewer;
