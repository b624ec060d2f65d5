// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Eingabe → UI über InputEventChannel, UI → Audio über die AnnouncePipeline.

pub mod announce;
pub mod input;
pub mod ui;

// Re-export Tasks für einfachen Import
pub use announce::announcement_task;
pub use input::{button_task, encoder_task};
pub use ui::ui_task;
