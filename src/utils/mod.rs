pub mod tui;
pub mod when;

pub use tui::create_spinner;
