//! Full-screen terminal game

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use rendering::parse_hex_color;
