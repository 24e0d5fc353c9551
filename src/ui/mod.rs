//! Console front end: board rendering and the read-a-column game loop.

pub mod board_view;
pub mod console;

pub use console::ConsoleApp;
