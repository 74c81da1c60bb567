pub mod app;
pub mod components;
pub mod console;
pub mod controller;
pub mod markup;
pub mod state;

pub use app::ChatApp;
pub use console::ConsoleView;
pub use controller::{ChatController, ChatView};
