pub mod chat_area;
pub mod header;
pub mod input_bar;
pub mod quick_replies;
pub mod typing_indicator;
