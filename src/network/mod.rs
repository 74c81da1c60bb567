pub mod client;
pub mod fallback;

pub use client::ReplyClient;
