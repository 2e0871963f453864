pub mod app;
pub mod catalog;
pub mod events;
pub mod filter;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod movies;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::{run, Services};
