pub mod core;
pub mod main;
pub mod scroll_trigger;
pub mod timeline;
