#[allow(clippy::module_inception)]
pub mod console;
pub mod menu;
