pub mod display;
pub mod logging;
