pub mod exercise_loader;
pub mod layouts;
pub mod logging;
