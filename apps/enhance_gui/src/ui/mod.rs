//! UI layer: the enhancer window.

pub mod app;

pub use app::EnhancerApp;
