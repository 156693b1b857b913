//! Client side of the prompt enhancer: a framework loader and an enhance
//! controller driving an abstract page through [`view::PageHandles`].

pub mod api;
pub mod busy;
#[cfg(feature = "system-clipboard")]
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod headless;
pub mod loader;
pub mod render;
pub mod view;

pub use api::{EnhancerApi, HttpEnhancerApi};
#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
pub use config::{load_settings, ClientSettings};
pub use controller::{CopyOutcome, EnhanceController, SubmitOutcome, COPY_CONFIRM_DELAY};
pub use error::{ClientError, ValidationError};
pub use headless::HeadlessPage;
pub use loader::FrameworkLoader;
pub use render::RenderedResult;

#[cfg(test)]
#[path = "tests/mock_backend.rs"]
mod mock_backend;
