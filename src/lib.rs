//! Modal Oracle WASM Module
//!
//! Infers the Greek mode (or a Sus2/Sus4/Major 7 interval sonority) that best
//! explains a selection of scale degrees, and reads every rotation of the
//! selection as its own mode.

pub mod analysis;
pub mod api;
pub mod models;

// Re-export commonly used types
pub use analysis::ModeError;
pub use models::{Accidental, AnalysisResult, Degree, PitchClassSet};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("failed to initialize logger: {}", e);
    }

    log::info!("Modal Oracle WASM module initialized");
}
