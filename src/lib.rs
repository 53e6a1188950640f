// SPDX-License-Identifier: GPL-3.0-only

//! Photobooth - capture and compositing pipeline
//!
//! This library provides the core functionality for a photobooth
//! application: adjustment compositing, single-shot capture, timed
//! multi-shot sessions, and strip composition.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`compositor`]: Adjustment and filter compositing on raster frames
//! - [`filters`]: Static catalog of named filter effects
//! - [`capture`]: Frame source boundary, single-shot capture, and gallery
//! - [`session`]: Timed multi-shot photobooth state machine
//! - [`strip`]: Composition of captured shots into a bordered strip
//! - [`media`]: Photo encoding and ordered asynchronous decoding
//! - [`config`]: User configuration handling
//! - [`storage`]: Output directory and saved-shot management
//!
//! # Example
//!
//! ```ignore
//! // Headless usage, typically run via:
//! // photobooth booth --shots 4 --timer 3
//! ```

pub mod capture;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod errors;
pub mod filters;
pub mod media;
pub mod session;
pub mod storage;
pub mod strip;

// Re-export commonly used types
pub use capture::{CapturedImage, FrameSource, Gallery};
pub use compositor::AdjustmentParams;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use filters::FilterEffect;
pub use session::{BoothSession, BoothState};
