// SPDX-License-Identifier: GPL-3.0-only

//! Media encoding and decoding
//!
//! CPU-bound codec work runs in `spawn_blocking` so callers never stall
//! an async executor. Decoding preserves caller-supplied ordering: see
//! [`decoders::decode_all_ordered`].
//!
//! # Modules
//!
//! - [`encoders`]: JPEG (quality-parameterized) and lossless PNG output
//! - [`decoders`]: async image decoding with order preservation

pub mod decoders;
pub mod encoders;

// Re-export commonly used types
pub use encoders::{EncodedImage, EncodingFormat, EncodingQuality, PhotoEncoder};
