//! Scan capture and classification.
//!
//! - `classify` - labels a raw scan string (URL, Email, Phone, Product ID, Text)
//! - `detector` - frame-level QR detection stub and demo scan ids
//! - `camera` - single-stream camera session and user-facing error messages

pub mod camera;
pub mod classify;
pub mod detector;

pub use camera::*;
pub use classify::*;
pub use detector::*;
