//! Product traceability timeline.
//!
//! Turns a loosely-typed scan payload into a normalized [`ProductTrace`]:
//! - `payload` - tolerant reading of the raw scan/product record
//! - `model` - the trace and stage types with their status/quality mapping
//! - `converter` - payload to trace projection, defaults, synthetic stage
//! - `icons` - stage name to display glyph lookup
//! - `mock_hash` - placeholder "blockchain" tokens for display only

pub mod converter;
pub mod icons;
pub mod mock_hash;
pub mod model;
pub mod payload;

pub use converter::*;
pub use icons::*;
pub use mock_hash::*;
pub use model::*;
pub use payload::*;
