//! Tolerant field extraction from loosely-typed scan payloads.

pub mod fields;

pub use fields::*;
