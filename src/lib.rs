//! polyline-codec
//!
//! Codec for the compact encoded polyline format: a variable-length
//! base-64 varint layer, a zigzag signed layer, and a scale/delta
//! coordinate transform on top.

pub mod coords;
pub mod error;
pub mod polyline;
pub mod varint;

pub use coords::{decode, encode};
pub use error::CodecError;
pub use polyline::Polyline;
