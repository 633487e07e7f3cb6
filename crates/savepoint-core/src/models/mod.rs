//! Data models for SavePoint

mod clip;

pub use clip::{Clip, ClipId, ClipType, ParseClipTypeError};
