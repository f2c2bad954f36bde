//! Morph vector path outlines into one another.
//!
//! Path data is parsed, normalized into a canonical `[Move, Cubic, Close]` definition,
//! equalized across a batch so that every definition shares one point count,
//! then interpolated point by point and serialized back to path data on every frame.

mod arc;
mod command;
mod definition;
mod equalize;
mod error;
mod misc;
mod morph;
mod normalize;
mod parse;
mod schedule;
mod serialize;
mod timing;

pub mod prelude {
    pub use crate::arc::*;
    pub use crate::command::*;
    pub use crate::definition::*;
    pub use crate::equalize::*;
    pub use crate::error::*;
    pub use crate::misc::*;
    pub use crate::morph::*;
    pub use crate::normalize::*;
    pub use crate::parse::*;
    pub use crate::schedule::*;
    pub use crate::serialize::*;
    pub use crate::timing::*;
}
