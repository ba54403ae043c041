#[macro_use]
mod macros;

mod error;
pub use error::{Error, IntoError};

pub mod graph;
pub use graph::{Group, Node, NodeRelation, Stream};

/// A Result type alias that uses Sluice's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
