pub mod builder;
pub mod code;
pub mod document;
pub mod ids;

pub use builder::*;
pub use document::*;
