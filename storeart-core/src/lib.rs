pub mod color;
pub mod compose;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod resize;
pub mod source;
pub mod target;

pub use error::Error;
