pub mod async_types;
pub mod battery;
pub mod config;
pub mod display;
pub mod error;
pub mod message;
pub mod period;
pub mod twilight;

pub use async_types::*;
pub use battery::*;
pub use config::*;
pub use display::*;
pub use error::*;
pub use message::*;
pub use period::*;
pub use twilight::*;
