pub mod battery;
pub mod clock;
pub mod outbox;
pub mod platform;
pub mod services;
pub mod steps;
pub mod storage;

pub use battery::*;
pub use clock::*;
pub use outbox::*;
pub use platform::*;
pub use services::*;
pub use steps::*;
pub use storage::*;
