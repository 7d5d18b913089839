mod battery;
mod clock;
mod outbox;
mod services;
mod steps;
mod storage;

pub use battery::SimulatedBattery;
pub use clock::SystemClock;
pub use outbox::StdoutOutbox;
pub use services::{ServiceGates, SimulatorServices};
pub use steps::SimulatedSteps;
pub use storage::FileBlobStorage;
