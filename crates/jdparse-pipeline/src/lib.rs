mod coordinator;
mod processor;
mod progress;

pub use coordinator::BatchCoordinator;
pub use processor::JobProcessor;
pub use progress::ProgressEvent;
