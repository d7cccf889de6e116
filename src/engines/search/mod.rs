pub mod policy;
pub mod engine;
pub mod progress;
pub mod report;

pub use policy::{SearchMethod, SearchPolicy};
pub use engine::SearchEngine;
pub use progress::{ConsoleTrace, SearchObserver, TraceRecorder};
pub use report::{format_percent, RoundSummary, SearchReport};
