//! Submission sinks for accepted quiz forms

mod file_sink;
mod traits;

pub use file_sink::FileSink;
pub use traits::{SubmissionReceipt, SubmissionSink};

#[cfg(test)]
pub use traits::MockSubmissionSink;
