pub mod assessment;
pub mod client;

pub use assessment::AssessmentRecord;
pub use client::Client;
