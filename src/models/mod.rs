pub mod presentation;
pub mod progress;
