//! Heuristic question detection over transcript lines
//!
//! Used to spot questions raised during the meeting so the assistant can
//! answer them without being asked.

mod question;

pub use question::{DetectedQuestion, QuestionDetector};
