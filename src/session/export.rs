//! Plain-text downloads of a session

use super::state::{ConversationTurn, TranscriptEntry};
use crate::detect::DetectedQuestion;
use chrono::{DateTime, Utc};

/// `[HH:MM:SS] speaker: content`, one line per entry
pub fn transcript_text(transcript: &[TranscriptEntry]) -> String {
    transcript
        .iter()
        .map(|e| format!("[{}] {}: {}", e.recorded_at.format("%H:%M:%S"), e.speaker, e.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `[HH:MM:SS] role: text` blocks separated by blank lines
pub fn conversation_text(conversation: &[ConversationTurn]) -> String {
    conversation
        .iter()
        .map(|t| format!("[{}] {}: {}", t.at.format("%H:%M:%S"), t.role.as_str(), t.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `Q: text` and `Confidence: NN%` blocks separated by blank lines
pub fn questions_text(questions: &[DetectedQuestion]) -> String {
    questions
        .iter()
        .map(|q| format!("Q: {}\nConfidence: {:.0}%", q.text, q.confidence * 100.0))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Suggested download name, e.g. `meeting_transcript_20251016_141500.txt`
pub fn file_name(prefix: &str, at: DateTime<Utc>) -> String {
    format!("{}_{}.txt", prefix, at.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use chrono::TimeZone;

    #[test]
    fn transcript_lines_carry_time_and_speaker() {
        let at = Utc.with_ymd_and_hms(2025, 10, 16, 14, 5, 9).unwrap();
        let entries = vec![
            TranscriptEntry {
                sequence: 0,
                speaker: "Alice".into(),
                content: "Let's ship Friday".into(),
                recorded_at: at,
            },
            TranscriptEntry {
                sequence: 1,
                speaker: "Bob".into(),
                content: "I'll write the tests".into(),
                recorded_at: at,
            },
        ];
        assert_eq!(
            transcript_text(&entries),
            "[14:05:09] Alice: Let's ship Friday\n[14:05:09] Bob: I'll write the tests"
        );
    }

    #[test]
    fn conversation_blocks_are_blank_line_separated() {
        let at = Utc.with_ymd_and_hms(2025, 10, 16, 9, 0, 0).unwrap();
        let turns = vec![
            ConversationTurn {
                role: Role::User,
                text: "Who tests?".into(),
                model: None,
                at,
            },
            ConversationTurn {
                role: Role::Assistant,
                text: "Bob".into(),
                model: Some("gemini-2.0-flash-exp".into()),
                at,
            },
        ];
        assert_eq!(
            conversation_text(&turns),
            "[09:00:00] user: Who tests?\n\n[09:00:00] assistant: Bob"
        );
    }

    #[test]
    fn questions_list_text_and_rounded_confidence() {
        let questions = vec![
            DetectedQuestion {
                text: "What is the deadline?".into(),
                confidence: 1.0,
                entry_sequence: 0,
            },
            DetectedQuestion {
                text: "Friday works for everyone?".into(),
                confidence: 0.6,
                entry_sequence: 3,
            },
        ];
        assert_eq!(
            questions_text(&questions),
            "Q: What is the deadline?\nConfidence: 100%\n\nQ: Friday works for everyone?\nConfidence: 60%"
        );
        assert_eq!(questions_text(&[]), "");
    }

    #[test]
    fn file_name_is_timestamped() {
        let at = Utc.with_ymd_and_hms(2025, 10, 16, 14, 15, 0).unwrap();
        assert_eq!(
            file_name("meeting_transcript", at),
            "meeting_transcript_20251016_141500.txt"
        );
    }
}
