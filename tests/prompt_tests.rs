// Tests for prompt composition.

use meeting_assistant::{PromptComposer, SessionState};

fn standup() -> SessionState {
    let mut state = SessionState::new("s1");
    state.append_transcript("Alice", "Let's ship Friday").unwrap();
    state.append_transcript("Bob", "I'll write the tests").unwrap();
    state
}

#[test]
fn test_question_prompt_lists_lines_then_question() {
    let state = standup();
    let prompt = PromptComposer::default()
        .question_prompt(state.transcript(), "What did Bob commit to?")
        .unwrap();

    let alice = prompt.find("Alice: Let's ship Friday").expect("Alice line");
    let bob = prompt.find("Bob: I'll write the tests").expect("Bob line");
    let question = prompt.find("What did Bob commit to?").expect("question");
    assert!(alice < bob && bob < question);

    assert_eq!(
        prompt,
        "Meeting Context:\n\
         Alice: Let's ship Friday\n\
         Bob: I'll write the tests\n\n\
         Question: What did Bob commit to?\n\n\
         Provide a clear, concise answer based on the meeting context above."
    );
}

#[test]
fn test_prompts_are_deterministic() {
    let state = standup();
    let composer = PromptComposer::default();

    let first = composer
        .question_prompt(state.transcript(), "Who ships?")
        .unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = composer
        .question_prompt(state.transcript(), "Who ships?")
        .unwrap();
    assert_eq!(first, second);

    // A copy of the session renders identically even though it is a
    // different value
    let copy = state.clone();
    assert_eq!(
        composer.summary_prompt(state.transcript()).unwrap(),
        composer.summary_prompt(copy.transcript()).unwrap()
    );
}

#[test]
fn test_summary_prompt_requests_recap() {
    let state = standup();
    let prompt = PromptComposer::default()
        .summary_prompt(state.transcript())
        .unwrap();

    assert!(prompt.starts_with(
        "Analyze this meeting transcript and provide a comprehensive summary:\n\n\
         Alice: Let's ship Friday\nBob: I'll write the tests\n\n"
    ));
    assert!(prompt.contains("**Decisions Made**"));
    assert!(prompt.contains("**Action Items**"));
    assert!(prompt.contains("**Key Discussion Points**"));
}

#[test]
fn test_empty_transcript_is_rejected() {
    let state = SessionState::new("s1");
    let composer = PromptComposer::default();

    let err = composer.summary_prompt(state.transcript()).unwrap_err();
    assert_eq!(err.kind(), "validation");

    let err = composer
        .question_prompt(state.transcript(), "Anything?")
        .unwrap_err();
    assert_eq!(err.kind(), "validation");
}

#[test]
fn test_multiline_content_is_passed_through() {
    let mut state = SessionState::new("s1");
    state.append_transcript("Dana", "Line one\nLine two").unwrap();
    let rendered = PromptComposer::default().render_transcript(state.transcript());
    assert_eq!(rendered, "Dana: Line one\nLine two");
}
