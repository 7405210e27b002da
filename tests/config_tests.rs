// Tests for configuration loading.

use anyhow::Result;
use meeting_assistant::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("absent");

    let cfg = Config::load(path.to_str().unwrap())?;

    assert_eq!(cfg.service.name, "meeting-assistant");
    assert_eq!(cfg.service.http.port, 8501);
    assert_eq!(cfg.ai.models.simple, "gemini-2.0-flash-exp");
    assert_eq!(cfg.ai.request_timeout_secs, 120);
    assert!(cfg.assistant.auto_respond);
    assert_eq!(cfg.assistant.context_window, None);
    assert!((cfg.assistant.auto_respond_threshold - 0.75).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn test_file_overrides_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("assistant.toml");
    fs::write(
        &path,
        r#"
[service.http]
port = 9100

[ai.models]
complex = "claude-sonnet"

[assistant]
context_window = 20
auto_respond = false
"#,
    )?;

    let cfg = Config::load(path.to_str().unwrap())?;

    assert_eq!(cfg.service.http.port, 9100);
    assert_eq!(cfg.service.http.bind, "127.0.0.1", "Unset keys keep defaults");
    assert_eq!(cfg.ai.models.complex, "claude-sonnet");
    assert_eq!(cfg.ai.models.simple, "gemini-2.0-flash-exp");
    assert_eq!(cfg.assistant.context_window, Some(20));
    assert!(!cfg.assistant.auto_respond);
    Ok(())
}
