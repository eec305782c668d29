use super::*;
use crate::completion::mock::MockCompletion;

#[test]
fn test_config_defaults() {
    let config = CompletionConfig::default();
    assert_eq!(config.max_tokens, DEFAULT_MAX_COMPLETION_TOKENS);
    assert_eq!(config.context_window, DEFAULT_CONTEXT_WINDOW);
    assert_eq!(config.threads, DEFAULT_COMPLETION_THREADS);
    assert_eq!(config.temperature, 0.0);
    assert!(config.stop_sequences.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_rejects_empty_model() {
    let config = CompletionConfig::new("   ");
    assert!(matches!(
        config.validate(),
        Err(CompletionError::InvalidConfig { .. })
    ));
}

#[test]
fn test_config_rejects_zero_max_tokens() {
    let config = CompletionConfig {
        max_tokens: 0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_budget_above_context_window() {
    let config = CompletionConfig {
        max_tokens: 4096,
        context_window: 2048,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_out_of_range_temperature() {
    let config = CompletionConfig {
        temperature: 3.5,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_genai_client_rejects_invalid_config() {
    let result = GenaiCompletion::new(CompletionConfig::new(""));
    assert!(result.is_err());
}

#[tokio::test]
async fn test_mock_replays_script_in_order() {
    let mock = MockCompletion::new().reply("first").reply("second");

    assert_eq!(mock.complete("p1").await.unwrap(), "first");
    assert_eq!(mock.complete("p2").await.unwrap(), "second");
    assert_eq!(mock.calls(), 2);
    assert_eq!(mock.prompts(), vec!["p1", "p2"]);
}

#[tokio::test]
async fn test_mock_scripted_failure() {
    let mock = MockCompletion::new().fail("model exploded");

    let err = mock.complete("prompt").await.unwrap_err();
    assert!(matches!(err, CompletionError::RequestFailed { .. }));
    assert!(err.to_string().contains("model exploded"));
}

#[tokio::test]
async fn test_mock_empty_script_fails() {
    let mock = MockCompletion::new();
    assert!(mock.complete("prompt").await.is_err());
    assert_eq!(mock.calls(), 1);
}
