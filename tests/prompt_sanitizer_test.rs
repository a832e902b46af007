use vocanote::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_unchanged() {
    let prompt = "Turn this ramble into meeting notes";
    assert_eq!(sanitize_prompt(prompt), prompt);
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length() {
    let prompt = "a".repeat(150);
    let result = sanitize_prompt(&prompt);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_openai_key_when_sanitizing_then_redacts_it() {
    let prompt = "use sk-abc123xyz for this";
    let result = sanitize_prompt(prompt);
    assert!(result.contains("sk-[REDACTED]"));
    assert!(!result.contains("abc123xyz"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let prompt = "Authorization: Bearer secrettoken";
    let result = sanitize_prompt(prompt);
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("secrettoken"));
}

#[test]
fn given_key_query_param_when_sanitizing_then_redacts_value() {
    let prompt = "call it with openai_key=supersecret&x=1";
    let result = sanitize_prompt(prompt);
    assert!(result.contains("openai_key=[REDACTED]"));
    assert!(!result.contains("supersecret"));
}
