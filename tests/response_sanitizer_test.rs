use vocanote::application::services::sanitize_completion;

#[test]
fn given_fenced_json_block_when_sanitizing_then_extracts_inner_object() {
    let reply = "```json\n{\"title\":\"A\",\"content\":\"<p>B</p>\"}\n```";
    assert_eq!(
        sanitize_completion(reply),
        "{\"title\":\"A\",\"content\":\"<p>B</p>\"}"
    );
}

#[test]
fn given_unlabeled_fence_when_sanitizing_then_extracts_inner_object() {
    let reply = "```\n{\"title\":\"A\",\"content\":\"B\"}\n```";
    assert_eq!(
        sanitize_completion(reply),
        "{\"title\":\"A\",\"content\":\"B\"}"
    );
}

#[test]
fn given_bare_object_when_sanitizing_then_returns_unchanged() {
    let reply = "{\"title\":\"X\",\"content\":\"Y\"}";
    assert_eq!(sanitize_completion(reply), reply);
}

#[test]
fn given_surrounding_whitespace_when_sanitizing_then_trims() {
    let reply = "  \n```json\n{\"title\":\"A\",\"content\":\"B\"}\n```  \n";
    assert_eq!(
        sanitize_completion(reply),
        "{\"title\":\"A\",\"content\":\"B\"}"
    );
}

#[test]
fn given_any_input_when_sanitizing_twice_then_result_is_stable() {
    let inputs = [
        "```json\n{\"title\":\"A\",\"content\":\"B\"}\n```",
        "{\"title\":\"A\",\"content\":\"B\"}",
        "   plain text   ",
        "",
    ];
    for input in inputs {
        let once = sanitize_completion(input);
        assert_eq!(sanitize_completion(&once), once);
    }
}

#[test]
fn given_fence_with_trailing_prose_when_sanitizing_then_returns_trimmed_text() {
    let reply = "```json\n{\"title\":\"A\"}\n``` and some explanation";
    assert_eq!(sanitize_completion(reply), reply.trim());
}

#[test]
fn given_plain_prose_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(
        sanitize_completion("  I could not produce JSON  "),
        "I could not produce JSON"
    );
}

#[test]
fn given_multiline_object_in_fence_when_sanitizing_then_extracts_whole_object() {
    let reply = "```json\n{\n  \"title\": \"A\",\n  \"content\": \"<p>B</p>\"\n}\n```";
    assert_eq!(
        sanitize_completion(reply),
        "{\n  \"title\": \"A\",\n  \"content\": \"<p>B</p>\"\n}"
    );
}
