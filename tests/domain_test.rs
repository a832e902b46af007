use vocanote::domain::{AudioSource, StorageKey, StructuredDocument};

#[test]
fn given_two_fresh_keys_when_generated_then_they_differ() {
    assert_ne!(StorageKey::fresh(), StorageKey::fresh());
}

#[test]
fn given_fresh_key_when_formatted_then_lives_under_raw_audio_prefix() {
    let key = StorageKey::fresh();

    assert!(key.as_str().starts_with("raw_audio/"));
    assert!(key.as_str().ends_with(".m4a"));
}

#[test]
fn given_file_key_when_building_source_then_reference_wins() {
    let source = AudioSource::from_parts(
        Some("raw_audio/a.m4a".to_string()),
        Some("aGVsbG8=".to_string()),
    );

    assert_eq!(
        source,
        Some(AudioSource::ByReference(StorageKey::from_raw(
            "raw_audio/a.m4a"
        )))
    );
}

#[test]
fn given_only_inline_payload_when_building_source_then_yields_inline_variant() {
    let source = AudioSource::from_parts(None, Some("aGVsbG8=".to_string()));

    assert_eq!(
        source,
        Some(AudioSource::Inline {
            base64: "aGVsbG8=".to_string()
        })
    );
}

#[test]
fn given_no_fields_when_building_source_then_yields_none() {
    assert_eq!(AudioSource::from_parts(None, None), None);
    assert_eq!(
        AudioSource::from_parts(Some(String::new()), Some(String::new())),
        None
    );
}

#[test]
fn given_provider_json_when_deserialized_then_both_fields_are_present() {
    let document: StructuredDocument =
        serde_json::from_str(r#"{"title":"A","content":"<p>B</p>"}"#).unwrap();

    assert_eq!(document.title, "A");
    assert_eq!(document.content, "<p>B</p>");
}

#[test]
fn given_json_missing_a_field_when_deserialized_then_fails() {
    let result = serde_json::from_str::<StructuredDocument>(r#"{"title":"A"}"#);

    assert!(result.is_err());
}
