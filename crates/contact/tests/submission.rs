use folio_contact::{SubmissionError, SubmitPayload, SubmitReply};

#[test]
fn empty_body_decodes_to_defaults() {
    let payload: SubmitPayload = serde_json::from_str("{}").unwrap();

    assert!(payload.name.is_none());
    assert!(payload.email.is_none());
    assert!(payload.message.is_none());
    assert!(payload.project_type.is_empty());
}

#[test]
fn null_fields_decode_as_absent() {
    let payload: SubmitPayload =
        serde_json::from_str(r#"{"name":null,"email":null,"message":null}"#).unwrap();

    assert_eq!(payload.validate(), Err(SubmissionError::MissingFields));
}

#[test]
fn non_list_project_type_decodes_as_empty() {
    let payload: SubmitPayload = serde_json::from_str(
        r#"{"name":"Ada","email":"ada@example.com","message":"hi","projectType":"Website"}"#,
    )
    .unwrap();

    assert!(payload.project_type.is_empty());
}

#[test]
fn non_string_labels_are_dropped() {
    let payload: SubmitPayload = serde_json::from_str(
        r#"{"name":"Ada","email":"ada@example.com","message":"hi","projectType":["Website",42,null,"Data Pipeline"]}"#,
    )
    .unwrap();

    assert_eq!(payload.project_type, vec!["Website", "Data Pipeline"]);
}

#[test]
fn non_string_text_field_is_a_parse_error() {
    let result = serde_json::from_str::<SubmitPayload>(r#"{"name":5,"email":"a@b.com"}"#);

    assert!(result.is_err());
}

#[test]
fn whitespace_only_fields_fail_validation() {
    let payload = SubmitPayload::new("  ", "ada@example.com", "\t\n", Vec::new());

    assert_eq!(payload.validate(), Err(SubmissionError::MissingFields));
}

#[test]
fn validation_trims_text_fields() {
    let payload = SubmitPayload::new(
        "  Ada ",
        " ada@example.com\n",
        " Need a site ",
        vec!["Website".to_owned()],
    );

    let submission = payload.validate().unwrap();
    assert_eq!(submission.name, "Ada");
    assert_eq!(submission.email, "ada@example.com");
    assert_eq!(submission.message, "Need a site");
    assert_eq!(submission.project_type, vec!["Website"]);
}

#[test]
fn wire_payload_round_trips_in_camel_case() {
    let payload = SubmitPayload::new("Ada", "ada@example.com", "hi", vec!["Web App".to_owned()]);
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["projectType"][0], "Web App");

    let back: SubmitPayload = serde_json::from_value(json).unwrap();
    assert_eq!(back.project_type, vec!["Web App"]);
}

#[test]
fn reply_envelopes_match_the_wire_contract() {
    let sent = serde_json::to_value(SubmitReply::sent("msg-1")).unwrap();
    assert_eq!(sent, serde_json::json!({"ok": true, "id": "msg-1"}));

    let failed = serde_json::to_value(SubmitReply::failed(folio_contact::MISSING_FIELDS)).unwrap();
    assert_eq!(
        failed,
        serde_json::json!({"ok": false, "error": "Missing fields"})
    );
}
