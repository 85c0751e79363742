use serde_json::Value;

const WIRE_KEYS: [&str; 6] = ["success", "result", "errors", "links", "message", "extra"];

/// Body has exactly the six envelope keys
pub fn assert_wire_shape(body: &Value) {
    let object = body.as_object().expect("Envelope must be a JSON object");
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), WIRE_KEYS.len(), "Unexpected envelope keys: {:?}", keys);
    for key in WIRE_KEYS {
        assert!(object.contains_key(key), "Missing envelope key '{}'", key);
    }
}

pub fn assert_success_envelope(body: &Value) {
    assert_wire_shape(body);
    assert_eq!(body["success"], Value::Bool(true), "Expected success envelope");
    assert!(body["errors"].is_null(), "Success envelope must not carry errors");
}

/// Failure envelope with a single error named `expected_name`; returns that error
pub fn assert_error_envelope<'a>(body: &'a Value, expected_name: &str) -> &'a Value {
    assert_wire_shape(body);
    assert_eq!(body["success"], Value::Bool(false), "Expected failure envelope");
    assert!(body["result"].is_null(), "Failure envelope must not carry a result");

    let errors = body["errors"].as_array().expect("Missing errors array");
    assert_eq!(errors.len(), 1, "Expected exactly one named error");

    let error = &errors[0];
    assert_eq!(
        error.get("name").and_then(|v| v.as_str()),
        Some(expected_name),
        "Error name mismatch"
    );
    assert!(
        error.get("debug_id").and_then(|v| v.as_str()).is_some(),
        "Missing debug_id"
    );
    assert_eq!(error["message"], body["message"], "Error and envelope messages differ");
    assert!(error["details"].is_array(), "Missing details array");

    error
}

/// Find the detail reported for `field`
pub fn detail_for<'a>(error: &'a Value, field: &str) -> &'a Value {
    error["details"]
        .as_array()
        .and_then(|details| {
            details
                .iter()
                .find(|d| d.get("field").and_then(|v| v.as_str()) == Some(field))
        })
        .unwrap_or_else(|| panic!("No detail for field '{}'", field))
}
