use serde_json::{Map, Value};

/// Keys of the response body, in wire order
pub const WIRE_KEYS: [&str; 6] = ["success", "result", "errors", "links", "message", "extra"];

/// Reshape an envelope-shaped map into the wire body.
///
/// Only the six wire keys are kept. A missing `success` becomes `false`, any
/// other missing key becomes `null`. Extra keys such as `status_code` are
/// dropped since the transport consumes them.
pub fn normalize_envelope(envelope: &Map<String, Value>) -> Map<String, Value> {
    WIRE_KEYS
        .iter()
        .map(|key| {
            let value = match (envelope.get(*key), *key) {
                (Some(Value::Null) | None, "success") => Value::Bool(false),
                (Some(value), _) => value.clone(),
                (None, _) => Value::Null,
            };
            (key.to_string(), value)
        })
        .collect()
}
