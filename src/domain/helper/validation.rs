use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use super::service::ApiHelper;
use crate::domain::response::ErrorDetail;
use crate::infrastructure::i18n::{interpolate, MessageParams};

/// Custom messages keyed `<field>.<code>` or `<code>`
pub type ValidationMessages = HashMap<String, String>;

/// Display names used for `:attribute`, keyed by field path or field name
pub type FieldLabels = HashMap<String, String>;

/// Ordered failure messages per field, as reported by a validation engine
pub type FieldFailures = IndexMap<String, Vec<String>>;

/// Failing rules per field path; `None` marks a struct-level failure
type PathFailures<'a> = Vec<(Option<String>, &'a [ValidationError])>;

const VALIDATION_GROUP: &str = "validation";
const INVALID_KEY: &str = "validation.invalid";

// validator reports `#[validate(schema(..))]` failures under this key
const STRUCT_LEVEL: &str = "__all__";
const STRUCT_LABEL: &str = "input";

impl ApiHelper {
    /// Validate `fields` and reshape the failures into error details.
    ///
    /// Returns `None` when validation passes, otherwise one detail per failing
    /// field carrying the submitted value and every message for that field.
    /// Nested failures are reported under dotted paths (`address.city`,
    /// `items[0].sku`), struct-level failures without a field. Details are
    /// ordered by path.
    pub fn validate_request_fields<T>(
        &self,
        fields: &T,
        messages: &ValidationMessages,
        labels: &FieldLabels,
    ) -> Option<Vec<ErrorDetail>>
    where
        T: Validate + Serialize,
    {
        let errors = match fields.validate() {
            Ok(()) => return None,
            Err(errors) => errors,
        };

        let submitted = match serde_json::to_value(fields) {
            Ok(Value::Object(map)) => map,
            Ok(_) => Map::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not serialize submitted fields");
                Map::new()
            }
        };

        let mut failures = PathFailures::new();
        collect_failures(&errors, None, &mut failures);
        failures.sort_by(|a, b| a.0.cmp(&b.0));

        let mut details: Vec<ErrorDetail> = failures
            .into_iter()
            .map(|(path, errs)| {
                let label = field_label(path.as_deref(), labels);
                let issues = errs
                    .iter()
                    .map(|error| self.failure_message(path.as_deref(), &label, error, messages))
                    .collect();
                let value = path
                    .as_deref()
                    .and_then(|p| value_at(&submitted, p))
                    .cloned();
                ErrorDetail::construct(Some(issues), path.as_deref(), value, None)
            })
            .collect();

        // A failed validation never reads as a pass
        if details.is_empty() {
            tracing::warn!(errors = %errors, "Validation failed without field errors");
            details.push(ErrorDetail::new().with_issue(self.invalid_message(STRUCT_LABEL)));
        }

        Some(details)
    }

    /// Reshape a `field -> [message]` failure map into error details,
    /// keeping its order. An empty map means no errors.
    pub fn details_from_failures(
        &self,
        fields: &Map<String, Value>,
        failures: FieldFailures,
    ) -> Option<Vec<ErrorDetail>> {
        if failures.is_empty() {
            return None;
        }

        let details = failures
            .into_iter()
            .map(|(field, issues)| {
                let value = value_at(fields, &field).cloned();
                ErrorDetail::construct(Some(issues), Some(&field), value, None)
            })
            .collect();

        Some(details)
    }

    fn failure_message(
        &self,
        field: Option<&str>,
        label: &str,
        error: &ValidationError,
        messages: &ValidationMessages,
    ) -> String {
        let mut params = MessageParams::new();
        params.insert("attribute".to_string(), label.to_string());
        for (name, value) in &error.params {
            if name == "value" {
                continue;
            }
            params.insert(name.to_string(), param_text(value));
        }

        let custom = field
            .and_then(|field| messages.get(&format!("{field}.{}", error.code)))
            .or_else(|| messages.get(&*error.code));
        if let Some(template) = custom {
            return interpolate(template, &params);
        }

        if let Some(message) = &error.message {
            return interpolate(message, &params);
        }

        let translator = self.translator();
        catalogue_keys(error)
            .iter()
            .find_map(|key| translator.lookup(key, &params))
            .unwrap_or_else(|| translator.translate(INVALID_KEY, &params))
    }

    fn invalid_message(&self, label: &str) -> String {
        let params: MessageParams = [("attribute".to_string(), label.to_string())]
            .into_iter()
            .collect();
        self.translator().translate(INVALID_KEY, &params)
    }
}

/// Flatten the engine's error tree into `(path, failures)` pairs
fn collect_failures<'a>(
    errors: &'a ValidationErrors,
    prefix: Option<&str>,
    out: &mut PathFailures<'a>,
) {
    for (name, kind) in errors.errors() {
        let name: &str = name;
        let path = if name == STRUCT_LEVEL {
            prefix.map(str::to_string)
        } else {
            Some(match prefix {
                Some(prefix) => format!("{prefix}.{name}"),
                None => name.to_string(),
            })
        };

        match kind {
            ValidationErrorsKind::Field(errs) => out.push((path, errs.as_slice())),
            ValidationErrorsKind::Struct(nested) => collect_failures(nested, path.as_deref(), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item = format!("{}[{index}]", path.as_deref().unwrap_or_default());
                    collect_failures(nested, Some(&item), out);
                }
            }
        }
    }
}

/// Label for `:attribute`: by full path, then by the last segment's name
fn field_label(path: Option<&str>, labels: &FieldLabels) -> String {
    let Some(path) = path else {
        return STRUCT_LABEL.to_string();
    };
    let name = leaf_name(path);
    labels
        .get(path)
        .or_else(|| labels.get(name))
        .cloned()
        .unwrap_or_else(|| name.replace('_', " "))
}

fn leaf_name(path: &str) -> &str {
    let last = path.rsplit('.').next().unwrap_or(path);
    last.split('[').next().unwrap_or(last)
}

/// Submitted value at a field path such as `address.city` or `items[0].sku`
fn value_at<'a>(fields: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    if let Some(value) = fields.get(path) {
        return Some(value);
    }

    let mut current: Option<&Value> = None;
    for segment in path.split('.') {
        let mut parts = segment.split('[');
        let key = parts.next()?;
        let mut value = match current {
            None => fields.get(key)?,
            Some(parent) => parent.get(key)?,
        };
        for index in parts {
            let index: usize = index.strip_suffix(']')?.parse().ok()?;
            value = value.get(index)?;
        }
        current = Some(value);
    }
    current
}

/// Catalogue keys to try for a failure, most specific first
fn catalogue_keys(error: &ValidationError) -> Vec<String> {
    let code: &str = &error.code;
    let has = |name: &str| error.params.contains_key(name);

    let variant = match code {
        "length" | "range" if has("min") && has("max") => Some("between"),
        "length" if has("equal") => Some("equal"),
        "length" | "range" if has("min") => Some("min"),
        "length" | "range" if has("max") => Some("max"),
        _ => None,
    };

    let mut keys = Vec::with_capacity(2);
    if let Some(variant) = variant {
        keys.push(format!("{VALIDATION_GROUP}.{code}.{variant}"));
    }
    keys.push(format!("{VALIDATION_GROUP}.{code}"));
    keys
}

fn param_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
