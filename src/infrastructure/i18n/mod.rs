use indexmap::IndexMap;
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{ApiError, ApiResult};

/// Named values interpolated into `:name` placeholders
pub type MessageParams = IndexMap<String, String>;

const EMBEDDED_LOCALE: &str = "en";
const EMBEDDED_GROUPS: [(&str, &str); 2] = [
    (
        "error_catalogue",
        include_str!("../../../resources/lang/en/error_catalogue.json"),
    ),
    (
        "validation",
        include_str!("../../../resources/lang/en/validation.json"),
    ),
];

/// Resolves translation keys to display strings
pub trait Translator: Send + Sync {
    /// Translated and interpolated message, `None` when the key is unknown
    fn lookup(&self, key: &str, params: &MessageParams) -> Option<String>;

    /// Like [`Translator::lookup`] but falls back to the key itself
    fn translate(&self, key: &str, params: &MessageParams) -> String {
        self.lookup(key, params).unwrap_or_else(|| key.to_string())
    }
}

/// Key/value messages per locale, addressed as `<group>.<key>`.
///
/// Lookups try the active locale, then the fallback locale.
#[derive(Debug, Clone)]
pub struct Catalogue {
    locale: String,
    fallback_locale: String,
    messages: HashMap<String, HashMap<String, String>>,
}

impl Catalogue {
    /// Empty catalogue
    pub fn new(locale: impl Into<String>, fallback_locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            fallback_locale: fallback_locale.into(),
            messages: HashMap::new(),
        }
    }

    /// Catalogue preloaded with the embedded English messages
    pub fn with_defaults(
        locale: impl Into<String>,
        fallback_locale: impl Into<String>,
    ) -> ApiResult<Self> {
        let mut catalogue = Self::new(locale, fallback_locale);
        for (group, source) in EMBEDDED_GROUPS {
            catalogue.add_group_json(EMBEDDED_LOCALE, group, source, group)?;
        }
        Ok(catalogue)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    pub fn insert(&mut self, locale: &str, key: impl Into<String>, message: impl Into<String>) {
        self.messages
            .entry(locale.to_string())
            .or_default()
            .insert(key.into(), message.into());
    }

    /// Parse a JSON object and register its entries under `group`.
    ///
    /// Nested objects are flattened with `.`; `origin` only labels errors.
    pub fn add_group_json(
        &mut self,
        locale: &str,
        group: &str,
        source: &str,
        origin: &str,
    ) -> ApiResult<()> {
        let value: Value = serde_json::from_str(source).map_err(|e| ApiError::Catalogue {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;

        if !value.is_object() {
            return Err(ApiError::Catalogue {
                path: origin.to_string(),
                reason: "top-level value must be an object".to_string(),
            });
        }

        let mut flat = Vec::new();
        flatten(group, &value, &mut flat);
        for (key, message) in flat {
            self.insert(locale, key, message);
        }
        Ok(())
    }

    /// Load every `<dir>/<locale>/<group>.json` file, returning the file count
    pub fn load_dir(&mut self, dir: &Path) -> ApiResult<usize> {
        let mut loaded = 0;

        for locale_entry in fs::read_dir(dir)? {
            let locale_path = locale_entry?.path();
            if !locale_path.is_dir() {
                continue;
            }
            let Some(locale) = file_name(&locale_path) else {
                continue;
            };

            for group_entry in fs::read_dir(&locale_path)? {
                let group_path = group_entry?.path();
                if group_path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let Some(group) = group_path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };

                let source = fs::read_to_string(&group_path)?;
                self.add_group_json(&locale, group, &source, &group_path.display().to_string())?;
                loaded += 1;
            }
        }

        tracing::debug!(dir = %dir.display(), files = loaded, "Loaded translation catalogue");
        Ok(loaded)
    }

    fn raw(&self, key: &str) -> Option<&str> {
        [&self.locale, &self.fallback_locale]
            .into_iter()
            .find_map(|locale| self.messages.get(locale.as_str())?.get(key))
            .map(String::as_str)
    }
}

impl Translator for Catalogue {
    fn lookup(&self, key: &str, params: &MessageParams) -> Option<String> {
        self.raw(key).map(|template| interpolate(template, params))
    }
}

/// Replace `:name` placeholders with their params.
///
/// `:Name` is filled with the param capitalized. Unknown placeholders are left
/// untouched.
pub fn interpolate(template: &str, params: &MessageParams) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let placeholder = PLACEHOLDER.get_or_init(|| {
        Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("placeholder pattern is valid")
    });

    placeholder
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            if let Some(value) = params.get(name) {
                return value.clone();
            }
            match params.get(&name.to_lowercase()) {
                Some(value) if name.starts_with(char::is_uppercase) => capitalize(value),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten(&format!("{prefix}.{key}"), nested, out);
            }
        }
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        Value::Number(n) => out.push((prefix.to_string(), n.to_string())),
        Value::Bool(b) => out.push((prefix.to_string(), b.to_string())),
        Value::Null | Value::Array(_) => {}
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}
