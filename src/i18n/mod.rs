use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_LANGUAGE: &str = "tr";

static TRANSLATIONS: OnceLock<HashMap<String, Value>> = OnceLock::new();

fn load_translations() -> HashMap<String, Value> {
    let mut translations = HashMap::new();

    let tr_json = include_str!("tr.json");
    if let Ok(tr_value) = serde_json::from_str(tr_json) {
        translations.insert("tr".to_string(), tr_value);
    } else {
        tracing::error!("Failed to parse tr.json");
    }

    let en_json = include_str!("en.json");
    if let Ok(en_value) = serde_json::from_str(en_json) {
        translations.insert("en".to_string(), en_value);
    } else {
        tracing::error!("Failed to parse en.json");
    }

    translations
}

fn get_nested_value<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = value;

    for part in key.split('.') {
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

pub fn t(language: &str, path: &str) -> String {
    let translations = TRANSLATIONS.get_or_init(load_translations);

    if let Some(translation) = translations
        .get(language)
        .and_then(|value| get_nested_value(value, path))
        .or_else(|| {
            translations
                .get(DEFAULT_LANGUAGE)
                .and_then(|value| get_nested_value(value, path))
        })
        .and_then(|value| value.as_str())
    {
        translation.to_string()
    } else {
        format!("Message not found: {}", path)
    }
}

/// Fills `{}` placeholders left to right. Arguments are inserted verbatim, so
/// a URL containing `{}` never swallows a later argument.
pub fn t_with_args(language: &str, path: &str, args: &[&str]) -> String {
    let template = t(language, path);
    let mut message = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut pieces = template.split("{}").peekable();

    while let Some(piece) = pieces.next() {
        message.push_str(piece);
        if pieces.peek().is_some() {
            match args.next() {
                Some(arg) => message.push_str(arg),
                None => message.push_str("{}"),
            }
        }
    }

    message
}
