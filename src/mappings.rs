//! Extraction and typed coercion of `key:=value` command-line mappings

use std::collections::HashMap;

use log::debug;

use crate::parser::parse_literal;
use crate::value::Value;

/// Delimiter separating key and value in a mapping token
pub const REMAP: &str = ":=";

/// Key-unique mapping from variable name to coerced value
pub type Mappings = HashMap<String, Value>;

/// Scan an argument sequence and build the mapping set.
///
/// Tokens containing `:=` are split on the first occurrence; everything
/// else is left for the flag parser. Later occurrences of a key overwrite
/// earlier ones.
pub fn load_mappings<I, S>(args: I) -> Mappings
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mappings = Mappings::new();
    for arg in args {
        let arg = arg.as_ref();
        if let Some((key, value)) = arg.split_once(REMAP) {
            let coerced = coerce(value);
            debug!("mapping `{key}` := {coerced:?} ({})", coerced.type_name());
            mappings.insert(key.to_string(), coerced);
        }
    }
    mappings
}

/// Coerce a single raw value into its natural type.
///
/// Decision table, first match wins:
/// 1. bracket-delimited → list coercion
/// 2. starts with a quote → quoted string literal
/// 3. all decimal digits ignoring `.` → integer or float
/// 4. anything else → the raw text as a string
///
/// Never fails: any literal parse failure degrades to the raw text as a
/// plain string.
pub fn coerce(raw: &str) -> Value {
    if is_list_shaped(raw) {
        return coerce_list(raw);
    }
    if raw.starts_with('\'') || raw.starts_with('"') {
        return match parse_literal(raw) {
            Ok(value) => value,
            Err(err) => {
                debug!("quoted value `{raw}` is not a literal ({err}); keeping raw text");
                Value::String(raw.to_string())
            }
        };
    }
    if looks_numeric(raw) {
        let parsed = if raw.contains('.') {
            raw.parse::<f64>().map(Value::Float).ok()
        } else {
            raw.parse::<i64>().map(Value::Integer).ok()
        };
        return match parsed {
            Some(value) => value,
            None => {
                debug!("numeric-looking value `{raw}` did not parse; keeping raw text");
                Value::String(raw.to_string())
            }
        };
    }
    Value::String(raw.to_string())
}

/// Coerce a bracket-delimited value into a list, inferring each element's
/// type independently.
///
/// The interior is split on every comma (commas inside quotes or nested
/// brackets split too); elements that fail the literal grammar become
/// strings verbatim, so `[1, test, 3]` yields `[1, "test", 3]`.
pub fn coerce_list(raw: &str) -> Value {
    debug_assert!(is_list_shaped(raw));
    let inner = &raw[1..raw.len() - 1];
    if inner.trim().is_empty() {
        return Value::List(Vec::new());
    }
    let items = inner
        .split(',')
        .map(|element| {
            let element = element.trim();
            parse_literal(element).unwrap_or_else(|err| {
                debug!("list element `{element}` is not a literal ({err}); keeping raw text");
                Value::String(element.to_string())
            })
        })
        .collect();
    Value::List(items)
}

fn is_list_shaped(raw: &str) -> bool {
    raw.len() >= 2 && raw.starts_with('[') && raw.ends_with(']')
}

/// True when the value, with all `.` removed, is non-empty and consists
/// entirely of ASCII digits. A leading sign disqualifies, so `-5` stays a
/// string at the top level (while list elements go through the full
/// grammar and keep their sign).
fn looks_numeric(raw: &str) -> bool {
    raw.chars().any(|c| c.is_ascii_digit())
        && raw.chars().all(|c| c == '.' || c.is_ascii_digit())
}
