use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Columns shown first when present; the rest follow alphabetically.
const LEADING_COLUMNS: &[&str] = &["id", "name", "speaker.name", "status", "priority"];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_rows(&items)),
        // `{ "speakers": [...] }` envelopes render as the list itself.
        Value::Object(map) if map.len() == 1 && map.values().all(Value::is_array) => {
            let items = map.into_iter().next().map(|(_, v)| v);
            match items {
                Some(Value::Array(items)) => Ok(render_rows(&items)),
                _ => Ok(String::from("(no rows)")),
            }
        }
        Value::Object(map) => {
            let mut flat = Map::new();
            flatten_into(&mut flat, "", map);
            let rows = flat
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&["key", "value"], &rows, options()))
        }
        scalar => Ok(table::render_entity_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options(),
        )),
    }
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, options());
    }

    let flattened = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            let mut flat = Map::new();
            flatten_into(&mut flat, "", map.clone());
            flat
        })
        .collect::<Vec<_>>();

    let headers = column_order(&flattened);
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = flattened
        .iter()
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options())
}

/// Nested objects become dotted keys (`speaker.name`); one level deep is
/// enough for every response the CLI prints.
fn flatten_into(out: &mut Map<String, Value>, prefix: &str, map: Map<String, Value>) {
    for (key, value) in map {
        let key = if prefix.is_empty() {
            key
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(inner) if prefix.is_empty() => flatten_into(out, &key, inner),
            other => {
                out.insert(key, other);
            }
        }
    }
}

fn column_order(rows: &[Map<String, Value>]) -> Vec<String> {
    let mut rest = Vec::<String>::new();
    for key in rows.iter().flat_map(Map::keys) {
        if !LEADING_COLUMNS.contains(&key.as_str()) && !rest.contains(key) {
            rest.push(key.clone());
        }
    }
    rest.sort();

    let mut headers = LEADING_COLUMNS
        .iter()
        .filter(|col| rows.iter().any(|row| row.contains_key(**col)))
        .map(|col| (*col).to_string())
        .collect::<Vec<_>>();
    headers.extend(rest);
    headers
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
