use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
mod views;

pub use table::TableSection;

/// A response that knows how to lay itself out as titled tables.
pub trait TableRender {
    fn sections(&self) -> Vec<TableSection>;
}

/// Render a response to a string in the requested format.
pub fn render<T>(value: &T, format: OutputFormat) -> anyhow::Result<String>
where
    T: Serialize + TableRender,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(value)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T>(value: &T, format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + TableRender,
{
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: TableRender>(value: &T) -> String {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };
    table::render_sections(&value.sections(), options)
}

/// Untyped fallback: objects as key/value rows, arrays of objects as columns.
impl TableRender for Value {
    fn sections(&self) -> Vec<TableSection> {
        let section = match self {
            Self::Array(items) => array_section(items),
            Self::Object(map) => {
                let mut entries = map.iter().collect::<Vec<_>>();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                TableSection {
                    headers: vec!["key".into(), "value".into()],
                    rows: entries
                        .into_iter()
                        .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                        .collect(),
                    ..TableSection::default()
                }
            }
            scalar => TableSection {
                headers: vec!["value".into()],
                rows: vec![vec![value_to_cell(scalar)]],
                ..TableSection::default()
            },
        };
        vec![section]
    }
}

fn array_section(items: &[Value]) -> TableSection {
    if !items.iter().all(Value::is_object) {
        return TableSection {
            headers: vec!["value".into()],
            rows: items.iter().map(|item| vec![value_to_cell(item)]).collect(),
            ..TableSection::default()
        };
    }

    let mut keys = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
    }
    keys.sort_unstable();

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            keys.iter()
                .map(|key| map.get(*key).map_or_else(|| String::from("-"), value_to_cell))
                .collect()
        })
        .collect();

    TableSection {
        headers: keys.iter().map(|key| (*key).to_string()).collect(),
        rows,
        ..TableSection::default()
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render;
    use crate::cli::OutputFormat;

    #[test]
    fn json_render_is_valid_json() {
        let value = json!({"id": "c-1", "count": 7});
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "c-1");
        assert_eq!(parsed["count"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = json!({"id": "c-1", "count": 7});
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let value = json!({"title": "Company", "type": "object"});
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("title"));
        assert!(out.contains("object"));
    }

    #[test]
    fn table_render_for_object_array_uses_keys_as_columns() {
        let value = json!([{"name": "Acme", "id": "c-1"}, {"id": "c-2"}]);
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().unwrap_or_default();
        assert!(header.starts_with("id"));
        assert!(header.contains("name"));
        assert!(out.lines().last().is_some_and(|line| line.contains('-')));
    }
}
