use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            other => Err(anyhow!(
                "Unknown output format `{}`; expected json, table, csv or md",
                other
            )),
        }
    }
}

/// Renders a response. Tabular formats get one row per item and one column
/// per top-level key; nested values are written as compact JSON.
pub fn render(data: &Value, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Table => Ok(render_table(data, false)),
        OutputFormat::Markdown => Ok(render_table(data, true)),
        OutputFormat::Csv => render_csv(data),
    }
}

fn render_table(data: &Value, markdown: bool) -> String {
    let (columns, rows) = tabulate(data);
    if rows.is_empty() {
        return String::new();
    }
    let mut builder = Builder::default();
    builder.push_record(columns);
    for row in rows {
        builder.push_record(row);
    }
    let mut table = builder.build();
    if markdown {
        table.with(Style::markdown());
    } else {
        table.with(Style::modern());
    }
    table.to_string()
}

fn render_csv(data: &Value) -> Result<String> {
    let (columns, rows) = tabulate(data);
    let mut wtr = csv::Writer::from_writer(vec![]);
    if !rows.is_empty() {
        wtr.write_record(&columns)?;
    }
    for row in rows {
        wtr.write_record(&row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| anyhow!("Failed to flush CSV: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

/// Column names in order of first appearance across items, and the cells of each item.
fn tabulate(data: &Value) -> (Vec<String>, Vec<Vec<String>>) {
    let items: Vec<&Value> = match data {
        Value::Array(items) => items.iter().collect(),
        Value::Null => vec![],
        other => vec![other],
    };

    let mut columns: Vec<String> = Vec::new();
    for item in &items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    if columns.is_empty() && !items.is_empty() {
        columns.push("value".to_string());
    }

    let rows = items
        .iter()
        .map(|item| match item {
            Value::Object(map) => columns
                .iter()
                .map(|column| map.get(column).map(cell).unwrap_or_default())
                .collect(),
            scalar => vec![cell(scalar)],
        })
        .collect();

    (columns, rows)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parties() -> Value {
        json!([
            { "id": 36844, "sigla": "PL", "nome": "Partido Liberal", "uri": "https://dadosabertos.camara.leg.br/api/v2/partidos/36844" },
            { "id": 36851, "sigla": "PT", "nome": "Partido dos Trabalhadores", "uri": null },
        ])
    }

    #[test]
    fn formats_parse() {
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn columns_follow_first_appearance() {
        let data = json!([{ "b": 1, "a": 2 }, { "a": 3, "c": 4 }]);
        let (columns, rows) = tabulate(&data);
        assert_eq!(columns, vec!["b", "a", "c"]);
        assert_eq!(rows[1], vec!["", "3", "4"]);
    }

    #[test]
    fn single_objects_become_one_row() {
        let data = json!({ "id": 55, "gabinete": { "sala": "301" } });
        let (columns, rows) = tabulate(&data);
        assert_eq!(columns, vec!["id", "gabinete"]);
        assert_eq!(rows, vec![vec!["55".to_string(), r#"{"sala":"301"}"#.to_string()]]);
    }

    #[test]
    fn csv_output() {
        let csv = render(&parties(), &OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("id,sigla,nome,uri"));
        assert_eq!(
            lines.next(),
            Some("36844,PL,Partido Liberal,https://dadosabertos.camara.leg.br/api/v2/partidos/36844")
        );
        assert_eq!(lines.next(), Some("36851,PT,Partido dos Trabalhadores,"));
    }

    #[test]
    fn markdown_output_has_header_and_rows() {
        let md = render(&parties(), &OutputFormat::Markdown).unwrap();
        assert_eq!(md.lines().count(), 4);
        assert!(md.lines().next().unwrap().contains("sigla"));
        assert!(md.contains("Partido dos Trabalhadores"));
    }

    #[test]
    fn empty_results_render_nothing() {
        assert_eq!(render(&json!([]), &OutputFormat::Table).unwrap(), "");
        assert_eq!(render(&json!([]), &OutputFormat::Csv).unwrap(), "");
        assert_eq!(render(&json!([]), &OutputFormat::Json).unwrap(), "[]");
    }
}
