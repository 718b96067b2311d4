use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dq_model::ColumnProfile;
use dq_report::{FIELD_NAMES, Report};

use crate::types::{BatchResult, RepoOutput};

pub fn print_batch_summary(result: &BatchResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Completeness %"),
        header_cell("Report"),
    ]);
    apply_table_style(&mut table, 140);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_rows = 0usize;
    for file in &result.files {
        total_rows += file.rows;
        let name = file.input.display().to_string();
        match &file.error {
            None => table.add_row(vec![
                Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold),
                Cell::new(file.rows),
                Cell::new(file.columns),
                optional_cell(file.mean_completeness),
                file.output
                    .as_ref()
                    .map_or_else(|| dim_cell("-"), |path| Cell::new(path.display())),
            ]),
            Some(_) => table.add_row(vec![
                Cell::new(name).fg(Color::Red).add_attribute(Attribute::Bold),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                Cell::new("FAILED").fg(Color::Red).add_attribute(Attribute::Bold),
            ]),
        };
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    let failures: Vec<_> = result
        .files
        .iter()
        .filter_map(|file| file.error.as_ref().map(|error| (&file.input, error)))
        .collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for (input, error) in failures {
            eprintln!("- {}: {error}", input.display());
        }
    }
}

pub fn print_report(report: &Report) {
    let mut table = Table::new();
    let mut header = vec![header_cell("Column")];
    header.extend(FIELD_NAMES.iter().map(|name| header_cell(name)));
    table.set_header(header);
    apply_table_style(&mut table, 200);
    for index in 2..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (column, values) in report_rows(report) {
        let mut row = vec![
            Cell::new(column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ];
        row.extend(values.into_iter().map(|value| {
            if value.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(value)
            }
        }));
        table.add_row(row);
    }
    println!("{table}");
}

/// Display values of each report row, in [`FIELD_NAMES`] order.
pub fn report_rows(report: &Report) -> Vec<(String, Vec<String>)> {
    report
        .rows()
        .iter()
        .map(|row| (row.column.clone(), profile_cells(&row.profile)))
        .collect()
}

fn profile_cells(profile: &ColumnProfile) -> Vec<String> {
    fn opt<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }
    fn quoted(values: &[String]) -> String {
        values
            .iter()
            .map(|value| format!("{value:?}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
    vec![
        profile.data_type.to_string(),
        opt(profile.completeness),
        profile.missing_values.to_string(),
        opt(profile.uniqueness),
        opt(profile.max_length),
        opt(profile.min_length),
        opt(profile.max_value.as_ref().map(|v| format!("{v:?}"))),
        opt(profile.min_value.as_ref().map(|v| format!("{v:?}"))),
        quoted(&profile.formats),
        quoted(&profile.samples),
    ]
}

pub fn print_repo_output(output: &RepoOutput) -> serde_json::Result<()> {
    match output {
        RepoOutput::Lines(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        RepoOutput::Json(value) => println!("{}", serde_json::to_string_pretty(value)?),
        RepoOutput::Message(message) => println!("{message}"),
    }
    Ok(())
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn optional_cell(value: Option<u32>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dq_model::DataType;
    use dq_report::ReportRow;

    #[test]
    fn report_rows_quote_values() {
        let report = Report::from_rows(vec![ReportRow {
            column: "name".to_string(),
            profile: ColumnProfile {
                data_type: DataType::Object,
                completeness: Some(66),
                missing_values: 1,
                uniqueness: Some(66),
                max_length: Some(5),
                min_length: Some(0),
                max_value: Some("Bob".to_string()),
                min_value: Some(String::new()),
                formats: vec!["XXX".to_string(), String::new()],
                samples: vec!["Bob".to_string()],
            },
        }])
        .unwrap();
        let rows = report_rows(&report);
        insta::assert_debug_snapshot!(rows, @r#"
        [
            (
                "name",
                [
                    "object",
                    "66",
                    "1",
                    "66",
                    "5",
                    "0",
                    "\"Bob\"",
                    "\"\"",
                    "\"XXX\", \"\"",
                    "\"Bob\"",
                ],
            ),
        ]
        "#);
    }

    #[test]
    fn undefined_fields_render_empty() {
        let report = Report::from_rows(vec![ReportRow {
            column: "a".to_string(),
            profile: ColumnProfile::undefined(DataType::Object),
        }])
        .unwrap();
        let (_, cells) = &report_rows(&report)[0];
        assert_eq!(cells[0], "object");
        assert!(cells[1].is_empty());
        assert_eq!(cells[2], "0");
        assert!(cells[3..].iter().all(String::is_empty));
    }
}
