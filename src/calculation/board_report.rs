use crate::calculation::projection::{ChartRow, TableRow};
use crate::prelude::*;
use crate::store::DisplayMode;

/// What a command produced, one step before it becomes stdout text.
///
/// Table and chart render as csv; raw is a pass-through json blob.
#[derive(Debug)]
pub enum BoardReport {
    Table(Vec<TableRow>),
    Chart {
        rows: Vec<ChartRow>,
        mode: DisplayMode,
    },
    Raw(String),
}

impl BoardReport {
    /// Renders the report into the string that gets printed.
    pub fn render(&self, unformatted: bool) -> AppResult<String> {
        match self {
            BoardReport::Table(rows) => format_table(rows, unformatted),
            BoardReport::Chart { rows, mode } => format_chart(rows, *mode, unformatted),
            BoardReport::Raw(json) => Ok(json.clone()),
        }
    }
}

/// The table keeps its header row; it is the one report meant for humans
/// as much as for pipes.
fn format_table(rows: &[TableRow], unformatted: bool) -> AppResult<String> {
    /// Column layout of the rendered table. Money columns become display
    /// strings here so the formatting flag has one place to act.
    #[derive(Serialize)]
    struct CsvRow<'a> {
        selected: bool,
        name: &'a str,
        lab: &'a str,
        input: &'a str,
        output: &'a str,
        combined: String,
        intelligence: f64,
        value: f64,
        release_date: &'a str,
        link: &'a str,
    }

    let mut writer = csv::Writer::from_writer(vec![]);

    for row in rows {
        let csv_row = CsvRow {
            selected: row.selected,
            name: &row.name,
            lab: &row.lab,
            input: &row.input,
            output: &row.output,
            combined: render_money(row.combined, unformatted),
            intelligence: row.intelligence,
            value: row.value,
            release_date: &row.release_date,
            link: row.link.as_deref().unwrap_or(""),
        };

        writer
            .serialize(csv_row)
            .into_diagnostic()
            .wrap_err("Failed to serialize a table row to csv.")?;
    }

    into_csv_string(writer)
}

/// Chart rows render headerless for piping.
///
/// Single-metric modes use the two-column shape: the display name (with
/// the metric folded in, like "model-x ($1.23)") on the left and the bare
/// number on the right, so downstream sorting still works on a clean
/// numeric cell. The both mode emits name,input,output instead.
fn format_chart(rows: &[ChartRow], mode: DisplayMode, unformatted: bool) -> AppResult<String> {
    /// Left cell for the label, right cell for the number.
    #[derive(Serialize)]
    struct MetricRow {
        display_name: String,
        content: f64,
    }

    /// The both mode carries the two bar heights side by side.
    #[derive(Serialize)]
    struct PairRow<'a> {
        display_name: &'a str,
        input: f64,
        output: f64,
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false) // I don't want a header.
        .from_writer(vec![]);

    for row in rows {
        match mode {
            DisplayMode::Both => {
                let pair = PairRow {
                    display_name: &row.name,
                    input: row.input,
                    output: row.output,
                };

                writer
                    .serialize(pair)
                    .into_diagnostic()
                    .wrap_err("Failed to serialize a chart row to csv.")?;
            }

            _ => {
                let (metric, is_money) = match mode {
                    DisplayMode::Input => (row.input, true),
                    DisplayMode::Output => (row.output, true),
                    DisplayMode::Combined => (row.combined, true),
                    DisplayMode::Value => (row.value, false),
                    DisplayMode::Both => unreachable!("handled above"),
                };

                // When formatting is on, fold the metric into the label.
                // Money keeps its symbol there; the value score is a bare
                // ratio and gets none.
                let display_name = if unformatted {
                    row.name.clone()
                } else if is_money {
                    format!("{} ({})", row.name, render_money(metric, false))
                } else {
                    format!("{} ({:.2})", row.name, metric)
                };

                let metric_row = MetricRow {
                    display_name,
                    content: metric,
                };

                writer
                    .serialize(metric_row)
                    .into_diagnostic()
                    .wrap_err("Failed to serialize a chart row to csv.")?;
            }
        }
    }

    into_csv_string(writer)
}

/// Render money.
/// example: $1.23 when formatted, 1.23 when not.
fn render_money(value: f64, no_format: bool) -> String {
    if no_format {
        return value.to_string();
    }

    format!("${:.2}", value)
}

fn into_csv_string(writer: csv::Writer<Vec<u8>>) -> AppResult<String> {
    let data = writer
        .into_inner()
        .into_diagnostic()
        .wrap_err("Failed to get writer data.")?;

    let csv_string = String::from_utf8(data)
        .into_diagnostic()
        .wrap_err("Invalid utf-8")?;

    Ok(csv_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_row() -> ChartRow {
        ChartRow {
            name: "model-x".to_owned(),
            input: 2.0,
            output: 1.0,
            combined: 1.75,
            value: 20.0,
        }
    }

    #[test]
    fn table_render_has_a_header_row() {
        let report = BoardReport::Table(vec![TableRow {
            selected: true,
            name: "model-x".to_owned(),
            lab: "Lab X".to_owned(),
            input: "$2.00".to_owned(),
            output: "$1.00".to_owned(),
            combined: 1.75,
            intelligence: 35.0,
            value: 20.0,
            release_date: "Apr 9, 2024".to_owned(),
            link: None,
        }]);

        let rendered = report.render(false).unwrap();
        let mut lines = rendered.lines();

        assert_eq!(
            lines.next().unwrap(),
            "selected,name,lab,input,output,combined,intelligence,value,release_date,link"
        );
        assert_eq!(
            lines.next().unwrap(),
            "true,model-x,Lab X,$2.00,$1.00,$1.75,35.0,20.0,\"Apr 9, 2024\","
        );
    }

    #[test]
    fn single_metric_chart_is_the_two_column_shape() {
        let report = BoardReport::Chart {
            rows: vec![chart_row()],
            mode: DisplayMode::Combined,
        };

        let rendered = report.render(false).unwrap();

        assert_eq!(rendered.trim(), "model-x ($1.75),1.75");
    }

    #[test]
    fn unformatted_chart_drops_the_label_decoration() {
        let report = BoardReport::Chart {
            rows: vec![chart_row()],
            mode: DisplayMode::Combined,
        };

        let rendered = report.render(true).unwrap();

        assert_eq!(rendered.trim(), "model-x,1.75");
    }

    #[test]
    fn both_mode_emits_input_and_output_columns() {
        let report = BoardReport::Chart {
            rows: vec![chart_row()],
            mode: DisplayMode::Both,
        };

        let rendered = report.render(false).unwrap();

        assert_eq!(rendered.trim(), "model-x,2.0,1.0");
    }

    #[test]
    fn value_mode_labels_without_a_dollar_sign() {
        let report = BoardReport::Chart {
            rows: vec![chart_row()],
            mode: DisplayMode::Value,
        };

        let rendered = report.render(false).unwrap();

        assert_eq!(rendered.trim(), "model-x (20.00),20.0");
    }
}
