use crate::domain::model::Tabular;

/// Formats a float the way Python's `repr` does for ordinary magnitudes:
/// integral values keep one decimal (`5000.0`), everything else uses the
/// shortest round-trip representation.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Renders rows as an aligned console table with a leading zero-based index column.
pub fn render_table<T: Tabular>(rows: &[T]) -> String {
    let body: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();

    let index_width = rows.len().saturating_sub(1).to_string().len();
    let widths: Vec<usize> = T::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            body.iter()
                .map(|cells| cells[i].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&" ".repeat(index_width));
    for (name, width) in T::COLUMNS.iter().zip(&widths) {
        out.push_str(&format!("  {:>width$}", name, width = *width));
    }
    out.push('\n');

    for (idx, cells) in body.iter().enumerate() {
        out.push_str(&format!("{:<width$}", idx, width = index_width));
        for (cell, width) in cells.iter().zip(&widths) {
            out.push_str(&format!("  {:>width$}", cell, width = *width));
        }
        out.push('\n');
    }

    out.push_str(&format!("\n[{} rows x {} columns]", rows.len(), T::COLUMNS.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::GdpRecord;

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(5000.0), "5000.0");
        assert_eq!(format_float(1234.57), "1234.57");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(-3.0), "-3.0");
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let rows = vec![
            GdpRecord {
                country: "United States".to_string(),
                gdp_usd_billions: 26854.6,
            },
            GdpRecord {
                country: "China".to_string(),
                gdp_usd_billions: 19373.59,
            },
        ];

        let rendered = render_table(&rows);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "         Country  GDP_USD_billions");
        assert_eq!(lines[1], "0  United States           26854.6");
        assert_eq!(lines[2], "1          China          19373.59");
        assert_eq!(lines[4], "[2 rows x 2 columns]");
    }
}
