use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("line {line}: expected at least {expected} columns, got {got}")]
    TooFewColumns {
        line: usize,
        expected: usize,
        got: usize,
    },
    #[error("line {line}: column {column} is not a number: {token:?}")]
    BadNumber {
        line: usize,
        column: usize,
        token: String,
    },
    #[error("line {line}: baseline value {value} cannot be used for normalization")]
    BadBaseline { line: usize, value: f64 },
}

/// One benchmark data point: a label plus the measurement columns a report
/// variant selects from the raw line, baseline first.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    pub line: usize,
    pub label: String,
    pub values: Vec<f64>,
}

impl MeasurementRow {
    /// Expresses every measurement as a percentage of the baseline (the
    /// first value). The baseline divides by itself, so it always comes
    /// out as exactly 100.
    pub fn normalize(&self) -> Result<Vec<f64>, RowError> {
        let baseline = self.values[0];
        if baseline == 0.0 || !baseline.is_finite() {
            return Err(RowError::BadBaseline {
                line: self.line,
                value: baseline,
            });
        }
        Ok(self.values.iter().map(|v| v / baseline * 100.0).collect())
    }
}

/// Parses one whitespace-delimited measurement line. `columns` holds the
/// token indices to keep, baseline first, in output order; tokens past the
/// highest selected index are ignored.
pub fn parse_line(line_no: usize, line: &str, columns: &[usize]) -> Result<MeasurementRow, RowError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let required = columns.iter().max().copied().unwrap_or(0) + 1;
    if tokens.len() < required {
        return Err(RowError::TooFewColumns {
            line: line_no,
            expected: required,
            got: tokens.len(),
        });
    }

    let values = columns
        .iter()
        .map(|&col| {
            tokens[col].parse::<f64>().map_err(|_| RowError::BadNumber {
                line: line_no,
                column: col,
                token: tokens[col].to_owned(),
            })
        })
        .collect::<Result<Vec<f64>, RowError>>()?;

    Ok(MeasurementRow {
        line: line_no,
        label: tokens[0].to_owned(),
        values,
    })
}

/// Parses every non-empty line of a measurement file, preserving order.
/// Line numbers are 1-based and count blank lines too, so errors point at
/// the real file location.
pub fn parse_rows(data: &str, columns: &[usize]) -> Result<Vec<MeasurementRow>, RowError> {
    data.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(i + 1, line, columns))
        .collect()
}

pub fn format_row(label: &str, values: &[f64]) -> String {
    let mut out = label.to_owned();
    for v in values {
        out.push(' ');
        // Debug keeps the trailing .0 on whole numbers, like the original
        // tables had
        out.push_str(&format!("{v:?}"));
    }
    out
}
