/// Table constructors for simulation output.
///
/// ```text
/// Choice | 0 | 1 | 2
/// Red    | 0.4 | 0.35 | 0.25
/// Blue   | 0.65 | 0.35 | 0
/// ```
///
/// The first cell of a row is its label. Rows labelled `Choice` are headers: the
/// first one fixes the columns, later ones are skipped. Blank lines are ignored.
use tracing::trace;

use crate::combination::{ProbabilityMassFunctionCombination, SeatProjection, VotingIntentions};
use crate::constants::{COLUMN_SEPARATOR, HEADER_TOKEN, VOTE_SHARE_RESOLUTION};
use crate::error::{Error, Result};
use crate::pmf::ProbabilityMassFunction;
use crate::range::ProbabilityRange;

struct DataRow {
    label: String,
    probabilities: Vec<f64>,
}

struct Table {
    /// Header cells after the label column, with the header's 1-based line number.
    header: Vec<String>,
    header_line: usize,
    rows: Vec<DataRow>,
}

fn split_cells(line: &str) -> Vec<&str> {
    line.split(COLUMN_SEPARATOR).map(str::trim).collect()
}

fn parse_probability(cell: &str, label: &str, line: usize) -> Result<f64> {
    cell.parse::<f64>().map_err(|_| {
        Error::invalid_argument(format!(
            "non-numeric probability \"{cell}\" for \"{label}\" at line {line}"
        ))
    })
}

fn parse_table(input: &str) -> Result<Table> {
    let mut header: Option<(Vec<String>, usize)> = None;
    let mut rows = Vec::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line = idx + 1;
        if raw_line.trim().is_empty() {
            continue;
        }

        // split() always yields at least one cell
        let cells = split_cells(raw_line);
        let (label, values) = (cells[0], &cells[1..]);

        if label == HEADER_TOKEN {
            if header.is_none() {
                header = Some((values.iter().map(|c| c.to_string()).collect(), line));
            } else {
                trace!(line, "skipping repeated header row");
            }
            continue;
        }

        let Some((columns, _)) = header.as_ref() else {
            return Err(Error::malformed(line, format!("data row \"{label}\" before header row")));
        };
        if label.is_empty() {
            return Err(Error::malformed(line, "row without a group label"));
        }
        if values.len() != columns.len() {
            return Err(Error::malformed(
                line,
                format!(
                    "\"{label}\" has {} probabilities, header has {} columns",
                    values.len(),
                    columns.len()
                ),
            ));
        }

        let probabilities = values
            .iter()
            .map(|cell| parse_probability(cell, label, line))
            .collect::<Result<Vec<f64>>>()?;
        rows.push(DataRow { label: label.to_string(), probabilities });
    }

    let (header, header_line) =
        header.ok_or_else(|| Error::malformed(0, format!("no \"{HEADER_TOKEN}\" header row")))?;
    Ok(Table { header, header_line, rows })
}

/// Build one distribution per data row, pairing column `i` with `keys[i]`.
fn assemble<T: Ord + Clone + std::fmt::Debug>(
    keys: &[T],
    rows: Vec<DataRow>,
) -> Result<ProbabilityMassFunctionCombination<T>> {
    let groups = rows
        .into_iter()
        .map(|row| {
            let pmf = ProbabilityMassFunction::new(keys.iter().cloned().zip(row.probabilities))?;
            Ok((row.label, pmf))
        })
        .collect::<Result<Vec<_>>>()?;
    ProbabilityMassFunctionCombination::new(groups)
}

impl VotingIntentions {
    /// Parse a vote-share table. Column `i` covers `[i / 2000, (i + 1) / 2000)`;
    /// header cell contents are not interpreted.
    pub fn from_table(input: &str) -> Result<Self> {
        let table = parse_table(input)?;
        let keys = (0..table.header.len())
            .map(|i| {
                let index = u32::try_from(i)
                    .map_err(|_| Error::malformed(table.header_line, "too many columns"))?;
                ProbabilityRange::band(index, VOTE_SHARE_RESOLUTION)
            })
            .collect::<Result<Vec<_>>>()?;
        assemble(&keys, table.rows)
    }
}

impl SeatProjection {
    /// Parse a seat-count table. Header cells are the seat counts.
    pub fn from_table(input: &str) -> Result<Self> {
        let table = parse_table(input)?;
        let keys = table
            .header
            .iter()
            .map(|cell| {
                cell.parse::<u32>().map_err(|_| {
                    Error::malformed(table.header_line, format!("seat count \"{cell}\" is not a non-negative integer"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        assemble(&keys, table.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEATS: &str = "\
Choice | 0 | 1 | 2
Red | 0.4 | 0.35 | 0.25
Blue | 0.65 | 0.35 | 0
";

    #[test]
    fn test_seat_projection_from_table() {
        let projection = SeatProjection::from_table(SEATS).unwrap();
        assert_eq!(projection.group_count(), 2);
        assert_eq!(projection.median("Red").unwrap(), 1);
        assert_eq!(projection.median("Blue").unwrap(), 0);
        assert_eq!(projection.probability("Blue", &2).unwrap(), 0.0);
    }

    #[test]
    fn test_voting_intentions_from_table() {
        let input = "Choice | 0 | 0.05 | 0.10 | 0.15\nGreen | 0.1 | 0.3 | 0.4 | 0.2\n";
        let intentions = VotingIntentions::from_table(input).unwrap();
        let band = ProbabilityRange::band(2, 2000).unwrap();
        assert_eq!(intentions.median("Green").unwrap(), band);
        assert_eq!(intentions.probability("Green", &band).unwrap(), 0.4);
        assert_eq!(intentions.distribution("Green").unwrap().len(), 4);
    }

    #[test]
    fn test_repeated_header_and_blank_lines_skipped() {
        let input = "\nChoice | 0 | 1\nRed | 0.5 | 0.5\n\nChoice | 0 | 1\nBlue | 1 | 0\n";
        let projection = SeatProjection::from_table(input).unwrap();
        assert_eq!(projection.groups().collect::<Vec<_>>(), vec!["Blue", "Red"]);
    }

    #[test]
    fn test_row_width_mismatch() {
        let input = "Choice | 0 | 1 | 2\nRed | 0.5 | 0.5\n";
        let err = SeatProjection::from_table(input).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 2, .. }), "got {err:?}");
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            VotingIntentions::from_table("Red | 0.5 | 0.5\n"),
            Err(Error::MalformedInput { line: 1, .. })
        ));
        assert!(matches!(VotingIntentions::from_table(""), Err(Error::MalformedInput { .. })));
    }

    #[test]
    fn test_non_numeric_probability() {
        let input = "Choice | 0 | 1\nRed | 0.5 | lots\n";
        assert!(matches!(SeatProjection::from_table(input), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_non_integer_seat_header() {
        let input = "Choice | 0 | one\nRed | 0.5 | 0.5\n";
        assert!(matches!(SeatProjection::from_table(input), Err(Error::MalformedInput { line: 1, .. })));
    }
}
