//! Command-mode dispatch: one reference operation per invocation.

use anyhow::{Context, Result};
use gridref_core::reference::{self, ExpandLimits};

use crate::error::CliError;

fn expect_args<'a, const N: usize>(command: &str, args: &'a [String]) -> Result<&'a [String; N]> {
    args.try_into().map_err(|_| {
        CliError::WrongArity {
            command: command.to_string(),
            expected: N,
            got: args.len(),
        }
        .into()
    })
}

fn parse_offset(value: &str) -> Result<isize> {
    value
        .parse()
        .map_err(|_| CliError::InvalidNumber(value.to_string()).into())
}

/// Run `command` and return the lines to print.
pub fn run(command: &str, args: &[String], limits: &ExpandLimits) -> Result<Vec<String>> {
    let lines = match command {
        "column" => {
            let [value] = expect_args::<1>(command, args)?;
            // Digits are an index, anything else is letters.
            if let Ok(index) = value.parse::<usize>() {
                vec![reference::column_to_letter(index)]
            } else {
                vec![reference::letter_to_column(value)?.to_string()]
            }
        }
        "cell" => {
            let [cell] = expect_args::<1>(command, args)?;
            let cell = reference::parse_cell_ref(cell)?;
            vec![format!("{} {}", cell.row, cell.col)]
        }
        "anchor" => {
            let [cell] = expect_args::<1>(command, args)?;
            let anchored = reference::parse_anchored_cell_ref(cell)?;
            vec![format!(
                "{} {} {:?}",
                anchored.cell.row, anchored.cell.col, anchored.anchor
            )]
        }
        "offset" => {
            let [cell, rows, cols] = expect_args::<3>(command, args)?;
            let rows = parse_offset(rows)?;
            let cols = parse_offset(cols)?;
            vec![reference::offset_cell_ref(cell, rows, cols)?]
        }
        "normalize" => {
            let [range] = expect_args::<1>(command, args)?;
            vec![reference::normalize_range_ref(range)?]
        }
        "size" => {
            let [range] = expect_args::<1>(command, args)?;
            let size = reference::get_range_size(range)?;
            vec![format!("{} {} {}", size.rows, size.cols, size.total)]
        }
        "expand" => {
            let [range] = expect_args::<1>(command, args)?;
            reference::expand_range_ref_bounded(range, limits)
                .with_context(|| format!("expanding {}", range))?
        }
        "contains" => {
            let [cell, range] = expect_args::<2>(command, args)?;
            let inside = reference::is_cell_in_range(cell, range)?;
            vec![if inside { "TRUE" } else { "FALSE" }.to_string()]
        }
        "intersect" => {
            let [a, b] = expect_args::<2>(command, args)?;
            match reference::intersect_ranges(a, b)? {
                Some(overlap) => vec![overlap],
                None => vec!["NONE".to_string()],
            }
        }
        other => return Err(CliError::UnknownCommand(other.to_string()).into()),
    };
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(command: &str, args: &[&str]) -> Result<Vec<String>> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        run(command, &args, &ExpandLimits::default())
    }

    #[test]
    fn test_column_both_directions() {
        assert_eq!(call("column", &["27"]).unwrap(), vec!["AB"]);
        assert_eq!(call("column", &["AB"]).unwrap(), vec!["27"]);
    }

    #[test]
    fn test_wrong_arity() {
        let err = call("normalize", &[]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CliError>(),
            Some(&CliError::WrongArity {
                command: "normalize".to_string(),
                expected: 1,
                got: 0,
            })
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = call("sum", &["A1:B2"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CliError>(),
            Some(&CliError::UnknownCommand("sum".to_string()))
        );
    }

    #[test]
    fn test_expand_respects_limit() {
        let args = vec!["A1:C3".to_string()];
        let err = run("expand", &args, &ExpandLimits { max_cells: 4 }).unwrap_err();
        assert!(format!("{:#}", err).contains("limit is 4"));
    }
}
