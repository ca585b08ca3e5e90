//! Command-line argument parsing for `budget_chart_cli`.

use std::path::PathBuf;

use chart_domain::ChartVariant;

use crate::errors::AppError;

pub const USAGE: &str = "\
budget_chart_cli donut <breakdown.json> [--recommended] [--width <px>] [--json]
budget_chart_cli pie <breakdown.json> [--recommended] [--json]
budget_chart_cli projection <projection.json> [--start-year <yyyy>] [--json]
budget_chart_cli config [show|path|reset]
budget_chart_cli version";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Donut {
        path: PathBuf,
        variant: ChartVariant,
        width: Option<f64>,
        json: bool,
    },
    Pie {
        path: PathBuf,
        variant: ChartVariant,
        json: bool,
    },
    Projection {
        path: PathBuf,
        start_year: Option<i32>,
        json: bool,
    },
    Config(ConfigAction),
    Version,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    Show,
    Path,
    Reset,
}

/// Parses everything after the program name.
pub fn parse<I>(args: I) -> Result<Command, AppError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(name) = args.next() else {
        return Ok(Command::Help);
    };
    let rest: Vec<String> = args.collect();

    match name.as_str() {
        "donut" => parse_donut(rest),
        "pie" => parse_pie(rest),
        "projection" => parse_projection(rest),
        "config" => parse_config(rest),
        "version" | "--version" | "-V" => Ok(Command::Version),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(AppError::Usage(format!("unknown command `{other}`"))),
    }
}

fn parse_donut(args: Vec<String>) -> Result<Command, AppError> {
    let mut path = None;
    let mut variant = ChartVariant::Actual;
    let mut width = None;
    let mut json = false;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--recommended" => variant = ChartVariant::Recommended,
            "--json" => json = true,
            "--width" => {
                let raw = flag_value(&mut iter, "--width")?;
                let parsed: f64 = raw
                    .parse()
                    .map_err(|_| AppError::Usage(format!("invalid width `{raw}`")))?;
                if !parsed.is_finite() || parsed < 0.0 {
                    return Err(AppError::Usage(format!("invalid width `{raw}`")));
                }
                width = Some(parsed);
            }
            _ => set_path(&mut path, arg)?,
        }
    }

    Ok(Command::Donut {
        path: path.ok_or_else(|| AppError::Usage("donut requires a breakdown file".into()))?,
        variant,
        width,
        json,
    })
}

fn parse_pie(args: Vec<String>) -> Result<Command, AppError> {
    let mut path = None;
    let mut variant = ChartVariant::Actual;
    let mut json = false;

    for arg in args {
        match arg.as_str() {
            "--recommended" => variant = ChartVariant::Recommended,
            "--json" => json = true,
            _ => set_path(&mut path, arg)?,
        }
    }

    Ok(Command::Pie {
        path: path.ok_or_else(|| AppError::Usage("pie requires a breakdown file".into()))?,
        variant,
        json,
    })
}

fn parse_projection(args: Vec<String>) -> Result<Command, AppError> {
    let mut path = None;
    let mut start_year = None;
    let mut json = false;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--start-year" => {
                let raw = flag_value(&mut iter, "--start-year")?;
                let parsed = raw
                    .parse()
                    .map_err(|_| AppError::Usage(format!("invalid year `{raw}`")))?;
                start_year = Some(parsed);
            }
            _ => set_path(&mut path, arg)?,
        }
    }

    Ok(Command::Projection {
        path: path
            .ok_or_else(|| AppError::Usage("projection requires a projection file".into()))?,
        start_year,
        json,
    })
}

fn parse_config(args: Vec<String>) -> Result<Command, AppError> {
    let action = match args.first().map(String::as_str) {
        None | Some("show") => ConfigAction::Show,
        Some("path") => ConfigAction::Path,
        Some("reset") => ConfigAction::Reset,
        Some(other) => {
            return Err(AppError::Usage(format!("unknown config action `{other}`")));
        }
    };
    if args.len() > 1 {
        return Err(AppError::Usage("config takes a single action".into()));
    }
    Ok(Command::Config(action))
}

fn flag_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, AppError> {
    iter.next()
        .ok_or_else(|| AppError::Usage(format!("{flag} expects a value")))
}

fn set_path(slot: &mut Option<PathBuf>, arg: String) -> Result<(), AppError> {
    if arg.starts_with("--") {
        return Err(AppError::Usage(format!("unknown flag `{arg}`")));
    }
    if slot.is_some() {
        return Err(AppError::Usage(format!("unexpected argument `{arg}`")));
    }
    *slot = Some(PathBuf::from(arg));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_args_show_help() {
        assert_eq!(parse(args(&[])).unwrap(), Command::Help);
    }

    #[test]
    fn donut_flags_are_parsed() {
        let command = parse(args(&["donut", "b.json", "--recommended", "--width", "350"])).unwrap();
        assert_eq!(
            command,
            Command::Donut {
                path: PathBuf::from("b.json"),
                variant: ChartVariant::Recommended,
                width: Some(350.0),
                json: false,
            }
        );
    }

    #[test]
    fn pie_flags_are_parsed() {
        let command = parse(args(&["pie", "--recommended", "b.json", "--json"])).unwrap();
        assert_eq!(
            command,
            Command::Pie {
                path: PathBuf::from("b.json"),
                variant: ChartVariant::Recommended,
                json: true,
            }
        );
    }

    #[test]
    fn projection_start_year_is_parsed() {
        let command = parse(args(&["projection", "--json", "p.json", "--start-year", "2017"]))
            .unwrap();
        assert_eq!(
            command,
            Command::Projection {
                path: PathBuf::from("p.json"),
                start_year: Some(2017),
                json: true,
            }
        );
    }

    #[test]
    fn bad_input_is_a_usage_error() {
        let cases: [&[&str]; 9] = [
            &["donut"],
            &["pie"],
            &["pie", "a.json", "--width", "350"],
            &["donut", "a.json", "b.json"],
            &["donut", "a.json", "--width"],
            &["donut", "a.json", "--width", "wide"],
            &["donut", "a.json", "--bogus"],
            &["config", "wipe"],
            &["frobnicate"],
        ];
        for raw in cases {
            assert!(
                matches!(parse(args(raw)), Err(AppError::Usage(_))),
                "expected usage error for {raw:?}"
            );
        }
    }

    #[test]
    fn config_defaults_to_show() {
        assert_eq!(
            parse(args(&["config"])).unwrap(),
            Command::Config(ConfigAction::Show)
        );
    }
}
