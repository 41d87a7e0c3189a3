//! Implementation of the `shapes list` command.

use owo_colors::OwoColorize;
use serde::Serialize;
use shapes_adapters::builtin_sets::{self, ShapeSet};
use shapes_core::application::ShapeSummary;

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One row of the listing.
#[derive(Debug, Serialize)]
struct SetInfo {
    name: &'static str,
    title: &'static str,
    shapes: usize,
    total_area: f64,
    total_volume: f64,
}

impl SetInfo {
    fn from_set(set: &ShapeSet) -> CliResult<Self> {
        let shapes = set.shapes().map_err(|e| CliError::Core(e.into()))?;
        let summary = ShapeSummary::of(&shapes);
        Ok(Self {
            name: set.name,
            title: set.title,
            shapes: summary.count,
            total_area: summary.total_area,
            total_volume: summary.total_volume,
        })
    }
}

pub fn execute(args: ListArgs, output: &OutputManager) -> CliResult<()> {
    let sets = builtin_sets::all_sets()
        .iter()
        .map(SetInfo::from_set)
        .collect::<CliResult<Vec<_>>>()?;

    match args.format {
        ListFormat::Table => {
            output.header("Built-in Shape Sets:")?;
            for info in &sets {
                let name = format!("{:<14}", info.name);
                let name = if output.supports_color() {
                    name.bold().to_string()
                } else {
                    name
                };
                output.emit(&format!(
                    "  {name} {:>2} shapes  total area {:<20} {}",
                    info.shapes, info.total_area, info.title
                ))?;
            }
            output.print("")?;
            output.info("Run 'shapes total --set NAME' to print one set's total")?;
        }

        ListFormat::List => {
            for info in &sets {
                output.emit(info.name)?;
            }
        }

        ListFormat::Json => {
            let json =
                serde_json::to_string_pretty(&sets).map_err(|e| CliError::Serialization {
                    message: "shape set listing".into(),
                    source: Box::new(e),
                })?;
            output.emit(&json)?;
        }

        ListFormat::Csv => {
            for line in csv_lines(&sets) {
                output.emit(&line)?;
            }
        }
    }

    Ok(())
}

fn csv_lines(sets: &[SetInfo]) -> Vec<String> {
    let mut lines = vec!["name,shapes,total_area,total_volume".to_string()];
    lines.extend(sets.iter().map(|s| {
        format!("{},{},{},{}", s.name, s.shapes, s.total_area, s.total_volume)
    }));
    lines
}
