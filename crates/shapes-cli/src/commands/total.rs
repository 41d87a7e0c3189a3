//! `shapes total`: load a shape collection and print its total area.

use shapes_adapters::{BuiltinSource, FileShapeSource, messenger_for};
use shapes_core::application::{AreaCalculator, ReportService, ShapeSource};
use tracing::{debug, instrument};

use crate::{
    cli::{FormatChoice, TotalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: TotalArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let source = select_source(&args, config);
    let choice = match args.format {
        Some(choice) => choice,
        None => FormatChoice::from_config(&config.defaults.format)?,
    };

    let calculator = AreaCalculator::new(source);
    debug!(source = %calculator.describe(), ?choice, "Computing total");

    let summary = calculator.summarize()?;
    if summary.count == 0 {
        output.warning(&format!("{} contains no shapes", calculator.describe()))?;
    }

    for format in choice.formats() {
        let line = ReportService::new(messenger_for(format)).render(summary.total_area)?;
        output.emit(&line)?;
    }

    Ok(())
}

/// `--file` wins over `--set`, which wins over `defaults.set`.
fn select_source(args: &TotalArgs, config: &AppConfig) -> Box<dyn ShapeSource> {
    match (&args.file, &args.set) {
        (Some(path), _) => Box::new(FileShapeSource::new(path.clone())),
        (None, Some(set)) => Box::new(BuiltinSource::new(set.clone())),
        (None, None) => Box::new(BuiltinSource::new(config.defaults.set.clone())),
    }
}
