//! `shapes area`: validate a single shape from flags and print its area.

use shapes_core::domain::{Area, Shape, ShapeKind, ShapeRecord};
use tracing::{debug, instrument};

use crate::{
    cli::AreaArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(kind = %args.kind))]
pub fn execute(args: AreaArgs, output: &OutputManager) -> CliResult<()> {
    let record = to_record(args);
    reject_unused_flags(&record)?;
    let shape = record.to_shape()?;
    debug!(%shape, "Validated shape");

    output.header(&shape.to_string())?;
    for line in report_lines(&shape) {
        output.emit(&line)?;
    }

    Ok(())
}

fn to_record(args: AreaArgs) -> ShapeRecord {
    ShapeRecord {
        kind: args.kind,
        side: args.side,
        radius: args.radius,
        diameter: args.diameter,
        height: args.height,
        width: args.width,
    }
}

/// A dimension flag the kind does not use is almost always a typo.
///
/// Unknown kinds pass through so `to_shape` reports them.
fn reject_unused_flags(record: &ShapeRecord) -> CliResult<()> {
    let Ok(kind) = record.kind.parse::<ShapeKind>() else {
        return Ok(());
    };

    let supplied = [
        ("side", record.side),
        ("radius", record.radius),
        ("diameter", record.diameter),
        ("height", record.height),
        ("width", record.width),
    ];
    let accepts = |flag: &str| {
        kind.dimensions().contains(&flag) || (kind == ShapeKind::Circle && flag == "diameter")
    };

    match supplied
        .iter()
        .find(|(flag, value)| value.is_some() && !accepts(flag))
    {
        Some((flag, _)) => Err(CliError::InvalidInput {
            message: format!(
                "--{flag} does not apply to a {kind} (it takes: {})",
                kind.dimensions().join(", ")
            ),
            source: None,
        }),
        None => Ok(()),
    }
}

/// `Area: N`, plus `Volume: N` for solids.
fn report_lines(shape: &Shape) -> Vec<String> {
    let mut lines = vec![format!("Area: {}", shape.area())];
    if let Some(volume) = shape.volume() {
        lines.push(format!("Volume: {volume}"));
    }
    lines
}
