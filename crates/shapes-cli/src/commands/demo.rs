//! `shapes demo`: replay the printed output of the SOLID demo programs.
//!
//! Each demo is computed into a [`Demo`] first and only then written, so the
//! lines can be checked without a terminal.

use shapes_adapters::{builtin_sets, messenger_for};
use shapes_core::{
    application::ReportService,
    domain::{Area, Cube, MessageFormat, Rectangle, Square, Volume},
};
use tracing::{debug, instrument};

use crate::{
    cli::{DemoArgs, Principle},
    error::{CliError, CliResult},
    output::OutputManager,
};

const DIP_TITLE: &str = "Dependency inversion principle (DIP)";

/// SRP and OCP print the plain total first and last, with JSON and HTML
/// in between.
const SRP_FORMATS: [MessageFormat; 4] = [
    MessageFormat::Text,
    MessageFormat::Json,
    MessageFormat::Html,
    MessageFormat::Text,
];

/// The value every resized rectangle in the LSP demo must end up with.
const LSP_EXPECTED_AREA: f64 = 20_000.0;

/// A computed demo: a title, its result lines and an optional closing note.
#[derive(Debug, PartialEq)]
struct Demo {
    title: String,
    lines: Vec<String>,
    note: Option<String>,
}

#[instrument(skip_all, fields(principle = ?args.principle))]
pub fn execute(args: DemoArgs, output: &OutputManager) -> CliResult<()> {
    let demo = build(args.principle)?;
    debug!(lines = demo.lines.len(), "Demo computed");

    output.header(&demo.title)?;
    for line in &demo.lines {
        output.emit(line)?;
    }
    if let Some(note) = &demo.note {
        output.success(note)?;
    }
    Ok(())
}

fn build(principle: Principle) -> CliResult<Demo> {
    match principle {
        Principle::FirstDesign => set_demo("first-design", &[MessageFormat::Text]),
        Principle::Srp => set_demo("srp", &SRP_FORMATS),
        Principle::Ocp => set_demo("ocp", &SRP_FORMATS),
        Principle::Lsp => lsp_demo(),
        Principle::Isp => isp_demo(),
        Principle::Dip => dip_demo(),
    }
}

/// Total a built-in set and render it once per format.
fn set_demo(name: &str, formats: &[MessageFormat]) -> CliResult<Demo> {
    let set = builtin_sets::find(name).ok_or_else(|| {
        CliError::DemoCheckFailed(format!("built-in set '{name}' is missing"))
    })?;
    let shapes = set.shapes()?;
    let lines = formats
        .iter()
        .map(|&format| -> CliResult<String> {
            Ok(ReportService::new(messenger_for(format)).report(&shapes)?)
        })
        .collect::<CliResult<Vec<_>>>()?;

    Ok(Demo {
        title: set.title.to_string(),
        lines,
        note: None,
    })
}

/// Square and rectangle are unrelated types, so resizing one never
/// changes the other's second dimension.
fn lsp_demo() -> CliResult<Demo> {
    let Demo { title, mut lines, .. } = set_demo("lsp", &[MessageFormat::Text])?;
    let rectangle = Rectangle::new(100.0, 200.0)?;
    lines.push(format!("Rectangle Area: {}", rectangle.area()));
    let square = Square::new(100.0)?;
    lines.push(format!("Square Area: {}", square.area()));

    let resized = [
        Rectangle::new(200.0, 100.0).and_then(|r| r.with_width(100.0)),
        Rectangle::new(200.0, 200.0).and_then(|r| r.with_width(100.0)),
    ];
    for rectangle in resized {
        let area = rectangle?.area();
        lines.push(format!("New Rectangle Area: {area}"));
        if area != LSP_EXPECTED_AREA {
            return Err(CliError::DemoCheckFailed(format!(
                "resized rectangle has area {area}, expected {LSP_EXPECTED_AREA}"
            )));
        }
    }

    Ok(Demo {
        title,
        lines,
        note: Some("Resized rectangles keep their height".into()),
    })
}

/// Only the cube has a volume to print.
fn isp_demo() -> CliResult<Demo> {
    let set = builtin_sets::find("isp")
        .ok_or_else(|| CliError::DemoCheckFailed("built-in set 'isp' is missing".into()))?;
    let cube = Cube::new(100.0)?;
    let square = Square::new(100.0)?;

    Ok(Demo {
        title: set.title.to_string(),
        lines: vec![
            format!("Cube Area:   {}", cube.area()),
            format!("Cube Volume: {}", cube.volume()),
            format!("Square Area:   {}", square.area()),
        ],
        note: None,
    })
}

/// The messenger is chosen at run time; the caller only sees the port.
fn dip_demo() -> CliResult<Demo> {
    Ok(Demo {
        title: DIP_TITLE.to_string(),
        lines: [MessageFormat::Html, MessageFormat::Text]
            .into_iter()
            .map(|format| ReportService::new(messenger_for(format)).render(100.0))
            .collect::<Result<Vec<_>, _>>()?,
        note: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_design_prints_text_total() {
        let demo = build(Principle::FirstDesign).unwrap();
        assert_eq!(demo.title, "SOLID OOP Development (First Design)");
        assert_eq!(demo.lines, vec!["Total Area: 62184.10865289668"]);
    }

    #[test]
    fn ocp_prints_text_json_html_text() {
        let demo = build(Principle::Ocp).unwrap();
        assert_eq!(
            demo.lines,
            vec![
                "Total Area: 62184.10865289668",
                "{ \"Total Area\" : 62184.10865289668 }",
                "<span><strong>Total Area: </strong></span><span>62184.10865289668</span>",
                "Total Area: 62184.10865289668",
            ]
        );
    }

    #[test]
    fn srp_matches_ocp_output() {
        let srp = build(Principle::Srp).unwrap();
        let ocp = build(Principle::Ocp).unwrap();
        assert_eq!(srp.lines, ocp.lines);
        assert_eq!(srp.lines.first(), srp.lines.last());
    }

    #[test]
    fn lsp_resizes_independently() {
        let demo = build(Principle::Lsp).unwrap();
        assert_eq!(demo.lines[1], "Rectangle Area: 20000");
        assert_eq!(demo.lines[2], "Square Area: 10000");
        assert_eq!(
            demo.lines[3..],
            ["New Rectangle Area: 20000", "New Rectangle Area: 20000"]
        );
        assert!(demo.note.is_some());
    }

    #[test]
    fn isp_only_cube_has_volume() {
        let demo = build(Principle::Isp).unwrap();
        assert_eq!(
            demo.lines,
            vec![
                "Cube Area:   60000",
                "Cube Volume: 1000000",
                "Square Area:   10000",
            ]
        );
    }

    #[test]
    fn dip_renders_html_then_text() {
        let demo = build(Principle::Dip).unwrap();
        assert_eq!(demo.title, DIP_TITLE);
        assert_eq!(
            demo.lines,
            vec![
                "<span><strong>Total Area: </strong></span><span>100</span>",
                "Total Area: 100",
            ]
        );
    }
}
