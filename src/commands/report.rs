//! Human-readable progress and summaries on stdout.

use std::io;
use storeart_core::{
    config::Config,
    output::{Artifact, OutputDir},
    source::SourceImage,
    target::ScreenshotTarget,
};
use termcolor::{Color, ColorSpec, WriteColor};

fn write_color(out: &mut dyn WriteColor, text: &str, spec: &ColorSpec) -> io::Result<()> {
    out.set_color(spec)?;
    let result = out.write_all(text.as_bytes());
    out.reset().ok();
    result
}

fn fg(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));
    spec
}

pub fn heading(out: &mut dyn WriteColor, text: &str) -> io::Result<()> {
    writeln!(out)?;
    let mut spec = ColorSpec::new();
    spec.set_bold(true);
    write_color(out, text, &spec)?;
    writeln!(out)
}

pub fn source(out: &mut dyn WriteColor, source: &SourceImage) -> io::Result<()> {
    writeln!(
        out,
        "Loaded source {} ({}x{})",
        source.path().display(),
        source.width(),
        source.height()
    )
}

pub fn artifact(out: &mut dyn WriteColor, artifact: &Artifact) -> io::Result<()> {
    write!(out, "  ")?;
    write_color(out, "[OK]", &fg(Color::Green))?;
    writeln!(
        out,
        " {} ({}x{})",
        artifact.file_name, artifact.width, artifact.height
    )
}

/// Lists the icon files alphabetically.
pub fn icon_summary(out: &mut dyn WriteColor, artifacts: &[Artifact]) -> io::Result<()> {
    let mut names: Vec<_> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
    names.sort_unstable();
    writeln!(out, "Files created:")?;
    for name in names {
        writeln!(out, "  - {}", name)?;
    }
    Ok(())
}

/// Lists the screenshot files per device class, in declared device order.
pub fn screenshot_summary(
    out: &mut dyn WriteColor,
    config: &Config,
    targets: &[ScreenshotTarget],
    artifacts: &[Artifact],
) -> io::Result<()> {
    writeln!(out, "Files created:")?;
    for (device, group) in group_by_device(targets, artifacts) {
        let label = config.device(device).map(|d| d.label()).unwrap_or(device);
        let noun = if group.len() == 1 {
            "screenshot"
        } else {
            "screenshots"
        };
        writeln!(out, "  {} ({} {}):", label, group.len(), noun)?;
        for artifact in group {
            writeln!(out, "    - {}", artifact.file_name)?;
        }
    }
    Ok(())
}

pub fn finished(
    out: &mut dyn WriteColor,
    output: &OutputDir,
    artifacts: &[Artifact],
) -> io::Result<()> {
    let total: u64 = artifacts.iter().map(|a| a.bytes).sum();
    writeln!(out)?;
    write_color(out, "Done:", &fg(Color::Green))?;
    writeln!(
        out,
        " {} files ({}) in {}",
        artifacts.len(),
        humansize::format_size(total, humansize::DECIMAL),
        output.path().display()
    )
}

/// Pairs artifacts with the targets they were generated from and groups them by device,
/// keeping the order in which devices first appear.
fn group_by_device<'a>(
    targets: &'a [ScreenshotTarget],
    artifacts: &'a [Artifact],
) -> Vec<(&'a str, Vec<&'a Artifact>)> {
    let mut groups: Vec<(&str, Vec<&Artifact>)> = Vec::new();
    for (target, artifact) in targets.iter().zip(artifacts) {
        match groups.iter_mut().find(|group| group.0 == target.device) {
            Some((_, group)) => group.push(artifact),
            None => groups.push((target.device.as_str(), vec![artifact])),
        }
    }
    groups
}
