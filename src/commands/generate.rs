use super::report;
use std::{io::IsTerminal as _, path::Path};
use storeart_core::{
    config::Config,
    generate::{Execution, IconSizeGenerator, ScreenshotComposer},
    output::{Artifact, OutputDir},
    source::SourceImage,
};
use termcolor::{ColorChoice, StandardStream, WriteColor};

fn stdout() -> StandardStream {
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

fn open_source(out: &mut dyn WriteColor, path: &Path) -> eyre::Result<SourceImage> {
    let source = SourceImage::open(path)?;
    report::source(out, &source)?;
    Ok(source)
}

fn write_icons(
    out: &mut dyn WriteColor,
    config: &Config,
    source: &SourceImage,
    output: &OutputDir,
) -> eyre::Result<Vec<Artifact>> {
    let generator = IconSizeGenerator::new(config.icon_targets())
        .with_execution(Execution::from_parallel_flag(config.parallel));
    report::heading(out, "Generating icon sizes")?;
    let artifacts = generator.generate_with(source, output, |artifact| {
        report::artifact(out, artifact).map_err(eyre::Report::from)
    })?;
    report::icon_summary(out, &artifacts)?;
    Ok(artifacts)
}

fn write_screenshots(
    out: &mut dyn WriteColor,
    config: &Config,
    source: &SourceImage,
    output: &OutputDir,
) -> eyre::Result<Vec<Artifact>> {
    let composer =
        ScreenshotComposer::new(config.screenshot_targets(), config.screenshots.background)
            .with_execution(Execution::from_parallel_flag(config.parallel));
    report::heading(out, "Creating screenshots")?;
    let artifacts = composer.generate_with(source, output, |artifact| {
        report::artifact(out, artifact).map_err(eyre::Report::from)
    })?;
    report::screenshot_summary(out, config, composer.targets(), &artifacts)?;
    Ok(artifacts)
}

pub fn icons(config: &Config) -> eyre::Result<()> {
    let mut out = stdout();
    let source = open_source(&mut out, config.icon_source())?;
    let output = OutputDir::create(&config.output_dir)?;
    let artifacts = write_icons(&mut out, config, &source, &output)?;
    report::finished(&mut out, &output, &artifacts)?;
    Ok(())
}

pub fn screenshots(config: &Config) -> eyre::Result<()> {
    let mut out = stdout();
    let source = open_source(&mut out, config.screenshot_source())?;
    let output = OutputDir::create(&config.output_dir)?;
    let artifacts = write_screenshots(&mut out, config, &source, &output)?;
    report::finished(&mut out, &output, &artifacts)?;
    Ok(())
}

/// Generates icons and screenshots; every source is decoded before the first file is written.
pub fn all(config: &Config) -> eyre::Result<()> {
    let mut out = stdout();
    let icon_source = open_source(&mut out, config.icon_source())?;
    let separate_source = if config.screenshot_source() != config.icon_source() {
        Some(open_source(&mut out, config.screenshot_source())?)
    } else {
        None
    };
    let screenshot_source = separate_source.as_ref().unwrap_or(&icon_source);

    let output = OutputDir::create(&config.output_dir)?;
    let mut artifacts = write_icons(&mut out, config, &icon_source, &output)?;
    artifacts.extend(write_screenshots(
        &mut out,
        config,
        screenshot_source,
        &output,
    )?);
    report::finished(&mut out, &output, &artifacts)?;
    Ok(())
}
