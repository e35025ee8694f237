use std::io::Write;
use storeart_core::{config::Config, target::Target};

pub mod generate;
pub mod report;

pub fn config(config: &Config) -> eyre::Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

pub fn version() -> eyre::Result<()> {
    println!("storeart: {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

pub fn plan(config: &Config) -> eyre::Result<()> {
    let stdout = std::io::stdout();
    write_plan(&mut stdout.lock(), config)?;
    Ok(())
}

fn write_plan(out: &mut impl Write, config: &Config) -> std::io::Result<()> {
    writeln!(out, "Output directory: {}", config.output_dir.display())?;

    writeln!(out)?;
    writeln!(out, "Icons from {}:", config.icon_source().display())?;
    for target in config.icon_targets() {
        let (width, height) = target.dimensions();
        writeln!(out, "  {:<40} {}x{}", target.file_name(), width, height)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Screenshots from {} on {}:",
        config.screenshot_source().display(),
        config.screenshots.background
    )?;
    for device in &config.screenshots.devices {
        writeln!(out, "  {}:", device.label())?;
        for target in device.targets(&config.product) {
            let (width, height) = target.dimensions();
            let (x, y) = target.icon_offset();
            writeln!(
                out,
                "    {:<40} {}x{}, icon {}x{} at ({}, {})",
                target.file_name(),
                width,
                height,
                target.icon_size,
                target.icon_size,
                x,
                y
            )?;
        }
    }
    Ok(())
}
