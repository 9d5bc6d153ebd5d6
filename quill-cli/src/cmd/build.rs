use anyhow::{Result, bail};
use chrono::Utc;
use clap::{Arg, ArgMatches, Command};
use log::warn;
use quill_core::SiteBuilder;

use crate::config::QuillConfig;

pub fn add_build_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("content")
                .short('s')
                .long("content")
                .value_name("DIR")
                .help("Directory containing markdown files [default: ./content]"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Output directory for the generated site [default: .]"),
        )
        .arg(
            Arg::new("theme")
                .short('t')
                .long("theme")
                .value_name("DIR")
                .help("Directory of templates overriding the built-in ones [default: ./theme]"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file [default: ./quill.toml]"),
        )
}

pub fn make_command() -> Command {
    add_build_args(Command::new("quill"))
        .about("Build poetry and story pages, archives and a sitemap from markdown")
        .version(env!("CARGO_PKG_VERSION"))
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let config = QuillConfig::load(args)?;
    let build_config = config.build_config();

    let site = SiteBuilder::new()
        .content_dir(&build_config.content)
        .output_dir(&build_config.output)
        .theme_dir(&build_config.theme)
        .site_config(config.site_config().clone())
        .build()?;

    let report = site.generate(Utc::now())?;

    for failed in &report.failed {
        warn!("Not generated: {}", failed.path.display());
    }

    println!(
        "Built {} pages ({} skipped, {} failed) in {}",
        report.pages(),
        report.skipped.len(),
        report.failed.len(),
        site.output_dir().display()
    );

    if report.has_failures() {
        bail!("{} documents could not be generated", report.failed.len());
    }

    Ok(())
}
