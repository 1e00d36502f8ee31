//! Build command - generates the static site

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use alnoor_generator::Builder;
use color_eyre::eyre::{Result, WrapErr};

use super::Site;

/// Run the build command.
///
/// Writes the site to `output`, or to the configured output directory when
/// no override is given. Returns the directory written.
pub fn run(config_path: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, "Starting build");

    let site = Site::load(config_path)?;
    let output = output.map_or_else(|| site.output_dir(), Path::to_path_buf);
    let partials_dir = site.partials_dir();

    let mut builder = Builder::new(site.config, site.store, &output);
    if partials_dir.is_dir() {
        builder = builder.with_partials_dir(&partials_dir);
    } else {
        tracing::warn!(dir = %partials_dir.display(), "Partials directory missing, includes left unresolved");
    }

    let stats = builder.build().wrap_err("Build failed")?;
    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Pages:      {}", stats.pages);
    println!("  Articles:   {}", stats.articles);
    if stats.partial_failures > 0 {
        println!("  ⚠ Includes: {} failed to load", stats.partial_failures);
    }
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(output)
}
