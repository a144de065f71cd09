//! Output rendering and formatting

use console::Style;
use crdprep_types::{CacheStatus, FetchOutcome, OutputFormat, PrepareCrdsReport, UnpackOutcome};
use serde::Serialize;
use std::io;
use std::path::Path;

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    format: OutputFormat,
}

impl OutputRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn json_output(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn render_report(&self, report: &PrepareCrdsReport) -> io::Result<()> {
        if self.json_output() {
            return Self::render_json(report);
        }

        let ok = Style::new().green().bold();
        let dim = Style::new().dim();

        match &report.fetch {
            FetchOutcome::Skipped => {
                println!("{} archive already cached", dim.apply_to("[skip]"));
            }
            FetchOutcome::Fetched { size, sha256, .. } => {
                println!(
                    "{} downloaded {} ({size} bytes, sha256 {sha256})",
                    ok.apply_to("[ok]"),
                    report.remote_url
                );
            }
        }
        match &report.unpack {
            UnpackOutcome::AlreadyPresent => {
                println!("{} manifests already unpacked", dim.apply_to("[skip]"));
            }
            UnpackOutcome::Extracted { entries } => {
                println!("{} unpacked {entries} entries", ok.apply_to("[ok]"));
            }
        }
        println!("CRDs ready at {}", report.crds_dir.display());
        Ok(())
    }

    pub fn render_path(&self, path: &Path) -> io::Result<()> {
        if self.json_output() {
            return Self::render_json(&serde_json::json!({ "cache_dir": path }));
        }
        println!("{}", path.display());
        Ok(())
    }

    pub fn render_status(&self, status: &CacheStatus) -> io::Result<()> {
        if self.json_output() {
            return Self::render_json(status);
        }

        println!("Cache entry: {}", status.cache_dir.display());
        if !status.exists {
            println!("  not cached");
            return Ok(());
        }
        match status.archive_size {
            Some(size) => println!("  archive:   {size} bytes"),
            None => println!("  archive:   missing or empty"),
        }
        println!(
            "  manifests: {}",
            if status.crds_present {
                "unpacked"
            } else {
                "not unpacked"
            }
        );
        Ok(())
    }

    pub fn render_clean(&self, cache_dir: &Path, removed: bool) -> io::Result<()> {
        if self.json_output() {
            return Self::render_json(
                &serde_json::json!({ "cache_dir": cache_dir, "removed": removed }),
            );
        }
        if removed {
            println!("Removed {}", cache_dir.display());
        } else {
            println!("Nothing cached at {}", cache_dir.display());
        }
        Ok(())
    }

    fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        println!("{json}");
        Ok(())
    }
}
