//! Command-line interface and the load, infill, save-twice pipeline

use crate::geometry::RegionLayout;
use crate::infill::InfillReport;
use crate::infill::apply::infill_regions_with_progress;
use crate::io::configuration::{DEFAULT_COPY_TO, DEFAULT_INPUT};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_rgb, save_png_optimized};
use crate::io::progress::StageProgress;
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "regionfill")]
#[command(
    author,
    version,
    about = "Paint over the two table regions with stretched floor texture"
)]
/// Command-line arguments for the infill tool
pub struct Cli {
    /// Image to edit in place
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Second location the edited image is written to
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_COPY_TO)]
    pub copy_to: PathBuf,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the resolved regions before writing
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if the progress bar should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Input path with a leading `~/` expanded
    ///
    /// # Errors
    ///
    /// Returns an error if the path starts with `~/` and `HOME` is unset
    pub fn input_path(&self) -> Result<PathBuf> {
        expand_home(&self.input, std::env::var_os("HOME"))
    }

    /// Copy path with a leading `~/` expanded
    ///
    /// # Errors
    ///
    /// Returns an error if the path starts with `~/` and `HOME` is unset
    pub fn copy_path(&self) -> Result<PathBuf> {
        expand_home(&self.copy_to, std::env::var_os("HOME"))
    }
}

/// Replace a leading `~` component with `home`
///
/// Paths that do not start with `~` are returned unchanged.
///
/// # Errors
///
/// Returns an error if expansion is needed and `home` is `None`
pub fn expand_home(path: &Path, home: Option<OsString>) -> Result<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };

    let home = home.ok_or_else(|| {
        invalid_parameter(
            "path",
            &path.display(),
            &"cannot expand '~' because HOME is not set",
        )
    })?;

    Ok(PathBuf::from(home).join(rest))
}

/// Runs the infill once over the input and writes both outputs
pub struct InfillProcessor {
    cli: Cli,
    layout: RegionLayout,
    progress: StageProgress,
}

impl InfillProcessor {
    /// Create a processor using the table-removal layout
    pub fn new(cli: Cli) -> Self {
        Self::with_layout(cli, RegionLayout::TABLE_REMOVAL)
    }

    /// Create a processor with an explicit layout
    pub fn with_layout(cli: Cli, layout: RegionLayout) -> Self {
        let progress = StageProgress::for_quiet(!cli.should_show_progress());

        Self {
            cli,
            layout,
            progress,
        }
    }

    /// Load, infill, overwrite the input, then write the copy
    ///
    /// Nothing is written unless decoding and infill both succeed.
    /// A `Saved <path>` line follows each write.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either path cannot be expanded
    /// - The input cannot be read or decoded
    /// - The sample region is unusable for this image
    /// - Either output cannot be written
    pub fn process(&self) -> Result<InfillReport> {
        let input = self.cli.input_path()?;
        let copy = self.cli.copy_path()?;

        let result = self.run(&input, &copy);
        self.progress.finish();
        result
    }

    fn run(&self, input: &Path, copy: &Path) -> Result<InfillReport> {
        self.progress.stage("Decoding input");
        let mut img = load_rgb(input)?;

        let report = infill_regions_with_progress(&mut img, &self.layout, &self.progress)?;

        if self.cli.verbose {
            self.describe(&report);
        }

        for output in [input, copy] {
            self.progress.stage("Encoding PNG");
            save_png_optimized(&img, output)?;
            self.announce_saved(output);
        }

        Ok(report)
    }

    // Allow print for the confirmation line after each write
    #[allow(clippy::print_stdout)]
    fn announce_saved(&self, path: &Path) {
        self.progress.suspend(|| println!("Saved {}", path.display()));
    }

    // Allow print for the user-requested region summary
    #[allow(clippy::print_stderr)]
    fn describe(&self, report: &InfillReport) {
        self.progress.suspend(|| {
            eprintln!("Image size: {}x{}", report.width, report.height);
            eprintln!("Left box: {}", report.layout.left);
            eprintln!("Right box: {}", report.layout.right);
            eprintln!("Center strip: {}", report.layout.sample);
        });
    }
}
