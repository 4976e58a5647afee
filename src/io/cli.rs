//! Command-line interface for splitting images into nonogram tiles

use crate::algorithm::processor::{ProcessorConfig, TileProcessor};
use crate::io::configuration::{
    DEFAULT_EXAMPLE_HEIGHT, DEFAULT_EXAMPLE_PATH, DEFAULT_EXAMPLE_WIDTH, DEFAULT_MODE,
    DEFAULT_SEED, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
};
use crate::io::error::{NonogramError, Result};
use crate::io::generate::generate_solution_image;
use crate::io::image::ImageFormats;
use crate::io::progress::ProgressManager;
use crate::io::render::{ImageTiles, OutputFormat, render, render_batch_json};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nonotiles")]
#[command(
    author,
    version,
    about = "Split images into tiled nonogram puzzles with row and column clues"
)]
/// Command-line arguments for the nonogram tiling tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Split an image, or every image in a directory, into clued tiles
    Split(SplitArgs),
    /// Write a random nonogram solution image to use as input
    Generate(GenerateArgs),
}

/// Arguments for `split`
#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Width of each tile in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: usize,

    /// Height of each tile in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: usize,

    /// Grid interpretation: binary or color
    #[arg(short, long, default_value = DEFAULT_MODE)]
    pub mode: String,

    /// Accepted input image formats
    #[arg(long, value_enum, default_value_t = ImageFormats::Png)]
    pub formats: ImageFormats,

    /// Output format for the tile listing
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl SplitArgs {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments for `generate`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Where to write the generated PNG
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_EXAMPLE_PATH)]
    pub output: PathBuf,

    /// Image width in pixels (one pixel per cell)
    #[arg(long, default_value_t = DEFAULT_EXAMPLE_WIDTH)]
    pub width: u32,

    /// Image height in pixels (one pixel per cell)
    #[arg(long, default_value_t = DEFAULT_EXAMPLE_HEIGHT)]
    pub height: u32,

    /// Use random colors for filled cells instead of black
    #[arg(short, long)]
    pub color: bool,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Orchestrates tile processing over one image or a directory of images
pub struct FileProcessor {
    args: SplitArgs,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given arguments
    pub fn new(args: SplitArgs) -> Self {
        let progress_manager = args.should_show_progress().then(ProgressManager::new);

        Self {
            args,
            progress_manager,
        }
    }

    /// Process the target and write results to stdout
    ///
    /// # Errors
    ///
    /// Returns the first error raised while collecting, processing or rendering files
    pub fn process(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_to(&mut out)
    }

    /// Process the target and write results to `out`
    ///
    /// With more than one image, text output prefixes each image's tiles with
    /// an `Image: <path>` line and JSON output groups tiles by source path.
    /// The progress bar is cleared whether or not the batch succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while collecting, processing or rendering files
    pub fn process_to<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            tracing::warn!(path = %self.args.target.display(), "no images to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let batch_json = self.args.format == OutputFormat::Json && files.len() > 1;
        let result = self.process_files(&files, batch_json, out);

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let batch = result?;
        if batch_json {
            render_batch_json(&batch, out)?;
        }

        Ok(())
    }

    /// Progress display for the current run, absent when `--quiet` is set
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    /// Pipeline configuration for one input file
    pub fn config_for(&self, path: PathBuf) -> ProcessorConfig {
        ProcessorConfig::new(path)
            .with_tile_size(self.args.tile_width, self.args.tile_height)
            .with_mode(self.args.mode.clone())
            .with_formats(self.args.formats)
    }

    // Tiles are held back only when they go into a batch JSON document
    fn process_files<W: Write>(
        &self,
        files: &[PathBuf],
        batch_json: bool,
        out: &mut W,
    ) -> Result<Vec<ImageTiles>> {
        let labelled = self.args.format == OutputFormat::Text && files.len() > 1;
        let format = self.args.format;
        let mut batch = Vec::new();

        for file in files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            let tiles = TileProcessor::new(self.config_for(file.clone())).process()?;

            if batch_json {
                batch.push(ImageTiles {
                    path: file.clone(),
                    tiles,
                });
            } else {
                self.emit(|| {
                    if labelled {
                        writeln!(out, "Image: {}", file.display())?;
                    }
                    render(&tiles, format, &mut *out)
                })?;
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        Ok(batch)
    }

    fn emit<F: FnOnce() -> Result<()>>(&self, f: F) -> Result<()> {
        match self.progress_manager {
            Some(ref pm) => pm.suspend(f),
            None => f(),
        }
    }

    // Anything that is not a directory is handed to the pipeline, which
    // reports missing paths and unsupported extensions itself
    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.args.target;
        if !target.is_dir() {
            return Ok(vec![target.clone()]);
        }

        let read_error = |e| NonogramError::FileSystem {
            path: target.clone(),
            operation: "read directory",
            source: e,
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(target).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() && self.args.formats.accepts(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Write an example image and report where it went
///
/// # Errors
///
/// Returns an error if the image cannot be generated or the message cannot be written
pub fn generate_example<W: Write>(args: &GenerateArgs, out: &mut W) -> Result<PathBuf> {
    let path = generate_solution_image(
        &args.output,
        args.width,
        args.height,
        args.color,
        args.seed,
    )?;
    writeln!(out, "Nonogram solution image saved to: {}", path.display())?;
    Ok(path)
}

/// Execute the parsed command line
///
/// # Errors
///
/// Returns the error raised by the selected subcommand
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Split(args) => FileProcessor::new(args).process(),
        Command::Generate(args) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            generate_example(&args, &mut out).map(|_| ())
        }
    }
}
