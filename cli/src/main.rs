//! textpdf CLI - plain text to PDF conversion tool

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use textpdf::convert::{convert_batch, BatchMode, ConversionOutcome, ConvertOptions};
use textpdf::layout::wrap_with_font;
use textpdf::text::{collapse_whitespace, needs_extended_font, normalize, split_paragraphs};
use textpdf::{FontOptions, FontSet, PageGeometry, PdfWriter, StandardFont, TextDocument};

#[derive(Parser)]
#[command(name = "textpdf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert plain text files to PDF", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Input text files
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    #[command(flatten)]
    args: ConvertArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert text files to PDF
    Convert {
        /// Input text files
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Show the text as it will be rendered, with the font chosen per line
    Preview {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// List supported fonts
    Fonts,

    /// Show version information
    Version,
}

#[derive(Args, Clone)]
struct ConvertArgs {
    /// Output file or directory
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Combine all files into a single PDF
    #[arg(long)]
    combined: bool,

    /// Start each per-file PDF with the file name
    #[arg(long)]
    headers: bool,

    /// Body font size in points
    #[arg(long, default_value_t = 12.0, env = "TEXTPDF_FONT_SIZE")]
    font_size: f32,

    /// Line height as a multiple of the font size
    #[arg(long, default_value_t = 1.2)]
    line_spacing: f32,

    /// Page margin in points
    #[arg(long, default_value_t = PageGeometry::DEFAULT_MARGIN)]
    margin: f32,

    /// Page size
    #[arg(long, value_enum, default_value = "letter", env = "TEXTPDF_PAGE_SIZE")]
    page_size: PageSize,

    /// Font for lines made of common characters
    #[arg(long, value_name = "NAME", default_value = "Times-Roman")]
    body_font: String,

    /// Store page content uncompressed
    #[arg(long)]
    no_compress: bool,

    /// Deflate level for page content and archives (0-9)
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(0..=9))]
    compression_level: u8,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageSize {
    /// US Letter (612 x 792 pt)
    Letter,
    /// ISO A4 (595 x 842 pt)
    A4,
}

impl From<PageSize> for PageGeometry {
    fn from(size: PageSize) -> Self {
        match size {
            PageSize::Letter => PageGeometry::letter(),
            PageSize::A4 => PageGeometry::a4(),
        }
    }
}

impl ConvertArgs {
    fn mode(&self) -> BatchMode {
        if self.combined {
            BatchMode::Combined
        } else {
            BatchMode::PerFileZipped
        }
    }

    fn to_options(&self) -> ConvertOptions {
        let geometry = PageGeometry::from(self.page_size).with_margin(self.margin);
        let mut options = ConvertOptions::new()
            .with_geometry(geometry)
            .with_font_size(self.font_size)
            .with_line_spacing(self.line_spacing)
            .with_body_font(self.body_font.as_str())
            .with_headers(self.headers)
            .with_compression(!self.no_compress)
            .with_compression_level(self.compression_level);
        if let Some(ref title) = self.title {
            options = options.with_title(title.as_str());
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { files, args }) => cmd_convert(&files, &args),
        Some(Commands::Preview { input }) => cmd_preview(&input),
        Some(Commands::Fonts) => {
            cmd_fonts();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if files are provided
            if cli.files.is_empty() {
                println!("{}", "Usage: textpdf <FILES>... [-o OUTPUT]".yellow());
                println!("       textpdf --help for more information");
                Ok(())
            } else {
                cmd_convert(&cli.files, &cli.args)
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Where to write an output named `name`.
fn resolve_output(output: Option<&Path>, name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(name),
    }
}

fn cmd_convert(files: &[PathBuf], args: &ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.to_options();
    log::debug!("Converting {} files ({:?})", files.len(), args.mode());
    let result = convert_files(files, args, &options);

    if args.json {
        let outcome = ConversionOutcome::from_result(&result);
        println!("{}", outcome.to_json()?);
        if !outcome.is_success() {
            std::process::exit(1);
        }
    }

    let output = result?;
    let path = resolve_output(args.output.as_deref(), &output.name);
    output.save(&path)?;

    if !args.json {
        println!("\n{} {}", "Saved to".green().bold(), path.display());
        println!("  {} {} documents", "├─".dimmed(), output.stats.document_count);
        println!("  {} {} pages", "├─".dimmed(), output.stats.page_count);
        if output.stats.placeholder_count > 0 {
            println!(
                "  {} {}",
                "├─".dimmed(),
                format!("{} lines with unsupported characters", output.stats.placeholder_count)
                    .yellow()
            );
        }
        println!("  {} {} bytes", "└─".dimmed(), output.size());
    }

    Ok(())
}

fn convert_files(
    files: &[PathBuf],
    args: &ConvertArgs,
    options: &ConvertOptions,
) -> textpdf::Result<textpdf::ConvertedFile> {
    options.validate()?;

    let pb = ProgressBar::new(files.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    if args.json {
        pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        pb.set_message(format!("Reading {}...", path.display()));
        let document = TextDocument::from_path(path).map_err(|e| {
            pb.abandon_with_message("Failed");
            e.in_document(path.file_name().map_or_else(
                || path.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            ))
        })?;
        documents.push(document);
        pb.inc(1);
    }

    pb.set_message("Rendering PDF...");
    let output = convert_batch(&documents, args.mode(), options);
    match output {
        Ok(_) => pb.finish_with_message("Done!"),
        Err(_) => pb.abandon_with_message("Failed"),
    }
    output
}

fn cmd_preview(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let document = TextDocument::from_path(input)?;
    let options = ConvertOptions::default();

    let mut writer = PdfWriter::new();
    let fonts = FontSet::load(&mut writer, &options.fonts)?;

    println!("{}", document.name().cyan().bold());
    println!("{}", "─".repeat(60).dimmed());

    let text = normalize(document.text(), options.normalize_unicode);
    for (i, paragraph) in split_paragraphs(text.as_str()).iter().enumerate() {
        if i > 0 {
            println!();
        }
        for line in paragraph.lines() {
            let line = collapse_whitespace(line);
            if line.is_empty() {
                println!();
                continue;
            }
            for (text, font, renderable) in preview_line(&line, &fonts, &options) {
                let label = format!("{:<14}", font.base_font());
                if renderable {
                    println!("{} {}", label.dimmed(), text);
                } else {
                    println!("{} {} {}", label.dimmed(), text, "(placeholder)".yellow());
                }
            }
        }
    }

    Ok(())
}

/// Wrapped lines of one logical line, with the font each is drawn in and
/// whether that font can encode it.
fn preview_line(
    line: &str,
    fonts: &FontSet,
    options: &ConvertOptions,
) -> Vec<(String, StandardFont, bool)> {
    let font = fonts.select(needs_extended_font(line));
    let max_width = options.geometry.usable_width();
    wrap_with_font(line, max_width, font, options.font_size)
        .into_iter()
        .map(|wrapped| {
            let renderable = font.encode(&wrapped.text).is_ok();
            (wrapped.text, font.font(), renderable)
        })
        .collect()
}

fn cmd_fonts() {
    let defaults = FontOptions::default();

    println!("{}", "Supported fonts".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for font in StandardFont::ALL {
        let name = font.base_font();
        let mut notes = Vec::new();
        if let Some(pos) = defaults.candidates.iter().position(|c| c == name) {
            notes.push(format!("fallback #{}", pos + 1));
        }
        if defaults.body_font.as_deref() == Some(name) {
            notes.push("body".to_string());
        }
        if notes.is_empty() {
            println!("  {}", name);
        } else {
            println!("  {} {}", name, format!("({})", notes.join(", ")).dimmed());
        }
    }
}

fn cmd_version() {
    println!("{} {}", "textpdf".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Plain text to PDF conversion tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/textpdf".dimmed());
    println!("License: MIT");
}
