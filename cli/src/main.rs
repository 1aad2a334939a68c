//! mdocx CLI - Markdown to Word translation tool

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdocx::{
    ContentTable, ConvertOptions, ConverterRegistry, OutputFormat, PageSize, ParseOptions,
    RenderOptions, RenderStats, StyleSheet,
};

#[derive(Parser)]
#[command(name = "mdocx")]
#[command(version)]
#[command(about = "Translate Markdown-like text into Word documents", long_about = None)]
struct Cli {
    /// Input file (.md, .markdown, .txt or a .json content table)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (defaults to the input with a .docx extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    translate: TranslateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a file to a Word document
    Convert {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        translate: TranslateArgs,
    },

    /// Build a Word document from a JSON content table
    Build {
        /// Content table file
        #[arg(value_name = "TABLE")]
        input: PathBuf,

        /// Output file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        translate: TranslateArgs,
    },

    /// Convert several files
    Batch {
        /// Input files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (next to each input if not specified)
        #[arg(short = 'd', long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        #[command(flatten)]
        translate: TranslateArgs,
    },

    /// Dump the translated block model
    Inspect {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Dump format
        #[arg(short, long, value_enum, default_value = "json")]
        format: InspectFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        translate: TranslateArgs,
    },

    /// Show block statistics
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the default style sheet as JSON
    Styles,

    /// Show version information
    Version,
}

/// Options shared by every command that translates input.
#[derive(Args, Clone)]
struct TranslateArgs {
    /// Emit lines between ``` fences as code
    #[arg(long)]
    fenced_code: bool,

    /// Drop empty bold runs such as the one in `a****b`
    #[arg(long)]
    skip_empty_bold: bool,

    /// NFC-normalize input text
    #[arg(long)]
    normalize: bool,

    /// Style sheet JSON file
    #[arg(long, value_name = "FILE", env = "MDOCX_STYLES")]
    styles: Option<PathBuf>,

    /// Page size
    #[arg(long, value_enum, env = "MDOCX_PAGE_SIZE", default_value = "letter")]
    page_size: PageArg,

    /// Document title
    #[arg(long)]
    title: Option<String>,
}

impl TranslateArgs {
    fn to_options(&self) -> Result<ConvertOptions, Box<dyn std::error::Error>> {
        let mut parse = ParseOptions::new()
            .with_skip_empty_emphasis(self.skip_empty_bold)
            .with_unicode_normalization(self.normalize);
        if self.fenced_code {
            parse = parse.fenced_code_blocks();
        }

        let mut render = RenderOptions::new().with_page_size(self.page_size.into());
        if let Some(ref path) = self.styles {
            render = render.with_styles(StyleSheet::from_file(path)?);
        }

        let mut options = ConvertOptions::new()
            .with_parse_options(parse)
            .with_render_options(render)
            .with_created(Utc::now());
        if let Some(ref title) = self.title {
            options = options.with_title(title.clone());
        }
        Ok(options)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageArg {
    /// US Letter
    Letter,
    /// ISO A4
    A4,
}

impl From<PageArg> for PageSize {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Letter => PageSize::Letter,
            PageArg::A4 => PageSize::A4,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum InspectFormat {
    /// Block model as JSON
    Json,
    /// Plain text
    Text,
    /// Normalized Markdown
    Markdown,
}

impl From<InspectFormat> for OutputFormat {
    fn from(format: InspectFormat) -> Self {
        match format {
            InspectFormat::Json => OutputFormat::Json,
            InspectFormat::Text => OutputFormat::Text,
            InspectFormat::Markdown => OutputFormat::Markdown,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            translate,
        }) => cmd_convert(&input, output.as_deref(), &translate),
        Some(Commands::Build {
            input,
            output,
            translate,
        }) => cmd_build(&input, output.as_deref(), &translate),
        Some(Commands::Batch {
            inputs,
            output_dir,
            translate,
        }) => cmd_batch(&inputs, output_dir.as_deref(), &translate),
        Some(Commands::Inspect {
            input,
            format,
            output,
            translate,
        }) => cmd_inspect(&input, format, output.as_deref(), &translate),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Styles) => cmd_styles(),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), &cli.translate)
            } else {
                println!("{}", "Usage: mdocx <FILE> [OUTPUT]".yellow());
                println!("       mdocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Output path for an input: the given directory (or the input's own) plus
/// the input's stem with a `.docx` extension.
fn docx_path(input: &Path, dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(dir) => {
            let mut name = input.file_stem().unwrap_or_default().to_os_string();
            name.push(".docx");
            dir.join(name)
        }
        None => input.with_extension("docx"),
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    translate: &TranslateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| docx_path(input, None));

    let options = translate.to_options()?;
    let registry = ConverterRegistry::with_defaults();
    let result = registry.convert(input, &options)?;
    result.save(&output)?;

    println!(
        "{} {}",
        "Created Word document:".green(),
        output.display()
    );
    Ok(())
}

fn cmd_build(
    input: &Path,
    output: Option<&Path>,
    translate: &TranslateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| docx_path(input, None));

    let table = ContentTable::from_file(input)?;
    let options = translate.to_options()?;
    let result = mdocx::convert::render_document(table.to_document(), &options)?;
    result.save(&output)?;

    println!(
        "{} {}",
        "Created Word document:".green(),
        output.display()
    );
    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: Option<&Path>,
    translate: &TranslateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)?;
    }

    let options = translate.to_options()?;
    let registry = ConverterRegistry::with_defaults();

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut created = Vec::new();
    let mut failed = Vec::new();
    for input in inputs {
        pb.set_message(input.display().to_string());
        let output = docx_path(input, output_dir);
        match registry
            .convert(input, &options)
            .and_then(|result| result.save(&output))
        {
            Ok(()) => created.push(output),
            Err(e) => {
                log::warn!("Failed to convert {}: {}", input.display(), e);
                failed.push((input, e));
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    println!("\n{}", "Created Word documents:".green().bold());
    for (i, path) in created.iter().enumerate() {
        let branch = if i + 1 == created.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), path.display());
    }

    if !failed.is_empty() {
        println!("\n{}", "Failed:".red().bold());
        for (input, e) in &failed {
            println!("  {} {}: {}", "─".dimmed(), input.display(), e);
        }
        return Err(format!("{} of {} files failed", failed.len(), inputs.len()).into());
    }

    Ok(())
}

fn cmd_inspect(
    input: &Path,
    format: InspectFormat,
    output: Option<&Path>,
    translate: &TranslateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = translate.to_options()?.with_format(format.into());
    let registry = ConverterRegistry::with_defaults();
    let result = registry.convert(input, &options)?;
    let text = result.as_text().unwrap_or_default();

    if let Some(path) = output {
        fs::write(path, text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ConverterRegistry::with_defaults();
    let converter = registry.converter_for(input)?;
    let doc = converter.load(input, &ConvertOptions::default())?;
    let stats = RenderStats::from_document(&doc);

    if json {
        let value = serde_json::json!({
            "file": input.display().to_string(),
            "source": converter.name(),
            "title": doc.title(),
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Source".bold(), converter.name());
    if let Some(title) = doc.title() {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }

    println!();
    println!("{}", "Block Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), stats.block_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Spacers".bold(), stats.spacer_count);
    if stats.code_line_count > 0 {
        println!("{}: {}", "Code lines".bold(), stats.code_line_count);
    }
    println!("{}: {}", "Bold runs".bold(), stats.bold_run_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_styles() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", StyleSheet::default().to_json()?);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown to Word translation tool");
    println!();
    println!(
        "Sources: {}",
        ConverterRegistry::with_defaults()
            .supported_extensions()
            .join(", ")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docx_path_next_to_input() {
        assert_eq!(
            docx_path(Path::new("notes/plan.md"), None),
            PathBuf::from("notes/plan.docx")
        );
    }

    #[test]
    fn test_docx_path_in_directory() {
        assert_eq!(
            docx_path(Path::new("notes/plan.md"), Some(Path::new("out"))),
            PathBuf::from("out/plan.docx")
        );
        assert_eq!(
            docx_path(Path::new("v1.2.md"), Some(Path::new("out"))),
            PathBuf::from("out/v1.2.docx")
        );
    }

    #[test]
    fn test_translate_args_to_options() {
        let cli = Cli::parse_from([
            "mdocx",
            "convert",
            "a.md",
            "--fenced-code",
            "--page-size",
            "a4",
            "--title",
            "T",
        ]);
        let Some(Commands::Convert { translate, .. }) = cli.command else {
            panic!("expected convert");
        };
        let options = translate.to_options().unwrap();
        assert_eq!(options.parse.fence_mode, mdocx::FenceMode::CodeBlocks);
        assert_eq!(options.render.page_size, PageSize::A4);
        assert_eq!(options.title.as_deref(), Some("T"));
        assert!(options.created.is_some());
    }

    #[test]
    fn test_missing_style_sheet_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = TranslateArgs {
            fenced_code: false,
            skip_empty_bold: false,
            normalize: false,
            styles: Some(dir.path().join("missing.json")),
            page_size: PageArg::Letter,
            title: None,
        };
        assert!(args.to_options().is_err());
    }
}
