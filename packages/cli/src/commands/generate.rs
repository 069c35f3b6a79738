use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use simpleui_common::{FileSystem, RealFileSystem};
use simpleui_generator::{generate_from_json, GeneratedFiles};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions of serialized documents accepted as input
pub const FILE_EXTENSIONS: &[&str] = &["json"];

const DEFAULT_DESTINATION: &str = "generated";

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Serialized document produced by the SimpleUI parser
    pub file: PathBuf,

    /// Destination directory (defaults to `generated/` next to the input)
    #[arg(short, long)]
    pub destination: Option<PathBuf>,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub stdout: bool,

    /// Fail on node kinds that are not supported yet
    #[arg(long)]
    pub strict: bool,
}

pub fn generate(args: GenerateArgs, cwd: &Path) -> Result<()> {
    let file = cwd.join(&args.file);
    check_input(&file)?;

    let source = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let input_dir = file.parent().unwrap_or(cwd);
    let config = Config::load(input_dir)?;
    let mut options = config.compile_options();
    if args.strict {
        options.fail_on_unsupported = true;
    }
    debug!(file = %file.display(), ?options, "Generating");

    let files = generate_from_json(&source, &options)
        .with_context(|| format!("Failed to generate {}", file.display()))?;

    for kind in &files.unsupported {
        eprintln!(
            "{} {} is not supported yet and was left out",
            "⚠️".yellow(),
            kind.bright_white()
        );
    }

    if args.stdout {
        for (name, content) in files.files() {
            println!("{}", format!("/* {} */", name).dimmed());
            println!("{}", content);
        }
        return Ok(());
    }

    let destination = resolve_destination(
        &file,
        args.destination.as_deref(),
        config.destination.as_deref(),
        cwd,
    );
    let written = write_outputs(&RealFileSystem, &destination, &files)?;

    for (target, path) in ["HTML", "CSS", "JS"].iter().zip(&written) {
        println!(
            "{} {}",
            format!("{} code generated successfully:", target).green(),
            path.display().to_string().yellow()
        );
    }

    Ok(())
}

/// The input must exist and carry one of [`FILE_EXTENSIONS`]
fn check_input(file: &Path) -> Result<()> {
    let extension = file.extension().and_then(|s| s.to_str()).unwrap_or_default();
    if !FILE_EXTENSIONS.contains(&extension) {
        return Err(anyhow!(
            "Please, choose a file with one of these extensions: {}",
            FILE_EXTENSIONS
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    if !file.is_file() {
        return Err(anyhow!("File {} doesn't exist", file.display()));
    }

    Ok(())
}

/// Command-line flag first, then the config file, then `generated/` next to
/// the input
fn resolve_destination(
    file: &Path,
    flag: Option<&Path>,
    configured: Option<&str>,
    cwd: &Path,
) -> PathBuf {
    let input_dir = file.parent().unwrap_or(cwd);
    match (flag, configured) {
        (Some(dir), _) => cwd.join(dir),
        (None, Some(dir)) => input_dir.join(dir),
        (None, None) => input_dir.join(DEFAULT_DESTINATION),
    }
}

/// Write the three files into `destination`, creating it if needed
fn write_outputs(
    fs: &impl FileSystem,
    destination: &Path,
    files: &GeneratedFiles,
) -> Result<Vec<PathBuf>> {
    if !fs.exists(destination) {
        fs.create_dir_all(destination)
            .with_context(|| format!("Failed to create {}", destination.display()))?;
    }

    files
        .files()
        .iter()
        .map(|(name, content)| {
            let path = destination.join(name);
            fs.write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(path)
        })
        .collect()
}
