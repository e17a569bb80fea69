//! # Page Builder CLI
//!
//! Command-line host for the page builder core.
//!
//! ## Usage
//!
//! ```bash
//! # Browse the component library
//! page-builder library --search container
//!
//! # Export a layout document as a component file
//! page-builder export --layout layout.json --component LandingPage --out-dir src/pages
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `ExportConfig` - Where and how generated code is written
//! - `export_layout` / `render_library` - The work behind each subcommand

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use builder_core::{CodegenConfig, LayoutDocument, Library};
use clap::{Parser, Subcommand};

/// Command-line arguments for page-builder.
#[derive(Debug, Clone, Parser)]
#[command(name = "page-builder")]
#[command(about = "Page builder component library and code export")]
#[command(version)]
pub struct CliArgs {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the component templates
    Library {
        /// Only show templates whose name contains this text
        #[arg(long)]
        search: Option<String>,

        /// Print the matching categories as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate component source from a layout document
    Export {
        /// Layout document (JSON) to export
        #[arg(long)]
        layout: PathBuf,

        /// Name of the generated component
        #[arg(long, env = "PAGE_BUILDER_COMPONENT", default_value = "GeneratedComponent")]
        component: String,

        /// Directory the `<Component>.tsx` file is written to
        #[arg(long, env = "PAGE_BUILDER_OUT_DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Print the code instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}

/// Export configuration.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Layout document path.
    pub layout: PathBuf,
    /// Code generation settings.
    pub codegen: CodegenConfig,
    /// Output directory; `None` prints to stdout.
    pub out_dir: Option<PathBuf>,
}

impl ExportConfig {
    /// Create an export configuration with default code generation settings.
    #[must_use]
    pub fn new(layout: impl Into<PathBuf>) -> Self {
        Self {
            layout: layout.into(),
            codegen: CodegenConfig::default(),
            out_dir: None,
        }
    }

    /// Path of the file the export writes, if writing to a file.
    #[must_use]
    pub fn output_path(&self) -> Option<PathBuf> {
        self.out_dir
            .as_ref()
            .map(|dir| dir.join(self.codegen.file_name()))
    }
}

impl TryFrom<Command> for ExportConfig {
    type Error = anyhow::Error;

    fn try_from(command: Command) -> anyhow::Result<Self> {
        match command {
            Command::Export {
                layout,
                component,
                out_dir,
                stdout,
            } => Ok(Self {
                layout,
                codegen: CodegenConfig::default().with_component_name(component),
                out_dir: (!stdout).then_some(out_dir),
            }),
            Command::Library { .. } => Err(anyhow::anyhow!("not an export command")),
        }
    }
}

/// Result of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Generated source.
    pub code: String,
    /// File written, if any.
    pub written: Option<PathBuf>,
}

/// Load a layout document from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a layout document.
pub fn load_layout(path: &Path) -> anyhow::Result<LayoutDocument> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout {}", path.display()))?;
    LayoutDocument::from_json(&json)
        .with_context(|| format!("Failed to parse layout {}", path.display()))
}

/// Generate code for the configured layout and write it out.
///
/// # Errors
///
/// Returns an error if the layout cannot be loaded, is not a valid canvas,
/// cannot be serialized as markup, or the output file cannot be written.
pub fn export_layout(config: &ExportConfig) -> anyhow::Result<ExportOutcome> {
    let store = load_layout(&config.layout)?
        .into_store()
        .context("Layout is not a valid canvas")?;
    tracing::debug!(
        "Loaded {} elements from {}",
        store.element_count(),
        config.layout.display()
    );

    let code = store
        .generate_code_with(&config.codegen)
        .context("Failed to generate component code")?;

    let written = match config.output_path() {
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
            }
            std::fs::write(&path, &code)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
            Some(path)
        }
        None => None,
    };

    Ok(ExportOutcome { code, written })
}

/// Render the library (optionally filtered) as plain text or JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_library(library: &Library, search: Option<&str>, json: bool) -> anyhow::Result<String> {
    let categories = library.search(search.unwrap_or_default());
    if json {
        return Ok(serde_json::to_string_pretty(&categories)? + "\n");
    }

    let mut out = String::new();
    for category in &categories {
        let _ = writeln!(out, "{} ({})", category.name, category.templates.len());
        for template in &category.templates {
            let _ = writeln!(out, "  {:<16} <{}>", template.name, template.kind);
        }
    }
    if categories.is_empty() {
        out.push_str("No matching components\n");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_layout(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("layout.json");
        std::fs::write(&path, json).expect("write layout");
        path
    }

    #[test]
    fn test_cli_parses_export() {
        let args = CliArgs::parse_from([
            "page-builder",
            "export",
            "--layout",
            "layout.json",
            "--component",
            "LandingPage",
            "--out-dir",
            "out",
        ]);
        let config = ExportConfig::try_from(args.command).expect("export command");
        assert_eq!(config.codegen.component_name, "LandingPage");
        assert_eq!(
            config.output_path(),
            Some(PathBuf::from("out").join("LandingPage.tsx"))
        );
    }

    #[test]
    fn test_cli_stdout_has_no_output_path() {
        let args = CliArgs::parse_from(["page-builder", "export", "--layout", "l.json", "--stdout"]);
        let config = ExportConfig::try_from(args.command).expect("export command");
        assert!(config.output_path().is_none());
    }

    #[test]
    fn test_library_command_is_not_export() {
        let args = CliArgs::parse_from(["page-builder", "library", "--search", "head"]);
        assert!(ExportConfig::try_from(args.command).is_err());
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let layout = write_layout(
            dir.path(),
            r#"{"elements":[{"id":"p-1","type":"p","props":{"children":"hi"},"position":{"x":0,"y":0}}]}"#,
        );
        let mut config = ExportConfig::new(layout);
        config.out_dir = Some(dir.path().join("src"));

        let outcome = export_layout(&config).expect("export");
        let path = outcome.written.expect("file written");
        assert_eq!(path, dir.path().join("src").join("GeneratedComponent.tsx"));
        let on_disk = std::fs::read_to_string(&path).expect("read");
        assert_eq!(on_disk, outcome.code);
        assert!(on_disk.contains("<p children=\"hi\" />"));
    }

    #[test]
    fn test_export_to_stdout_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let layout = write_layout(dir.path(), r#"{"elements":[]}"#);
        let outcome = export_layout(&ExportConfig::new(layout)).expect("export");
        assert!(outcome.written.is_none());
        assert!(outcome.code.contains("<div className=\"min-h-screen\">"));
    }

    #[test]
    fn test_export_rejects_bad_layouts() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(export_layout(&ExportConfig::new(dir.path().join("missing.json"))).is_err());

        let layout = write_layout(
            dir.path(),
            r#"{"elements":[{"id":"x","type":"bad tag"}]}"#,
        );
        assert!(export_layout(&ExportConfig::new(layout)).is_err());
    }

    #[test]
    fn test_render_library_text_and_json() {
        let library = Library::builtin();
        let text = render_library(&library, Some("button"), false).expect("text");
        assert_eq!(text, "Interactive (1)\n  Button           <button>\n");

        let text = render_library(&library, Some("zzz"), false).expect("text");
        assert_eq!(text, "No matching components\n");

        let json = render_library(&library, None, true).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value.as_array().map(Vec::len), Some(4));
    }
}
