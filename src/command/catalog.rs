use crate::hierarchy::{HierarchyBuilder, HierarchyNode};
use crate::{CatalogError, Result, DEFAULT_OUTPUT_FILE};

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the file contents with a single document
    #[default]
    Overwrite,
    /// Add the document to the end of the file, leaving earlier runs in place
    Append,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    File(PathBuf),
    Stdout,
}

impl Output {
    // "-" selects stdout
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            Output::Stdout
        } else {
            Output::File(arg.to_path_buf())
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::File(PathBuf::from(DEFAULT_OUTPUT_FILE))
    }
}

#[derive(Clone, Debug, Default)]
pub struct CatalogOptions {
    pub output: Output,
    pub mode: WriteMode,
}

// Two-space indented JSON with sorted keys, no trailing newline
pub fn render_catalog(node: &HierarchyNode) -> Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}

pub fn write_catalog(node: &HierarchyNode, options: &CatalogOptions) -> Result<()> {
    // Rendered before the output is touched so a failure never leaves a partial document
    let json = render_catalog(node)?;

    match &options.output {
        Output::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| CatalogError::io("<stdout>", e))?;
        }
        Output::File(path) => {
            let mut file = match options.mode {
                WriteMode::Overwrite => OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(path),
                WriteMode::Append => OpenOptions::new().create(true).append(true).open(path),
            }
            .map_err(|e| CatalogError::io(path, e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| CatalogError::io(path, e))?;
        }
    }
    Ok(())
}

/// Build the hierarchy rooted at `input` and write it out.
pub fn catalog_directory(
    input: &Path,
    builder: &HierarchyBuilder,
    options: &CatalogOptions,
) -> Result<HierarchyNode> {
    let node = builder.build(input)?;
    write_catalog(&node, options)?;

    let destination = match &options.output {
        Output::File(path) => path.display().to_string(),
        Output::Stdout => "stdout".to_string(),
    };
    info!(
        "Catalogued {} samples in {} directories from {} -> {}",
        node.sample_count(),
        node.directory_count(),
        input.display(),
        destination
    );
    Ok(node)
}
