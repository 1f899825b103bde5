//! JSON export of a risk snapshot.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use demo_inputs::RiskSnapshot;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// JSON layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonStyle {
    /// Indented, one field per line
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Record of a written export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenSnapshot {
    /// File path
    pub path: PathBuf,
    /// Size in bytes
    pub size: usize,
}

/// Writes snapshots as JSON using the camelCase data contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotWriter {
    style: JsonStyle,
}

impl SnapshotWriter {
    /// Create a writer with the given layout
    pub fn new(style: JsonStyle) -> Self {
        Self { style }
    }

    /// Indented output
    pub fn pretty() -> Self {
        Self::new(JsonStyle::Pretty)
    }

    /// Single-line output
    pub fn compact() -> Self {
        Self::new(JsonStyle::Compact)
    }

    /// Layout in use
    pub fn style(&self) -> JsonStyle {
        self.style
    }

    /// Default file name for a snapshot, keyed by its reference date.
    pub fn file_name(snapshot: &RiskSnapshot) -> String {
        format!("risk_snapshot_{}.json", snapshot.config.reference_date.format("%Y%m%d"))
    }

    /// Serialise to a string.
    pub fn to_json(&self, snapshot: &RiskSnapshot) -> Result<String> {
        let json = match self.style {
            JsonStyle::Pretty => serde_json::to_string_pretty(snapshot)?,
            JsonStyle::Compact => serde_json::to_string(snapshot)?,
        };
        Ok(json)
    }

    /// Write to any sink. Returns the number of bytes written.
    pub fn write_to<W: Write>(&self, mut writer: W, snapshot: &RiskSnapshot) -> Result<usize> {
        let json = self.to_json(snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(json.len() + 1)
    }

    /// Write to `path`, creating missing parent directories.
    pub fn write_file(&self, path: impl AsRef<Path>, snapshot: &RiskSnapshot) -> Result<WrittenSnapshot> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = fs::File::create(&path)?;
        let size = self.write_to(std::io::BufWriter::new(file), snapshot)?;

        info!(
            path = %path.display(),
            size,
            style = ?self.style,
            "Snapshot written to file"
        );

        Ok(WrittenSnapshot { path, size })
    }

    /// Write into `dir` under [`SnapshotWriter::file_name`].
    pub fn write_to_dir(&self, dir: impl AsRef<Path>, snapshot: &RiskSnapshot) -> Result<WrittenSnapshot> {
        self.write_file(dir.as_ref().join(Self::file_name(snapshot)), snapshot)
    }
}
