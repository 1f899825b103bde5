//! Export command implementation

use std::io::Write;
use std::path::Path;

use demo_inputs::RiskSnapshot;
use demo_outputs::export::SnapshotWriter;

use crate::Result;

/// Where the snapshot goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget<'a> {
    /// Standard output
    Stdout,
    /// An explicit file path
    File(&'a Path),
    /// The configured export directory, under the default file name
    Directory(&'a Path),
}

impl<'a> ExportTarget<'a> {
    /// Resolve `--output` against the configured export directory. `-` means stdout.
    pub fn resolve(output: Option<&'a Path>, export_dir: &'a Path) -> Self {
        match output {
            Some(path) if path.as_os_str() == "-" => ExportTarget::Stdout,
            Some(path) => ExportTarget::File(path),
            None => ExportTarget::Directory(export_dir),
        }
    }
}

/// Run the export command
pub fn run(
    snapshot: &RiskSnapshot,
    target: ExportTarget<'_>,
    compact: bool,
    out: &mut impl Write,
) -> Result<()> {
    let writer = if compact {
        SnapshotWriter::compact()
    } else {
        SnapshotWriter::pretty()
    };

    let written = match target {
        ExportTarget::Stdout => {
            writer.write_to(&mut *out, snapshot)?;
            return Ok(());
        }
        ExportTarget::File(path) => writer.write_file(path, snapshot)?,
        ExportTarget::Directory(dir) => writer.write_to_dir(dir, snapshot)?,
    };

    writeln!(
        out,
        "Wrote {} ({} bytes)",
        written.path.display(),
        written.size
    )?;
    Ok(())
}
