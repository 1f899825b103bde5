//! Check command implementation
//!
//! Prints the resolved configuration. Validation has already run by the
//! time this executes.

use std::io::Write;

use crate::config::FinRiskConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &FinRiskConfig, out: &mut impl Write) -> Result<()> {
    let seed = config
        .seed
        .map_or_else(|| "random (OS entropy)".to_string(), |s| s.to_string());

    writeln!(out, "Configuration OK")?;
    writeln!(out, "  seed:           {}", seed)?;
    writeln!(out, "  reference_date: {}", config.reference_date)?;
    writeln!(out, "  history_days:   {}", config.history_days)?;
    writeln!(out, "  log_level:      {}", config.log_level)?;
    writeln!(out, "  export_dir:     {}", config.export_dir.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_output() {
        let mut config = FinRiskConfig::default();
        config.seed = None;

        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("seed:           random (OS entropy)"));
        assert!(text.contains("reference_date: 2026-02-12"));
        assert!(text.contains("export_dir:     exports"));
    }
}
