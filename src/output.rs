//! Output formatting for registry listings

use crate::registry::types::{IndexableRecord, ManifestEntry};
use crate::resources::{describe_data_ref, describe_icon_ref};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print records one per line: rank, identifier, data source, icon
pub fn print_records(records: &[&IndexableRecord], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for record in records {
        print_record(&mut stdout, record)?;
    }

    Ok(())
}

/// Print a single record in detail form
pub fn print_record_detail(record: &IndexableRecord, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(stdout, "{}", record.identifier)?;
    stdout.reset()?;

    writeln!(stdout, "  rank:  {}", record.rank)?;
    writeln!(stdout, "  data:  {}", describe_data_ref(record.data_ref))?;
    writeln!(stdout, "  icon:  {}", describe_icon_ref(record.icon_ref))?;

    Ok(())
}

fn print_record(stdout: &mut StandardStream, record: &IndexableRecord) -> io::Result<()> {
    // Rank
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "{:>5}", record.rank)?;
    stdout.reset()?;
    write!(stdout, "  ")?;

    // Identifier
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(stdout, "{}", record.identifier)?;
    stdout.reset()?;

    // Data source, dimmed when absent
    write!(stdout, "  ")?;
    if !record.has_data_source() {
        stdout.set_color(ColorSpec::new().set_dimmed(true))?;
    }
    write!(stdout, "{}", describe_data_ref(record.data_ref))?;
    stdout.reset()?;

    // Icon
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    writeln!(stdout, "  {}", describe_icon_ref(record.icon_ref))?;
    stdout.reset()?;

    Ok(())
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer_pretty(&mut lock, value)?;
    writeln!(lock)?;
    Ok(())
}

/// Render a manifest as JSON text, suitable for `load_manifest`
pub fn manifest_to_json(manifest: &[ManifestEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{builtin_manifest, parse_manifest};

    #[test]
    fn test_manifest_json_reloads() {
        let manifest = builtin_manifest();
        let json = manifest_to_json(&manifest).unwrap();
        assert_eq!(parse_manifest(&json).unwrap(), manifest);
    }
}
