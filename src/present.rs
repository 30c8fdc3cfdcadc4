use std::io::{self, Write};

use crate::{lookup::Query, OpcodeRecord};

const RULE_WIDTH: usize = 60;

/// Suggested when a name query matches nothing.
const COMMON_OPCODES: [&str; 5] = [
    "const/4",
    "const/16",
    "const-string",
    "move-object",
    "move-result",
];

const NOTES: [&str; 4] = [
    "Vx values denote Dalvik registers",
    "Boolean values: 1 = true, 0 = false",
    "Long/double values use two registers (vx, vx+1)",
    "Examples are in big-endian format",
];

pub fn write_records(
    out: &mut impl Write,
    records: &[&OpcodeRecord],
    verbose: bool,
) -> io::Result<()> {
    for r in records {
        if verbose {
            write_verbose(out, r)?;
        } else {
            writeln!(out, "0x{}  {}", r.hex(), r.name)?;
        }
    }
    Ok(())
}

fn write_verbose(out: &mut impl Write, r: &OpcodeRecord) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "{rule}")?;
    writeln!(out, "Opcode: {} (0x{})", r.name, r.hex())?;
    writeln!(out, "Syntax: {}", or_not_available(&r.syntax))?;
    writeln!(out, "{rule}")?;

    writeln!(out)?;
    writeln!(out, "Explanation:")?;
    writeln!(out, "  {}", or_not_available(&r.description))?;

    writeln!(out)?;
    writeln!(out, "Example:")?;
    if r.example.is_empty() {
        writeln!(out, "  Not available")?;
    }
    for line in &r.example {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;

    Ok(())
}

fn or_not_available(s: &str) -> &str {
    if s.is_empty() {
        "Not available"
    } else {
        s
    }
}

/// Reading notes for the table, shown once after verbose output.
pub fn write_notes(out: &mut impl Write, source: &str) -> io::Result<()> {
    writeln!(out, "Additional information:")?;
    writeln!(out, "  Source: {source}")?;
    for note in NOTES {
        writeln!(out, "  * {note}")?;
    }
    Ok(())
}

/// The "not found" line, then hints for name queries.
pub fn write_not_found(out: &mut impl Write, query: &Query) -> io::Result<()> {
    writeln!(out, "No opcode found matching {query}")?;
    if let Query::Name(_) = query {
        writeln!(out)?;
        writeln!(out, "Try these common opcodes:")?;
        for name in COMMON_OPCODES {
            writeln!(out, "  * {name}")?;
        }
        writeln!(out)?;
        writeln!(out, "Or use --hex to search by hex value")?;
    }
    Ok(())
}
