//! Look up Dalvik bytecode opcodes from the opcode table published at
//! [`fetch::DEFAULT_URL`].
//!
//! The pipeline is: load the page ([`fetch`]), scrape its table ([`parse`]),
//! filter ([`lookup`]), print ([`present`]). [`explain`] runs the last three.

use std::io::Write;

pub use error::{Error, Result};
pub use fetch::{Source, DEFAULT_URL};
pub use lookup::Query;

pub mod error;
pub mod fetch;
pub mod hex;
pub mod lookup;
pub mod parse;
pub mod present;

/// One row of the opcode table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeRecord {
    pub opcode: u8,
    /// Mnemonic, e.g. `const/16`.
    pub name: String,
    /// Mnemonic plus operands, e.g. `const/16 vx,lit16`.
    pub syntax: String,
    pub description: String,
    /// May be empty.
    pub example: Vec<String>,
}

impl OpcodeRecord {
    /// Two uppercase hex digits.
    pub fn hex(&self) -> String {
        hex::encode_u8(self.opcode)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub verbose: bool,
    /// Where the page came from, for the verbose notes.
    pub source: String,
}

/// Parse `html`, run `query` against it, and print the matches to `out`.
///
/// Returns [`Error::NotFound`] if nothing matched, after printing the
/// not-found message and any hints.
pub fn explain(out: &mut impl Write, html: &str, query: &Query, opts: &Options) -> Result<()> {
    let records = parse::parse(html)?;
    let found = lookup::lookup(&records, query);
    log::debug!("{} of {} opcodes match {query}", found.len(), records.len());

    if found.is_empty() {
        present::write_not_found(out, query)?;
        return Err(Error::NotFound(query.to_string()));
    }

    present::write_records(out, &found, opts.verbose)?;
    if opts.verbose {
        present::write_notes(out, &opts.source)?;
    }
    Ok(())
}
