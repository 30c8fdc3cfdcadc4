//! Scrapes opcode records out of the opcode table page.
//!
//! The page has a single `<table>`; its first row is a header and every other
//! row looks like:
//!
//! ```text
//! | 13 | const/16 vx,lit16 | Puts the 16 bit constant into vx. | 1300 0A00 - const/16 v0, 10 |
//! ```
//!
//! The fourth (example) column is optional.

use std::collections::HashSet;

use itertools::Itertools;
use log::{debug, warn};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};

use crate::{
    error::{Error, Result},
    hex, OpcodeRecord,
};

static TABLE: Lazy<Selector> = Lazy::new(|| selector("table"));
static ROW: Lazy<Selector> = Lazy::new(|| selector("tr"));
static CELL: Lazy<Selector> = Lazy::new(|| selector("td"));

fn selector(s: &str) -> Selector {
    Selector::parse(s).expect("hard-coded selector")
}

const MIN_CELLS: usize = 3;

pub fn parse(html: &str) -> Result<Vec<OpcodeRecord>> {
    let doc = Html::parse_document(html);
    let table = doc
        .select(&TABLE)
        .next()
        .ok_or_else(|| Error::Parse("no opcode table on the page".into()))?;

    let mut records = vec![];
    let mut seen = HashSet::new();
    for (idx, row) in table.select(&ROW).enumerate().skip(1) {
        let cells = row.select(&CELL).collect_vec();
        if cells.is_empty() {
            continue;
        }

        let record = match parse_row(&cells) {
            Ok(record) => record,
            Err(reason) => {
                warn!("skipping table row {idx}: {reason}");
                continue;
            }
        };

        if !seen.insert(record.opcode) {
            warn!(
                "skipping table row {idx}: duplicate opcode {} ({})",
                record.hex(),
                record.name,
            );
            continue;
        }

        records.push(record);
    }

    if records.is_empty() {
        return Err(Error::Parse("opcode table has no usable rows".into()));
    }

    debug!("parsed {} opcodes", records.len());
    Ok(records)
}

/// The error is a human-readable reason for skipping the row.
fn parse_row(cells: &[ElementRef]) -> std::result::Result<OpcodeRecord, String> {
    if cells.len() < MIN_CELLS {
        return Err(format!(
            "expected at least {MIN_CELLS} cells, got {}",
            cells.len()
        ));
    }

    let hex_text = cell_text(cells[0]);
    let opcode =
        hex::decode_u8(&hex_text).map_err(|e| format!("bad opcode {hex_text:?}: {e}"))?;

    let syntax = cell_text(cells[1]);
    let name = syntax
        .split_whitespace()
        .next()
        .ok_or_else(|| format!("opcode {hex_text} has no name"))?
        .to_string();

    let description = cell_text(cells[2]);
    let example = cells.get(3).map(|&c| cell_lines(c)).unwrap_or_default();

    Ok(OpcodeRecord {
        opcode,
        name,
        syntax,
        description,
        example,
    })
}

/// All text in the cell on one line, whitespace collapsed.
fn cell_text(cell: ElementRef) -> String {
    cell_lines(cell).join(" ")
}

/// Text in the cell split at newlines and `<br>`, each line whitespace
/// collapsed, blank lines dropped.
fn cell_lines(cell: ElementRef) -> Vec<String> {
    let mut raw = String::new();
    for node in cell.descendants() {
        match node.value() {
            Node::Text(text) => raw.push_str(text),
            Node::Element(elem) if elem.name() == "br" => raw.push('\n'),
            _ => (),
        }
    }

    raw.lines()
        .map(|line| line.split_whitespace().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}
