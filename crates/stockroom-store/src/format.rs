//! # Inventory File Format
//!
//! The on-disk layout of the inventory, independent of where the bytes live.
//!
//! ## Layout
//! ```text
//! name,quantity,price,units_per_box,critical_level     ← header (required)
//! burger bun,5,7.85,144,2                              ← one row per item
//! cheese slice,1,12.00,200,1
//! ```
//!
//! Columns are positional. The header is checked for its width only; a
//! header with renamed columns still loads.
//!
//! ## Normalisation
//! Names are kept exactly as read, surrounding spaces included. Numeric
//! fields may carry surrounding spaces or quotes (` 5 `, `"7.85"`); they are
//! written back bare. Rows end in `\n` or `\r\n`, see [`LineEnding`].

use std::io::{self, Read, Write};

use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use serde::Serialize;
use tracing::{debug, warn};

use stockroom_core::validation::{parse_field_count, parse_field_price, validate_item_name};
use stockroom_core::{Inventory, Item, Money};

use crate::error::{StoreError, StoreResult};

/// Column names, in file order.
pub const COLUMNS: [&str; 5] = [
    "name",
    "quantity",
    "price",
    "units_per_box",
    "critical_level",
];

/// Row shape used when writing.
#[derive(Debug, Serialize)]
struct ItemRow<'a> {
    name: &'a str,
    quantity: u32,
    price: Money,
    units_per_box: u32,
    critical_level: u32,
}

impl<'a> From<&'a Item> for ItemRow<'a> {
    fn from(item: &'a Item) -> Self {
        ItemRow {
            name: &item.name,
            quantity: item.quantity,
            price: item.price,
            units_per_box: item.units_per_box,
            critical_level: item.critical_level,
        }
    }
}

// =============================================================================
// Line Endings
// =============================================================================

/// Row terminator of an inventory file.
///
/// Files written by spreadsheet tools and Python's `csv` module end rows in
/// `\r\n`. The ending found on load is reused on save so an unchanged
/// inventory writes back byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detects the ending from the first line of `bytes`.
    ///
    /// Text without any newline is treated as [`LineEnding::Lf`].
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_store::LineEnding;
    ///
    /// assert_eq!(LineEnding::detect(b"name,quantity\r\nbun,5\r\n"), LineEnding::CrLf);
    /// assert_eq!(LineEnding::detect(b"name,quantity\nbun,5\n"), LineEnding::Lf);
    /// ```
    pub fn detect(bytes: &[u8]) -> Self {
        match bytes.iter().position(|&b| b == b'\n') {
            Some(end) if end > 0 && bytes[end - 1] == b'\r' => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    fn terminator(self) -> Terminator {
        match self {
            LineEnding::Lf => Terminator::Any(b'\n'),
            LineEnding::CrLf => Terminator::CRLF,
        }
    }
}

// =============================================================================
// Reading
// =============================================================================

/// Parses an inventory from CSV text.
///
/// ## Errors
/// - [`StoreError::EmptyFile`] if there is no header row
/// - [`StoreError::HeaderMismatch`] if the header is not five columns wide
/// - [`StoreError::MalformedRow`] for the first row that does not parse,
///   with its 1-based line number
/// - [`StoreError::Csv`] if the reader itself fails (e.g., invalid UTF-8)
///
/// ## Example
/// ```rust
/// use stockroom_store::read_inventory;
///
/// let text = "name,quantity,price,units_per_box,critical_level\nbun,5,7.85,144,2\n";
/// let inventory = read_inventory(text.as_bytes()).unwrap();
///
/// assert_eq!(inventory.len(), 1);
/// assert_eq!(inventory.items()[0].name, "bun");
/// ```
pub fn read_inventory<R: Read>(source: R) -> StoreResult<Inventory> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::None)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    check_header(&headers)?;

    let mut items = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        items.push(parse_row(&record, line)?);
    }

    debug!(rows = items.len(), "Parsed inventory rows");
    Ok(Inventory::new(items))
}

fn check_header(headers: &StringRecord) -> StoreResult<()> {
    if headers.is_empty() {
        return Err(StoreError::EmptyFile);
    }

    if headers.len() != COLUMNS.len() {
        return Err(StoreError::HeaderMismatch {
            found: headers.len(),
            expected: COLUMNS.len(),
        });
    }

    let renamed = headers
        .iter()
        .zip(COLUMNS)
        .any(|(found, expected)| !found.trim().eq_ignore_ascii_case(expected));
    if renamed {
        warn!(
            header = ?headers.iter().collect::<Vec<_>>(),
            "Inventory header differs from expected column names; reading by position"
        );
    }

    Ok(())
}

fn parse_row(record: &StringRecord, line: u64) -> StoreResult<Item> {
    if record.len() != COLUMNS.len() {
        return Err(StoreError::malformed(
            line,
            format!("expected {} fields, found {}", COLUMNS.len(), record.len()),
        ));
    }

    let field = |index: usize| record.get(index).unwrap_or_default();
    let invalid = |err: stockroom_core::ValidationError| StoreError::malformed(line, err.to_string());

    let name = field(0);
    validate_item_name(name).map_err(invalid)?;

    Ok(Item::new(
        name,
        parse_field_count(COLUMNS[1], field(1)).map_err(invalid)?,
        parse_field_price(field(2)).map_err(invalid)?,
        parse_field_count(COLUMNS[3], field(3)).map_err(invalid)?,
        parse_field_count(COLUMNS[4], field(4)).map_err(invalid)?,
    ))
}

// =============================================================================
// Writing
// =============================================================================

/// Writes the header and one row per item.
///
/// Rows end in `ending`. Fields are quoted only when they contain a comma,
/// quote or newline. An empty inventory still gets its header.
pub fn write_inventory<W: Write>(
    sink: W,
    inventory: &Inventory,
    ending: LineEnding,
) -> io::Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(ending.terminator())
        .from_writer(sink);

    writer.write_record(COLUMNS)?;
    for item in inventory.items() {
        writer.serialize(ItemRow::from(item))?;
    }

    writer.flush()
}

// =============================================================================
// Unit Tests
// =============================================================================
