use lazy_static::lazy_static;
use regex::Regex;

use crate::error::SimError;

lazy_static! {
    static ref RECORD: Regex = Regex::new(r"^\s*(?P<kind>[ILSils])\s+(?:0[xX])?(?P<address>[0-9a-fA-F]{1,8})\s*$").unwrap();
}

/// What a trace record asks of the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// Instruction fetch, served by the icache
    Instruction,
    /// Data load, served by the dcache
    Load,
    /// Data store, served by the dcache. Stores are modelled exactly like loads
    Store,
}

/// A single memory reference from a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    pub kind: AccessKind,
    pub address: u32,
}

/// Parses one trace line of the form `<I|L|S> <hex address>`
///
/// Returns `Ok(None)` for blank lines and `#` comments. `line_number` is only used for the error
///
/// # Examples
///
/// ```
/// use memhier::trace::{parse_record, AccessKind, TraceRecord};
/// let record = parse_record("L 0x7fff0010", 1).unwrap();
/// assert_eq!(record, Some(TraceRecord { kind: AccessKind::Load, address: 0x7fff0010 }));
/// ```
pub fn parse_record(line: &str, line_number: usize) -> Result<Option<TraceRecord>, SimError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let malformed = || SimError::MalformedTrace { line: line_number, content: line.to_string() };
    let captures = RECORD.captures(trimmed).ok_or_else(malformed)?;
    let kind = match &captures["kind"] {
        "I" | "i" => AccessKind::Instruction,
        "L" | "l" => AccessKind::Load,
        _ => AccessKind::Store,
    };
    // At most 8 hex digits, always fits
    let address = u32::from_str_radix(&captures["address"], 16).map_err(|_| malformed())?;
    Ok(Some(TraceRecord { kind, address }))
}
