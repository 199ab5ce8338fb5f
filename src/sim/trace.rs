//! Memory reference traces.
//!
//! Traces use the valgrind "lackey" line format:
//!
//! ```text
//! I  04000000,3
//!  L 7ff000398,8
//!  S 7ff000390,8
//!  M 0421c7f0,4
//! ```
//!
//! Each line is an access kind followed by a hexadecimal address and an
//! optional `,size`. Blank lines and lines starting with `=` are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::common::{Error, PageId, Result};

/// Kind of memory reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    Instruction,
    Load,
    Store,
    Modify,
}

impl AccessKind {
    /// Whether the access writes to the page.
    pub fn is_write(self) -> bool {
        matches!(self, AccessKind::Store | AccessKind::Modify)
    }
}

impl FromStr for AccessKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s {
            "I" => Ok(AccessKind::Instruction),
            "L" => Ok(AccessKind::Load),
            "S" => Ok(AccessKind::Store),
            "M" => Ok(AccessKind::Modify),
            other => Err(format!("unknown access kind {:?}", other)),
        }
    }
}

/// One reference from a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub kind: AccessKind,
    pub page: PageId,
}

impl Access {
    pub fn new(kind: AccessKind, page: PageId) -> Self {
        Self { kind, page }
    }
}

/// An in-memory list of references, replayed in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    accesses: Vec<Access>,
}

impl Trace {
    pub fn new(accesses: Vec<Access>) -> Self {
        Self { accesses }
    }

    /// Read and parse the trace file at `path`.
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be read
    /// - `Error::MalformedTrace` on the first line that does not parse
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// Parse a trace from any buffered reader.
    ///
    /// # Errors
    /// Same as [`Trace::from_path`].
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut accesses = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('=') {
                continue;
            }

            let access = parse_line(line).map_err(|reason| Error::MalformedTrace {
                line: idx + 1,
                reason,
            })?;
            accesses.push(access);
        }

        Ok(Self { accesses })
    }

    pub fn accesses(&self) -> &[Access] {
        &self.accesses
    }

    pub fn len(&self) -> usize {
        self.accesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accesses.is_empty()
    }
}

fn parse_line(line: &str) -> std::result::Result<Access, String> {
    let mut parts = line.split_whitespace();

    let kind: AccessKind = parts
        .next()
        .ok_or_else(|| "missing access kind".to_string())?
        .parse()?;

    let operand = parts
        .next()
        .ok_or_else(|| "missing address".to_string())?;
    let addr_str = operand.split(',').next().unwrap_or(operand);
    let addr_str = addr_str.trim_start_matches("0x");

    let addr = u64::from_str_radix(addr_str, 16)
        .map_err(|e| format!("bad address {:?}: {}", addr_str, e))?;

    Ok(Access::new(kind, PageId::from_address(addr)))
}
