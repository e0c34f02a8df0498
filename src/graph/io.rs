//! Edge-list files.
//!
//! Text: the edge count on the first line, then one `a b w` line per edge.
//! Binary: the edge count as `u64` little-endian, then the raw `Edge` records
//! (12 bytes each, host byte order).

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::types::Edge;
use crate::MstError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Binary,
}

impl Format {
    /// `.bin` is binary, anything else text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("bin") => Format::Binary,
            _ => Format::Text,
        }
    }
}

pub fn write_text<W: Write>(mut out: W, edges: &[Edge]) -> Result<(), MstError> {
    writeln!(out, "{}", edges.len())?;
    for e in edges {
        writeln!(out, "{} {} {}", e.a, e.b, e.w)?;
    }
    out.flush()?;
    Ok(())
}

fn parse_field<T: std::str::FromStr>(
    field: Option<&str>,
    name: &str,
    line: usize,
) -> Result<T, MstError> {
    let field = field.ok_or_else(|| MstError::Parse {
        line,
        message: format!("missing {}", name),
    })?;
    field.parse().map_err(|_| MstError::Parse {
        line,
        message: format!("invalid {} {:?}", name, field),
    })
}

pub fn read_text<R: BufRead>(input: R) -> Result<Vec<Edge>, MstError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| l.as_ref().map_or(true, |s| !s.trim().is_empty()));

    let Some((line_no, header)) = lines.next() else {
        return Err(MstError::Parse {
            line: 1,
            message: "empty input".to_string(),
        });
    };
    let count: usize = parse_field(Some(header?.trim()), "edge count", line_no)?;

    let mut edges = Vec::with_capacity(count.min(1 << 24));
    let mut last_line = line_no;
    for (line_no, line) in lines.by_ref().take(count) {
        let line = line?;
        let mut fields = line.split_whitespace();
        let a = parse_field(fields.next(), "vertex", line_no)?;
        let b = parse_field(fields.next(), "vertex", line_no)?;
        let w = parse_field(fields.next(), "weight", line_no)?;
        if fields.next().is_some() {
            return Err(MstError::Parse {
                line: line_no,
                message: "trailing fields".to_string(),
            });
        }
        edges.push(Edge::new(a, b, w));
        last_line = line_no;
    }

    if edges.len() < count {
        return Err(MstError::Parse {
            line: last_line + 1,
            message: format!("expected {} edges, found {}", count, edges.len()),
        });
    }
    Ok(edges)
}

pub fn write_binary<W: Write>(mut out: W, edges: &[Edge]) -> Result<(), MstError> {
    out.write_all(&(edges.len() as u64).to_le_bytes())?;
    out.write_all(bytemuck::cast_slice(edges))?;
    out.flush()?;
    Ok(())
}

pub fn read_binary<R: Read>(mut input: R) -> Result<Vec<Edge>, MstError> {
    let mut header = [0u8; 8];
    input.read_exact(&mut header)?;
    let count = u64::from_le_bytes(header) as usize;

    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let expected = count.saturating_mul(std::mem::size_of::<Edge>());
    if bytes.len() != expected {
        return Err(MstError::Parse {
            line: 0,
            message: format!(
                "binary edge list: header says {} edges ({} bytes), body has {} bytes",
                count,
                expected,
                bytes.len()
            ),
        });
    }

    let mut edges = vec![Edge::default(); count];
    bytemuck::cast_slice_mut::<Edge, u8>(&mut edges).copy_from_slice(&bytes);
    Ok(edges)
}

/// Read an edge list, choosing the format from the extension.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Edge>, MstError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    match Format::from_path(path) {
        Format::Text => read_text(BufReader::new(file)),
        Format::Binary => read_binary(BufReader::new(file)),
    }
}

/// Write an edge list, choosing the format from the extension.
pub fn save(path: impl AsRef<Path>, edges: &[Edge]) -> Result<(), MstError> {
    let path = path.as_ref();
    let file = BufWriter::new(File::create(path)?);
    match Format::from_path(path) {
        Format::Text => write_text(file, edges),
        Format::Binary => write_binary(file, edges),
    }
}
