//! Streaming parser and typed navigation surface for the Named Binary Tag
//! (NBT) format.
//!
//! Bytes go in through [`parse`], [`parse_explicit`], [`parse_auto`],
//! [`parse_bytes`] or [`parse_file`]; a [`Node`] tree comes out. Typed
//! accessors on `Node` (`as_int`, `as_compound`, ...) and [`ListView`]
//! narrow that tree down to concrete Rust types without cloning.

mod codec;
mod framing;
mod node;
mod parser;
mod reader;
mod tag;
mod views;

pub mod error;

pub use error::{Error, ErrorKind, Result};
pub use node::{Compound, List, Node};
pub use tag::Tag;
pub use views::{
    ByteArrayMarker, ByteMarker, CompoundMarker, DoubleMarker, FloatMarker, IntArrayMarker,
    IntMarker, ListElement, ListMarker, ListView, LongArrayMarker, LongMarker, ShortMarker,
    StringMarker,
};

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Parses a document whose body begins directly with an implicit root
/// compound: no leading tag byte, no root name. This is the framing Anvil
/// region-file chunks use.
pub fn parse<R: Read>(source: R) -> Result<Compound> {
    parser::parse_implicit(source)
}

/// Parses a document that begins with an explicit tag byte and root name,
/// as written to disk by `Level.dat` and similar single-document files.
/// Returns the root's name alongside its value.
pub fn parse_explicit<R: Read>(source: R) -> Result<(String, Node)> {
    parser::parse_explicit(source)
}

/// Detects and transparently strips gzip or zlib framing (by sniffing the
/// leading magic bytes) before parsing an explicit-root document. Falls
/// back to treating the stream as raw NBT if neither magic matches.
pub fn parse_auto<R: Read>(source: R) -> Result<(String, Node)> {
    let decoded = framing::detect_and_decode(source);
    parse_explicit(decoded)
}

/// Parses an explicit-root document from an in-memory byte slice, with
/// the same transparent decompression `parse_auto` applies.
pub fn parse_bytes(bytes: &[u8]) -> Result<(String, Node)> {
    parse_auto(Cursor::new(bytes))
}

/// Parses an explicit-root document from a file path, with the same
/// transparent decompression `parse_auto` applies.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<(String, Node)> {
    let file = File::open(path)?;
    parse_auto(BufReader::new(file))
}
