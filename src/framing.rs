use std::io::{BufRead, BufReader, Read};

use flate2::bufread::{GzDecoder, ZlibDecoder};

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];
const ZLIB_MAGIC_BYTE0: u8 = 0x78;
/// Second zlib magic byte for the common compression levels (RFC 1950 §2.2).
const ZLIB_MAGIC_BYTE1: [u8; 3] = [0x01, 0x9C, 0xDA];

/// Peeks the first bytes of `source` without consuming them and wraps it
/// in the appropriate decompressor, or returns it unwrapped if the stream
/// looks like raw NBT.
pub(crate) fn detect_and_decode<R: Read>(source: R) -> Box<dyn Read> {
    let mut buffered = BufReader::new(source);
    let peeked = match buffered.fill_buf() {
        Ok(bytes) => bytes,
        Err(_) => return Box::new(buffered),
    };

    if peeked.len() >= 2 && peeked[0] == GZIP_MAGIC[0] && peeked[1] == GZIP_MAGIC[1] {
        return Box::new(GzDecoder::new(buffered));
    }

    if peeked.len() >= 2 && peeked[0] == ZLIB_MAGIC_BYTE0 && ZLIB_MAGIC_BYTE1.contains(&peeked[1]) {
        return Box::new(ZlibDecoder::new(buffered));
    }

    Box::new(buffered)
}
