use std::io::Read;

use crate::codec;
use crate::error::Error;
use crate::tag::Tag;

/// Thin wrapper over a byte source that knows how to pull the primitive
/// wire shapes NBT is built from. All multi-byte reads go through
/// [`crate::codec`] rather than a host-endian cast.
pub(crate) struct TagReader<R> {
    inner: R,
}

impl<R: Read> TagReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        TagReader { inner }
    }

    fn fill(&mut self, buf: &mut [u8], context: &str) -> Result<(), Error> {
        self.inner
            .read_exact(buf)
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::UnexpectedEof => Error::truncated(context.to_string()),
                _ => Error::from(err),
            })
    }

    pub(crate) fn read_u8(&mut self, context: &str) -> Result<u8, Error> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf, context)?;
        Ok(buf[0])
    }

    pub(crate) fn read_i8(&mut self, context: &str) -> Result<i8, Error> {
        Ok(self.read_u8(context)? as i8)
    }

    pub(crate) fn read_i16(&mut self, context: &str) -> Result<i16, Error> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf, context)?;
        Ok(codec::read_i16(&buf))
    }

    /// Reads an unsigned 16-bit big-endian value. Used for the String/name
    /// length prefix, which the wire format declares as `u16` (unlike the
    /// `i32`-length arrays and lists) — unlike `read_i16`, this never turns
    /// a length with the high bit set into a negative number.
    pub(crate) fn read_u16(&mut self, context: &str) -> Result<u16, Error> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf, context)?;
        Ok(codec::read_u16(&buf))
    }

    pub(crate) fn read_i32(&mut self, context: &str) -> Result<i32, Error> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf, context)?;
        Ok(codec::read_i32(&buf))
    }

    pub(crate) fn read_i64(&mut self, context: &str) -> Result<i64, Error> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf, context)?;
        Ok(codec::read_i64(&buf))
    }

    pub(crate) fn read_f32(&mut self, context: &str) -> Result<f32, Error> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf, context)?;
        Ok(codec::read_f32(&buf))
    }

    pub(crate) fn read_f64(&mut self, context: &str) -> Result<f64, Error> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf, context)?;
        Ok(codec::read_f64(&buf))
    }

    pub(crate) fn read_tag(&mut self, context: &str) -> Result<Tag, Error> {
        let byte = self.read_u8(context)?;
        Tag::from_byte(byte)
    }

    /// Reads an NBT string: an unsigned 16-bit length prefix followed by
    /// that many bytes of modified-UTF-8-as-UTF-8 (this crate treats it as
    /// strict UTF-8, rejecting the CESU-8 6-byte surrogate encoding some
    /// NBT producers emit).
    pub(crate) fn read_name(&mut self, context: &str) -> Result<String, Error> {
        let len = self.read_u16(context)? as usize;
        let mut buf = vec![0u8; len];
        self.fill(&mut buf, context)?;
        String::from_utf8(buf).map_err(|_| Error::corrupt(format!("{context}: invalid UTF-8")))
    }

    /// Reads a length-prefixed run of raw bytes. A negative length prefix
    /// clamps to zero rather than erroring.
    pub(crate) fn read_byte_array(&mut self, context: &str) -> Result<Vec<i8>, Error> {
        let len = self.read_i32(context)?;
        let len = len.max(0) as usize;
        let mut buf = vec![0u8; len];
        self.fill(&mut buf, context)?;
        Ok(buf.into_iter().map(|b| b as i8).collect())
    }

    pub(crate) fn read_int_array(&mut self, context: &str) -> Result<Vec<i32>, Error> {
        let len = self.read_i32(context)?;
        let len = len.max(0) as usize;
        let mut values = Vec::with_capacity(len);
        for _ in 0..len {
            values.push(self.read_i32(context)?);
        }
        Ok(values)
    }

    pub(crate) fn read_long_array(&mut self, context: &str) -> Result<Vec<i64>, Error> {
        let len = self.read_i32(context)?;
        let len = len.max(0) as usize;
        let mut values = Vec::with_capacity(len);
        for _ in 0..len {
            values.push(self.read_i64(context)?);
        }
        Ok(values)
    }

    /// Reads a `List` header: element tag plus declared length, clamping a
    /// negative length to zero.
    pub(crate) fn read_list_header(&mut self, context: &str) -> Result<(Tag, i32), Error> {
        let element_tag = self.read_tag(context)?;
        let len = self.read_i32(context)?;
        Ok((element_tag, len.max(0)))
    }
}
