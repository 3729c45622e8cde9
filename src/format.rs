//! Formatter — canonical text for values and comma-joined rows.
//!
//! Rendering always goes through [`fmt::Write`]. The owned entry points
//! ([`concat`], `Value::to_string`) build a `String`; the bounded ones
//! ([`format_into`], [`concat_into`]) write into a caller buffer through
//! [`BoundedWriter`] and never touch a byte past its end.
//!
//! ```text
//! concat_len(["a","bb","ccc"], ',') == 8
//! concat_into(.., &mut [u8; 8]) → "a,bb,ccc"  written 8, required 8
//! concat_into(.., &mut [u8; 7]) → "a,bb,cc"   written 7, required 8 (truncated)
//! ```

use std::fmt::{self, Write};

use crate::model::Value;

pub use crate::config::DEFAULT_SEPARATOR;

/// Outcome of a bounded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Written {
    /// Bytes actually stored in the buffer.
    pub written: usize,
    /// Bytes the full rendering needs.
    pub required: usize,
}

impl Written {
    pub fn is_truncated(&self) -> bool {
        self.written < self.required
    }
}

/// `fmt::Write` sink over a fixed byte buffer.
///
/// Once a piece does not fit, the longest prefix ending on a char boundary
/// is stored and everything after it is only counted.
pub struct BoundedWriter<'b> {
    buf: &'b mut [u8],
    written: usize,
    required: usize,
    truncated: bool,
}

impl<'b> BoundedWriter<'b> {
    pub fn new(buf: &'b mut [u8]) -> Self {
        Self { buf, written: 0, required: 0, truncated: false }
    }

    pub fn finish(self) -> Written {
        if self.truncated {
            tracing::debug!(
                written = self.written,
                required = self.required,
                "bounded value write truncated"
            );
        }
        Written { written: self.written, required: self.required }
    }
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.required += s.len();
        if self.truncated {
            return Ok(());
        }
        let room = self.buf.len() - self.written;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.written..self.written + take].copy_from_slice(&s.as_bytes()[..take]);
        self.written += take;
        self.truncated = take < s.len();
        Ok(())
    }
}

/// Sink that only measures.
#[derive(Default)]
struct LenCounter(usize);

impl Write for LenCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

fn write_joined<W: Write>(out: &mut W, values: &[Value<'_>], sep: char) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.write_char(sep)?;
        }
        write!(out, "{v}")?;
    }
    Ok(())
}

/// Render `value` into `buf`, truncating if it does not fit.
pub fn format_into(value: &Value<'_>, buf: &mut [u8]) -> Written {
    let mut out = BoundedWriter::new(buf);
    // Neither sink ever reports an error.
    let _ = write!(out, "{value}");
    out.finish()
}

/// Exact byte length of `values` rendered and joined by `sep`.
pub fn concat_len(values: &[Value<'_>], sep: char) -> usize {
    let mut counter = LenCounter::default();
    let _ = write_joined(&mut counter, values, sep);
    counter.0
}

/// Join `values` by `sep` into `buf`. A buffer of [`concat_len`] bytes
/// always holds the full result.
pub fn concat_into(values: &[Value<'_>], sep: char, buf: &mut [u8]) -> Written {
    let mut out = BoundedWriter::new(buf);
    let _ = write_joined(&mut out, values, sep);
    out.finish()
}

/// Join `values` by `sep` into a new string.
pub fn concat(values: &[Value<'_>], sep: char) -> String {
    let mut out = String::with_capacity(concat_len(values, sep));
    let _ = write_joined(&mut out, values, sep);
    out
}
