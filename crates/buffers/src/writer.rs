//! Binary buffer writer with auto-growing capacity.

/// A binary buffer writer that grows automatically as needed.
///
/// Multi-byte values are written little-endian.
///
/// # Example
///
/// ```
/// use soia_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x03, 0x02]);
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    pub bytes: Vec<u8>,
    /// Position where the last flush happened.
    pub start: usize,
    /// Current cursor position.
    pub pos: usize,
    /// Allocation size when the buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with the default allocation size (4KB).
    pub fn new() -> Self {
        Self::with_alloc_size(4 * 1024)
    }

    /// Creates a new writer with a custom allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        let bytes = vec![0u8; alloc_size];
        Self {
            bytes,
            start: 0,
            pos: 0,
            alloc_size,
        }
    }

    /// Ensures the buffer has at least `capacity` bytes available.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.bytes.len() - self.pos;
        if remaining < capacity {
            let written = self.pos - self.start;
            let required = written + capacity;
            let new_size = if required <= self.alloc_size {
                self.alloc_size
            } else {
                required * 2
            };
            self.grow(new_size);
        }
    }

    fn grow(&mut self, new_size: usize) {
        let start = self.start;
        let pos = self.pos;
        let mut new_buf = vec![0u8; new_size];
        new_buf[..pos - start].copy_from_slice(&self.bytes[start..pos]);
        self.bytes = new_buf;
        self.pos = pos - start;
        self.start = 0;
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.pos - self.start
    }

    /// True when nothing was written since the last flush.
    pub fn is_empty(&self) -> bool {
        self.pos == self.start
    }

    /// Returns the written data and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.bytes[self.start..self.pos].to_vec();
        self.start = self.pos;
        result
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.bytes[self.pos] = val;
        self.pos += 1;
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.u8(val as u8);
    }

    /// Writes an unsigned 16-bit integer.
    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.ensure_capacity(2);
        self.bytes[self.pos..self.pos + 2].copy_from_slice(&val.to_le_bytes());
        self.pos += 2;
    }

    /// Writes a signed 16-bit integer.
    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.u16(val as u16);
    }

    /// Writes an unsigned 32-bit integer.
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.ensure_capacity(4);
        self.bytes[self.pos..self.pos + 4].copy_from_slice(&val.to_le_bytes());
        self.pos += 4;
    }

    /// Writes a signed 32-bit integer.
    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.u32(val as u32);
    }

    /// Writes an unsigned 64-bit integer.
    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.ensure_capacity(8);
        self.bytes[self.pos..self.pos + 8].copy_from_slice(&val.to_le_bytes());
        self.pos += 8;
    }

    /// Writes a signed 64-bit integer.
    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.u64(val as u64);
    }

    /// Writes a 32-bit floating point number.
    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.u32(val.to_bits());
    }

    /// Writes a 64-bit floating point number.
    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.u64(val.to_bits());
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        let length = buf.len();
        self.ensure_capacity(length);
        self.bytes[self.pos..self.pos + length].copy_from_slice(buf);
        self.pos += length;
    }

    /// Writes a UTF-8 string. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        self.buf(s.as_bytes());
        s.len()
    }
}
