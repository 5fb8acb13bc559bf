//! Auto-growing byte buffer with cursor tracking.

/// An output buffer that grows by doubling and tracks a write cursor.
///
/// The buffer is meant to be owned by an encoder and reused across calls:
/// [`Writer::reset`] rewinds the cursor without releasing capacity, and
/// [`Writer::flush`] copies out the written prefix. Callers that know an
/// upper bound for an upcoming write can reserve it once with
/// [`Writer::ensure_capacity`] and then write through the public `uint8`
/// field without further bounds checks.
///
/// # Example
///
/// ```
/// use turbojson_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(b'[');
/// writer.utf8("1,2,3");
/// writer.u8(b']');
/// assert_eq!(writer.flush(), b"[1,2,3]");
/// ```
pub struct Writer {
    /// The underlying storage. Valid data lives in `uint8[..x]`.
    pub uint8: Vec<u8>,
    /// Current cursor position.
    pub x: usize,
}

const DEFAULT_CAPACITY: usize = 4096;

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a writer with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a writer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: vec![0; capacity.max(1)],
            x: 0,
        }
    }

    /// Rewinds the cursor, keeping the allocated storage for reuse.
    pub fn reset(&mut self) {
        self.x = 0;
    }

    /// Number of bytes written since the last reset.
    pub fn len(&self) -> usize {
        self.x
    }

    /// Returns `true` if nothing has been written since the last reset.
    pub fn is_empty(&self) -> bool {
        self.x == 0
    }

    /// Grows the storage so that at least `size` more bytes fit after the
    /// cursor. Growth is by doubling, so repeated small writes are amortized
    /// O(1).
    pub fn ensure_capacity(&mut self, size: usize) {
        let needed = self.x + size;
        if needed <= self.uint8.len() {
            return;
        }
        let mut capacity = self.uint8.len().max(1);
        while capacity < needed {
            capacity *= 2;
        }
        self.uint8.resize(capacity, 0);
    }

    /// Writes a single byte.
    #[inline]
    pub fn u8(&mut self, byte: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = byte;
        self.x += 1;
    }

    /// Writes two bytes.
    #[inline]
    pub fn u8x2(&mut self, a: u8, b: u8) {
        self.ensure_capacity(2);
        self.uint8[self.x] = a;
        self.uint8[self.x + 1] = b;
        self.x += 2;
    }

    /// Writes a raw byte slice.
    pub fn buf(&mut self, data: &[u8]) {
        self.ensure_capacity(data.len());
        self.uint8[self.x..self.x + data.len()].copy_from_slice(data);
        self.x += data.len();
    }

    /// Writes the UTF-8 bytes of a string.
    pub fn utf8(&mut self, s: &str) {
        self.buf(s.as_bytes());
    }

    /// Returns the written prefix without consuming the buffer.
    pub fn written(&self) -> &[u8] {
        &self.uint8[..self.x]
    }

    /// Copies out the written bytes and rewinds the cursor.
    pub fn flush(&mut self) -> Vec<u8> {
        let out = self.uint8[..self.x].to_vec();
        self.x = 0;
        out
    }
}
