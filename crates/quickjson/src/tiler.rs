//! Append-only JSON output buffer.
//!
//! `Tiler` is the encode-side mirror of the [`Tokenizer`](crate::tokenizer::Tokenizer):
//! instead of consuming bytes, encoders append to it through a small set of
//! `put_*` operations. It tracks container nesting itself, so callers never
//! hand-write commas or colons — `begin_object`/`put_key`/`end_object` and
//! `begin_array`/`end_array` alone produce valid separators.

enum Frame {
    Array { first: bool },
    Object { first: bool, expect_value: bool },
}

pub struct Tiler {
    buf: Vec<u8>,
    frames: Vec<Frame>,
}

impl Default for Tiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Tiler {
    #[must_use]
    pub fn new() -> Self {
        // 8 KiB covers a typical record without reallocating; `marshal`
        // reuses this buffer across calls so the cost is amortized once.
        Self::with_capacity(8192)
    }

    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: Vec::with_capacity(cap),
            frames: Vec::new(),
        }
    }

    /// Empty the buffer and drop any in-progress container state, for reuse
    /// across repeated `marshal` calls.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.frames.clear();
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn before_value(&mut self) {
        match self.frames.last_mut() {
            Some(Frame::Array { first }) => {
                if !*first {
                    self.buf.push(b',');
                }
                *first = false;
            }
            Some(Frame::Object { expect_value, .. }) => {
                debug_assert!(*expect_value, "put_key must precede every object value");
                *expect_value = false;
            }
            None => {}
        }
    }

    pub fn begin_object(&mut self) {
        self.before_value();
        self.buf.push(b'{');
        self.frames.push(Frame::Object {
            first: true,
            expect_value: false,
        });
    }

    pub fn end_object(&mut self) {
        self.frames.pop();
        self.buf.push(b'}');
    }

    pub fn begin_array(&mut self) {
        self.before_value();
        self.buf.push(b'[');
        self.frames.push(Frame::Array { first: true });
    }

    pub fn end_array(&mut self) {
        self.frames.pop();
        self.buf.push(b']');
    }

    /// Emit an object key, including its trailing `:`. Must be called while
    /// the current container is an object, immediately before the matching
    /// `put_*`/`begin_*` call for its value.
    pub fn put_key(&mut self, name: &str) {
        match self.frames.last_mut() {
            Some(Frame::Object { first, expect_value }) => {
                if !*first {
                    self.buf.push(b',');
                }
                *first = false;
                *expect_value = true;
            }
            _ => debug_assert!(false, "put_key called outside an object"),
        }
        self.put_quoted_str(name);
        self.buf.push(b':');
    }

    pub fn put_null(&mut self) {
        self.before_value();
        self.buf.extend_from_slice(b"null");
    }

    pub fn put_bool(&mut self, v: bool) {
        self.before_value();
        self.buf
            .extend_from_slice(if v { b"true" } else { b"false" });
    }

    pub fn put_i64(&mut self, v: i64) {
        self.before_value();
        let mut buf = itoa::Buffer::new();
        self.buf.extend_from_slice(buf.format(v).as_bytes());
    }

    pub fn put_u64(&mut self, v: u64) {
        self.before_value();
        let mut buf = itoa::Buffer::new();
        self.buf.extend_from_slice(buf.format(v).as_bytes());
    }

    pub fn put_f64(&mut self, v: f64) {
        self.before_value();
        if v.is_nan() || v.is_infinite() {
            self.buf.extend_from_slice(b"null");
            return;
        }
        let mut buf = ryu::Buffer::new();
        self.buf.extend_from_slice(buf.format(v).as_bytes());
    }

    pub fn put_f32(&mut self, v: f32) {
        self.before_value();
        if v.is_nan() || v.is_infinite() {
            self.buf.extend_from_slice(b"null");
            return;
        }
        let mut buf = ryu::Buffer::new();
        self.buf.extend_from_slice(buf.format(v).as_bytes());
    }

    /// A quoted JSON string. Used both for string-typed values and, via
    /// [`Tiler::put_key`], for object keys.
    ///
    /// Only `"` and `\` are escaped. Every other byte, including control
    /// characters, passes through unchanged — callers must not depend on
    /// `\uXXXX` escaping. Decode never unescapes (see the crate-level
    /// "string unescaping" note), so over-escaping here would break
    /// `decode(encode(v)) == v`.
    pub fn put_quoted_str(&mut self, s: &str) {
        self.before_value();
        self.buf.push(b'"');
        for c in s.chars() {
            match c {
                '"' => self.buf.extend_from_slice(b"\\\""),
                '\\' => self.buf.extend_from_slice(b"\\\\"),
                c => {
                    let mut tmp = [0u8; 4];
                    self.buf
                        .extend_from_slice(c.encode_utf8(&mut tmp).as_bytes());
                }
            }
        }
        self.buf.push(b'"');
    }

    /// A quoted duration string, formatted the way Go's `time.Duration`
    /// does. Thin sugar over [`Tiler::put_quoted_str`] kept as its own
    /// method so call sites read the same as the other typed `put_*` ops.
    pub fn put_duration(&mut self, nanos: i64) {
        self.put_quoted_str(&crate::decode::JsonDuration::from_nanos(nanos).to_string());
    }

    /// Splice in an already-encoded JSON value verbatim, for
    /// `AsJson`-bridged marshal output.
    pub fn put_raw(&mut self, raw: &[u8]) {
        self.before_value();
        self.buf.extend_from_slice(raw);
    }
}
