//! Per-event length cap for terminal log output.
//!
//! Registry artifacts embed whole component sources, and a debug event that
//! formats one can run to many kilobytes. The fmt layer writes through
//! [`TruncatingStderr`], which buffers each event and clamps it on drop:
//!
//! ```text
//! tracing::debug!("{item:?}")
//!        |
//!        v
//!   fmt::layer().with_writer(TruncatingStderr::new(500))
//!        |
//!        \-- EventBuffer ──drop──> clamp() ──> stderr
//! ```

use std::borrow::Cow;
use std::io::{self, Write};

use tracing_subscriber::fmt::MakeWriter;

/// `MakeWriter` handing out one [`EventBuffer`] per event.
#[derive(Clone, Debug)]
pub struct TruncatingStderr {
    max_bytes: usize,
}

impl TruncatingStderr {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }
}

impl<'a> MakeWriter<'a> for TruncatingStderr {
    type Writer = EventBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        EventBuffer {
            buf: Vec::with_capacity(256),
            max_bytes: self.max_bytes,
            sink: Sink::Stderr,
        }
    }
}

enum Sink {
    Stderr,
    #[cfg(test)]
    Capture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>),
}

/// Accumulates one event; emits it, clamped, when dropped.
pub struct EventBuffer {
    buf: Vec<u8>,
    max_bytes: usize,
    sink: Sink,
}

impl Write for EventBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for EventBuffer {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let out = clamp(&self.buf, self.max_bytes);
        match &self.sink {
            Sink::Stderr => {
                let _ = io::stderr().write_all(&out);
            }
            #[cfg(test)]
            Sink::Capture(captured) => {
                if let Ok(mut c) = captured.lock() {
                    c.extend_from_slice(&out);
                }
            }
        }
    }
}

/// Cap `event` at `max_bytes`, cutting on a UTF-8 boundary and appending a
/// `...[<total>B total]` marker plus newline.
pub(crate) fn clamp(event: &[u8], max_bytes: usize) -> Cow<'_, [u8]> {
    if event.len() <= max_bytes {
        return Cow::Borrowed(event);
    }

    let head = &event[..floor_char_boundary(event, max_bytes)];
    let head = head.strip_suffix(b"\n").unwrap_or(head);
    let marker = format!("...[{}B total]\n", event.len());

    let mut out = Vec::with_capacity(head.len() + marker.len());
    out.extend_from_slice(head);
    out.extend_from_slice(marker.as_bytes());
    Cow::Owned(out)
}

/// Largest index `<= pos` that does not split a UTF-8 sequence.
fn floor_char_boundary(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos.min(bytes.len());
    while i > 0 && i < bytes.len() && bytes[i] & 0xC0 == 0x80 {
        i -= 1;
    }
    i
}
