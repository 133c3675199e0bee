//! In-memory output, handy for tests and for inspecting what was logged

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A shared, growable byte buffer; clones see the same contents
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let memory = MemoryWriter::new();
        let mut writer = memory.clone();
        writer.write_all(b"hello\nworld\n").unwrap();

        assert_eq!(memory.lines(), vec!["hello", "world"]);
        memory.clear();
        assert!(memory.is_empty());
    }
}
