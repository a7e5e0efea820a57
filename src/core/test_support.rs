//! In-memory sink shared by the unit tests

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable sink whose clones all append to one buffer
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
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
    fn test_clones_share_contents() {
        let buffer = SharedBuffer::default();
        let mut writer = buffer.clone();
        writer.write_all(b"one\n").unwrap();
        writer.clone().write_all(b"two\n").unwrap();
        assert_eq!(buffer.contents(), "one\ntwo\n");
    }
}
