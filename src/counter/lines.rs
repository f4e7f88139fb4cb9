use std::io::Read;

/// Outcome of counting the lines of a text stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountResult {
    Lines(usize),
    /// Content is not valid UTF-8 (binary file or another encoding).
    InvalidEncoding,
}

/// Counts lines using universal-newline rules.
///
/// `\n`, `\r\n` and a lone `\r` each end a line. A trailing segment with no
/// terminator still counts as a line, so `"a\nb"` has two lines and an empty
/// input has none.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineCounter;

impl LineCounter {
    #[must_use]
    pub fn count(&self, source: &str) -> usize {
        let bytes = source.as_bytes();
        let mut lines = 0;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'\n' => lines += 1,
                b'\r' => {
                    lines += 1;
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                }
                _ => {}
            }
            i += 1;
        }

        if bytes.last().is_some_and(|b| *b != b'\n' && *b != b'\r') {
            lines += 1;
        }

        lines
    }

    /// Decode raw bytes as UTF-8 and count their lines.
    #[must_use]
    pub fn count_bytes(&self, bytes: &[u8]) -> CountResult {
        std::str::from_utf8(bytes).map_or(CountResult::InvalidEncoding, |text| {
            CountResult::Lines(self.count(text))
        })
    }

    /// Read the whole stream, then decode and count it.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: Read>(&self, mut reader: R) -> std::io::Result<CountResult> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(self.count_bytes(&buf))
    }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
