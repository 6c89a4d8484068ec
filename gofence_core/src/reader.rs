use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

/// A buffered reader that hands out whole lines and can look at the next
/// byte without consuming it.
///
/// The rewriter needs exactly one byte of lookahead to decide whether a blank
/// line ends a code block, so this wraps a [`BufReader`] and exposes the
/// buffer's first byte through [`PeekReader::peek_byte`].
#[derive(Debug)]
pub struct PeekReader<R> {
	inner: BufReader<R>,
}

impl<R: Read> PeekReader<R> {
	pub fn new(inner: R) -> Self {
		Self {
			inner: BufReader::new(inner),
		}
	}

	pub fn with_capacity(capacity: usize, inner: R) -> Self {
		Self {
			inner: BufReader::with_capacity(capacity, inner),
		}
	}

	/// Append the next line, including its trailing `\n` when present, to
	/// `buf`. Returns the number of bytes read; `0` means end of stream.
	pub fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
		self.inner.read_until(b'\n', buf)
	}

	/// Return the next byte of the stream without consuming it, or `None` at
	/// end of stream.
	pub fn peek_byte(&mut self) -> io::Result<Option<u8>> {
		loop {
			match self.inner.fill_buf() {
				Ok(buf) => return Ok(buf.first().copied()),
				Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
				Err(e) => return Err(e),
			}
		}
	}
}
