use std::io::Read;
use std::io::Write;

use crate::GofenceError;
use crate::GofenceResult;
use crate::reader::PeekReader;

/// Prefix that marks a line as code in godocdown output.
pub const CODE_PREFIX: &str = "    ";

/// Language written after the opening fence.
pub const DEFAULT_LANGUAGE: &str = "go";

const FENCE: &[u8] = b"```";

/// Controls which lines count as code and how the fence is tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOptions {
	/// Leading bytes that mark a code line. Stripped from every line inside a
	/// block.
	pub indent: String,
	/// Info string written after the opening fence.
	pub language: String,
}

impl Default for FenceOptions {
	fn default() -> Self {
		Self {
			indent: CODE_PREFIX.to_string(),
			language: DEFAULT_LANGUAGE.to_string(),
		}
	}
}

impl FenceOptions {
	pub fn new(indent: impl Into<String>, language: impl Into<String>) -> GofenceResult<Self> {
		let options = Self {
			indent: indent.into(),
			language: language.into(),
		};
		options.validate()?;

		Ok(options)
	}

	/// An empty indent would turn every line into code.
	pub fn validate(&self) -> GofenceResult<()> {
		if self.indent.is_empty() {
			return Err(GofenceError::InvalidIndent);
		}

		Ok(())
	}
}

/// Counters collected while rewriting a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
	/// Input lines read, including an unterminated final line.
	pub lines: usize,
	/// Code blocks wrapped in fences.
	pub blocks: usize,
	/// Trailing blank lines dropped after a block.
	pub suppressed: usize,
}

/// Whitespace as seen by the lookahead: the byte read as a Latin-1 code point
/// with the Unicode `White_Space` property. Covers `\t`, `\n`, `\x0B`,
/// `\x0C`, `\r`, space, `0x85` and `0xA0`.
pub fn is_space_byte(byte: u8) -> bool {
	char::from(byte).is_whitespace()
}

/// The line-by-line state machine.
///
/// Feed it each line with [`FenceRewriter::process_line`] and call
/// [`FenceRewriter::finish`] once the input is exhausted.
#[derive(Debug)]
pub struct FenceRewriter<'a> {
	options: &'a FenceOptions,
	inside_block: bool,
	at_line_start: bool,
	summary: RewriteSummary,
}

impl<'a> FenceRewriter<'a> {
	pub fn new(options: &'a FenceOptions) -> Self {
		Self {
			options,
			inside_block: false,
			at_line_start: true,
			summary: RewriteSummary::default(),
		}
	}

	pub fn inside_block(&self) -> bool {
		self.inside_block
	}

	pub fn summary(&self) -> RewriteSummary {
		self.summary
	}

	/// Classify one line and write its rewritten form.
	///
	/// `reader` is the stream the line came from. It is only peeked, never
	/// advanced.
	pub fn process_line<R: Read, W: Write>(
		&mut self,
		line: &[u8],
		reader: &mut PeekReader<R>,
		output: &mut W,
	) -> GofenceResult<()> {
		let prefix = self.options.indent.as_bytes();
		self.summary.lines += 1;

		if !self.inside_block && line.starts_with(prefix) {
			self.write_opening_fence(output)?;
			self.inside_block = true;
			self.summary.blocks += 1;
		}

		let mut content = line;

		if self.inside_block {
			if let Some(rest) = line.strip_prefix(prefix) {
				content = rest;
			} else if line == b"\n" {
				let keep = matches!(reader.peek_byte()?, Some(next) if is_space_byte(next));
				if !keep {
					self.summary.suppressed += 1;
					return Ok(());
				}
			} else {
				output.write_all(FENCE)?;
				output.write_all(b"\n\n")?;
				self.inside_block = false;
				self.at_line_start = true;
			}
		}

		if !content.is_empty() {
			output.write_all(content)?;
			self.at_line_start = content.ends_with(b"\n");
		}

		Ok(())
	}

	/// Close a block left open at end of input. The closing fence gets no
	/// trailing blank line here.
	pub fn finish<W: Write>(&mut self, output: &mut W) -> GofenceResult<()> {
		if !self.inside_block {
			return Ok(());
		}

		if !self.at_line_start {
			output.write_all(b"\n")?;
		}

		output.write_all(FENCE)?;
		output.write_all(b"\n")?;
		self.inside_block = false;
		self.at_line_start = true;

		Ok(())
	}

	fn write_opening_fence<W: Write>(&mut self, output: &mut W) -> GofenceResult<()> {
		output.write_all(FENCE)?;
		output.write_all(self.options.language.as_bytes())?;
		output.write_all(b"\n")?;
		self.at_line_start = true;

		Ok(())
	}
}

/// Stream `input` to `output`, wrapping every indented code block in a fenced
/// block.
///
/// Output is written as each line is classified. Any read or write error other
/// than a clean end of stream aborts the rewrite.
pub fn rewrite<R: Read, W: Write>(
	input: R,
	mut output: W,
	options: &FenceOptions,
) -> GofenceResult<RewriteSummary> {
	options.validate()?;

	let mut reader = PeekReader::new(input);
	let mut rewriter = FenceRewriter::new(options);
	let mut line = Vec::new();

	loop {
		line.clear();
		if reader.read_line(&mut line)? == 0 {
			break;
		}

		rewriter.process_line(&line, &mut reader, &mut output)?;
	}

	rewriter.finish(&mut output)?;
	output.flush()?;

	let summary = rewriter.summary();
	tracing::debug!(
		lines = summary.lines,
		blocks = summary.blocks,
		suppressed = summary.suppressed,
		"rewrite complete"
	);

	Ok(summary)
}

/// Rewrite an in-memory document.
pub fn rewrite_str(input: &str, options: &FenceOptions) -> GofenceResult<String> {
	let mut output = Vec::with_capacity(input.len() + 16);
	rewrite(input.as_bytes(), &mut output, options)?;

	Ok(String::from_utf8_lossy(&output).into_owned())
}
