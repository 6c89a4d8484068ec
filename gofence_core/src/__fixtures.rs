use std::io;
use std::io::Read;

/// Typical godocdown output for a package with one example.
pub const GODOCDOWN_README: &str = "\
# mathx
--
    import \"example.com/mathx\"

Package mathx provides small numeric helpers.

## Usage

#### func  Clamp

```go
func Clamp(v, lo, hi int) int
```
Clamp limits v to the range [lo, hi].

Example:

    v := mathx.Clamp(12, 0, 10)

    fmt.Println(v) // 10

It never panics.
";

pub const GODOCDOWN_README_FENCED: &str = "\
# mathx
--
```go
import \"example.com/mathx\"
```

Package mathx provides small numeric helpers.

## Usage

#### func  Clamp

```go
func Clamp(v, lo, hi int) int
```
Clamp limits v to the range [lo, hi].

Example:

```go
v := mathx.Clamp(12, 0, 10)

fmt.Println(v) // 10
```

It never panics.
";

/// Yields `data` and then fails every read after it.
pub struct FailingReader {
	data: &'static [u8],
}

impl FailingReader {
	pub fn new(data: &'static [u8]) -> Self {
		Self { data }
	}
}

impl Read for FailingReader {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		if self.data.is_empty() {
			return Err(io::Error::other("pipe exploded"));
		}

		let len = buf.len().min(self.data.len());
		buf[..len].copy_from_slice(&self.data[..len]);
		self.data = &self.data[len..];

		Ok(len)
	}
}

/// Returns `Interrupted` before every chunk it hands out.
pub struct InterruptingReader {
	chunks: Vec<&'static [u8]>,
	interrupt_next: bool,
}

impl InterruptingReader {
	pub fn new(chunks: Vec<&'static [u8]>) -> Self {
		Self {
			chunks,
			interrupt_next: true,
		}
	}
}

impl Read for InterruptingReader {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		if self.interrupt_next {
			self.interrupt_next = false;
			return Err(io::Error::from(io::ErrorKind::Interrupted));
		}

		self.interrupt_next = true;
		if self.chunks.is_empty() {
			return Ok(0);
		}

		let chunk = self.chunks.remove(0);
		let len = buf.len().min(chunk.len());
		buf[..len].copy_from_slice(&chunk[..len]);
		if len < chunk.len() {
			self.chunks.insert(0, &chunk[len..]);
		}

		Ok(len)
	}
}
