//! Shared output sink
//!
//! The store's `Product added.` notices and the console report write to the
//! same stream. `SharedOutput` is a cloneable `Write` handle over one
//! underlying writer so both can be pointed at stdout in the binary, or at a
//! single in-memory buffer in tests.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Cloneable, single-threaded handle to one writer
#[derive(Clone)]
pub struct SharedOutput {
    inner: Rc<RefCell<dyn Write>>,
}

impl SharedOutput {
    pub fn new(writer: impl Write + 'static) -> Self {
        SharedOutput {
            inner: Rc::new(RefCell::new(writer)),
        }
    }

    /// Handle over the process's standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Wrap a writer the caller keeps a handle to
    ///
    /// Lets tests read back what was written through the clones.
    pub fn from_shared(inner: Rc<RefCell<dyn Write>>) -> Self {
        SharedOutput { inner }
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.borrow_mut().flush()
    }
}

impl std::fmt::Debug for SharedOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedOutput").finish_non_exhaustive()
    }
}
