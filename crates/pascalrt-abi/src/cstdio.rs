//! Handles over C `FILE*` streams.
//!
//! The runtime exports a symbol named `write`, which replaces write(2) for the
//! whole linked program. Rust's `std::io::stdout` and `std::fs::File` reach
//! the kernel through that symbol, so the runtime never uses them: every byte
//! goes through C stdio, whose internals call the kernel directly. Sharing C's
//! `stdout` buffer also keeps runtime output ordered with anything the program
//! prints through `printf`, and the C exit path flushes it.

use std::ffi::{CStr, CString, c_int};
use std::io;
use std::path::Path;

use libc::FILE;

#[cfg(all(unix, not(target_vendor = "apple")))]
mod streams {
    use libc::FILE;

    unsafe extern "C" {
        static mut stdin: *mut FILE;
        static mut stdout: *mut FILE;
        static mut stderr: *mut FILE;
    }

    // SAFETY (all three): libc initializes the standard stream pointers
    // before any user code runs; reading the pointer value creates no reference.
    pub(super) fn stdin_ptr() -> *mut FILE {
        unsafe { stdin }
    }

    pub(super) fn stdout_ptr() -> *mut FILE {
        unsafe { stdout }
    }

    pub(super) fn stderr_ptr() -> *mut FILE {
        unsafe { stderr }
    }
}

#[cfg(target_vendor = "apple")]
mod streams {
    use libc::FILE;

    unsafe extern "C" {
        static mut __stdinp: *mut FILE;
        static mut __stdoutp: *mut FILE;
        static mut __stderrp: *mut FILE;
    }

    pub(super) fn stdin_ptr() -> *mut FILE {
        unsafe { __stdinp }
    }

    pub(super) fn stdout_ptr() -> *mut FILE {
        unsafe { __stdoutp }
    }

    pub(super) fn stderr_ptr() -> *mut FILE {
        unsafe { __stderrp }
    }
}

#[cfg(windows)]
mod streams {
    use std::ffi::c_uint;

    use libc::FILE;

    unsafe extern "C" {
        fn __acrt_iob_func(index: c_uint) -> *mut FILE;
    }

    pub(super) fn stdin_ptr() -> *mut FILE {
        unsafe { __acrt_iob_func(0) }
    }

    pub(super) fn stdout_ptr() -> *mut FILE {
        unsafe { __acrt_iob_func(1) }
    }

    pub(super) fn stderr_ptr() -> *mut FILE {
        unsafe { __acrt_iob_func(2) }
    }
}

/// A C stdio stream. Standard streams are borrowed; streams opened here are
/// closed on drop.
pub struct CStream {
    file: *mut FILE,
    owned: bool,
}

// SAFETY: C stdio locks each FILE internally; the handle carries no
// thread-affine state.
unsafe impl Send for CStream {}

impl CStream {
    #[must_use]
    pub fn stdin() -> Self {
        Self {
            file: streams::stdin_ptr(),
            owned: false,
        }
    }

    #[must_use]
    pub fn stdout() -> Self {
        Self {
            file: streams::stdout_ptr(),
            owned: false,
        }
    }

    #[must_use]
    pub fn stderr() -> Self {
        Self {
            file: streams::stderr_ptr(),
            owned: false,
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open_append(path: &Path) -> io::Result<Self> {
        Self::open(path, c"a")
    }

    #[cfg(test)]
    pub(crate) fn open_read(path: &Path) -> io::Result<Self> {
        Self::open(path, c"r")
    }

    fn open(path: &Path, mode: &CStr) -> io::Result<Self> {
        let c_path = CString::new(path.as_os_str().as_encoded_bytes())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains NUL"))?;
        // SAFETY: both arguments are valid NUL-terminated strings.
        let file = unsafe { libc::fopen(c_path.as_ptr(), mode.as_ptr()) };
        if file.is_null() {
            return Err(io::Error::last_os_error());
        }
        Ok(Self { file, owned: true })
    }

    /// Write `bytes`, ignoring failures.
    pub fn put(&mut self, bytes: &[u8]) {
        let _ = io::Write::write_all(self, bytes);
    }

    /// Read one byte; `None` at end of input or on error.
    pub fn getc(&mut self) -> Option<u8> {
        if self.file.is_null() {
            return None;
        }
        // SAFETY: `file` is a live stream.
        let c = unsafe { libc::fgetc(self.file) };
        u8::try_from(c).ok()
    }

    /// Push `byte` back so the next [`CStream::getc`] returns it.
    pub fn ungetc(&mut self, byte: u8) {
        if self.file.is_null() {
            return;
        }
        // SAFETY: `file` is a live stream; one byte of pushback is guaranteed.
        unsafe { libc::ungetc(c_int::from(byte), self.file) };
    }
}

impl io::Write for CStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.file.is_null() {
            return Err(io::Error::other("stream unavailable"));
        }
        // SAFETY: `buf` is valid for `buf.len()` bytes and `file` is a live stream.
        let n = unsafe { libc::fwrite(buf.as_ptr().cast(), 1, buf.len(), self.file) };
        if n == 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(n)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.file.is_null() {
            return Ok(());
        }
        // SAFETY: `file` is a live stream.
        if unsafe { libc::fflush(self.file) } == 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }
}

impl Iterator for CStream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.getc()
    }
}

impl Drop for CStream {
    fn drop(&mut self) {
        if self.owned && !self.file.is_null() {
            // SAFETY: the stream was opened by `open_append` and is closed once.
            unsafe { libc::fclose(self.file) };
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("pascalrt-cstdio-{}-{name}", std::process::id()))
    }

    #[test]
    fn standard_streams_are_available() {
        assert!(!CStream::stdout().file.is_null());
        assert!(!CStream::stderr().file.is_null());
        assert!(!CStream::stdin().file.is_null());
    }

    #[test]
    fn appended_file_receives_bytes_in_order() {
        let path = scratch_path("append");
        let _ = std::fs::remove_file(&path);
        {
            let mut stream = CStream::open_append(&path).unwrap();
            stream.write_all(b"first ").unwrap();
            stream.put(b"second");
            stream.flush().unwrap();
        }
        {
            let mut stream = CStream::open_append(&path).unwrap();
            stream.put(b"\nthird");
        }
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first second\nthird");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn reading_back_a_file_with_pushback() {
        let path = scratch_path("read");
        std::fs::write(&path, b"ab").unwrap();
        let mut stream = CStream::open_read(&path).unwrap();

        assert_eq!(stream.getc(), Some(b'a'));
        stream.ungetc(b'a');
        assert_eq!((&mut stream).collect::<Vec<u8>>(), b"ab");
        assert_eq!(stream.getc(), None);
        drop(stream);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn open_rejects_missing_directory() {
        let path = std::env::temp_dir()
            .join("pascalrt-no-such-dir")
            .join("trace.jsonl");
        assert!(CStream::open_append(&path).is_err());
    }
}
