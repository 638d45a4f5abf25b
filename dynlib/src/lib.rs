use std::ffi::{CStr, c_void};
use std::mem::transmute_copy;
use std::ptr::null_mut;
use std::{error, fmt};

#[cfg(unix)]
mod posix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use posix::DynLib;
#[cfg(windows)]
pub use self::windows::DynLib;

#[derive(Debug)]
pub enum Error {
    LibraryNotFound(String),
    SymbolNotFound(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LibraryNotFound(msg) => {
                f.write_fmt(format_args!("could not open library: {msg}"))
            }
            Self::SymbolNotFound(msg) => f.write_fmt(format_args!("could not find symbol: {msg}")),
        }
    }
}

impl DynLib {
    pub fn lookup<F: Sized>(&self, name: &CStr) -> Result<F, Error> {
        let addr = self.lookup_ptr(name)?;
        Ok(unsafe { transmute_copy(&addr) })
    }

    /// Non-fatal variant of [`DynLib::lookup`]; a missing symbol is reported
    /// once and comes back as a null pointer for the caller to probe.
    pub fn lookup_checked(&self, name: &CStr) -> *mut c_void {
        match self.lookup_ptr(name) {
            Ok(addr) => addr,
            Err(err) => {
                log::error!("could not resolve {}: {err}", name.to_string_lossy());
                null_mut()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_library() {
        let err = DynLib::load(c"libnothing-to-see-here.so").unwrap_err();
        let Error::LibraryNotFound(msg) = err else {
            panic!("unexpected error: {err}");
        };
        assert!(!msg.is_empty());
    }
}
