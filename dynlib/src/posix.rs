use std::ffi::{CStr, c_void};
use std::ptr::NonNull;

use libc::{RTLD_LAZY, dlclose, dlerror, dlopen, dlsym};

use crate::Error;

fn take_dlerror() -> Option<String> {
    let err = unsafe { dlerror() };
    if err.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned())
    }
}

#[derive(Debug)]
pub struct DynLib(NonNull<c_void>);

impl DynLib {
    pub fn load(filename: &CStr) -> Result<Self, Error> {
        let mut handle = unsafe { dlopen(filename.as_ptr(), RTLD_LAZY) };
        if handle.is_null() && !filename.to_bytes().starts_with(b"/") {
            // some loaders refuse bare filenames that only exist in the
            // working directory; retry with an explicit path
            let mut relative = Vec::with_capacity(filename.to_bytes_with_nul().len() + 2);
            relative.extend_from_slice(b"./");
            relative.extend_from_slice(filename.to_bytes_with_nul());
            handle = unsafe { dlopen(relative.as_ptr().cast(), RTLD_LAZY) };
        }
        match NonNull::new(handle) {
            Some(handle) => Ok(Self(handle)),
            None => Err(Error::LibraryNotFound(
                take_dlerror().unwrap_or_else(|| "invalid dlerror string".to_string()),
            )),
        }
    }

    pub(crate) fn lookup_ptr(&self, name: &CStr) -> Result<*mut c_void, Error> {
        _ = take_dlerror();

        let addr = unsafe { dlsym(self.0.as_ptr(), name.as_ptr()) };

        // NOTE: dlsym may legitimately return null for a symbol that exists;
        // only a pending dlerror means the lookup actually failed.
        match take_dlerror() {
            Some(err) => Err(Error::SymbolNotFound(err)),
            None => Ok(addr),
        }
    }
}

impl Drop for DynLib {
    fn drop(&mut self) {
        unsafe { dlclose(self.0.as_ptr()) };
    }
}
