use std::ffi::{CStr, c_void};
use std::ptr::NonNull;

use windows_sys::Win32::Foundation::GetLastError;
use windows_sys::Win32::System::LibraryLoader::{FreeLibrary, GetProcAddress, LoadLibraryA};

use crate::Error;

#[derive(Debug)]
pub struct DynLib(NonNull<c_void>);

impl DynLib {
    pub fn load(filename: &CStr) -> Result<Self, Error> {
        let handle = unsafe { LoadLibraryA(filename.as_ptr().cast()) };
        match NonNull::new(handle.cast()) {
            Some(handle) => Ok(Self(handle)),
            None => Err(Error::LibraryNotFound(format!(
                "LoadLibraryA failed with {:#010x}",
                unsafe { GetLastError() },
            ))),
        }
    }

    pub(crate) fn lookup_ptr(&self, name: &CStr) -> Result<*mut c_void, Error> {
        match unsafe { GetProcAddress(self.0.as_ptr(), name.as_ptr().cast()) } {
            Some(addr) => Ok(addr as *mut c_void),
            None => Err(Error::SymbolNotFound(format!(
                "GetProcAddress failed with {:#010x}",
                unsafe { GetLastError() },
            ))),
        }
    }
}

impl Drop for DynLib {
    fn drop(&mut self) {
        unsafe { FreeLibrary(self.0.as_ptr()) };
    }
}
