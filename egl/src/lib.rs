use std::ffi::{CStr, c_char, c_void};
use std::ops::Deref;

use dynlib::DynLib;

pub mod api;
#[allow(non_camel_case_types)]
#[allow(non_snake_case)]
#[allow(non_upper_case_globals)]
pub mod libegl;
#[allow(non_camel_case_types)]
#[allow(non_snake_case)]
#[allow(non_upper_case_globals)]
pub mod libegl_ext;

mod extensions;

pub use api::FnPtr;
pub use extensions::supports_extension;

use libegl::{Api, EGLConfig, EGLContext, EGLDisplay, EGLint};
use libegl_ext::ExtApi;

#[cfg(windows)]
const LIB_NAME: &CStr = c"libEGL.dll";
#[cfg(target_vendor = "apple")]
const LIB_NAME: &CStr = c"libEGL.dylib";
#[cfg(all(unix, not(target_vendor = "apple")))]
const LIB_NAME: &CStr = c"libEGL.so";

type GetProcAddressFn = unsafe extern "C" fn(procname: *const c_char) -> *mut c_void;

/// Owner of all loader state: the core and extension function tables, the
/// cached extension string and the library handle keeping them valid.
///
/// Load once and keep it around; nothing here is synchronized, so build it
/// before handing anything out to other threads.
pub struct EglApi {
    api: Api,
    ext: ExtApi,
    get_proc_address: GetProcAddressFn,
    extensions: Option<String>,
    _dynlib: DynLib,
}

impl Deref for EglApi {
    type Target = Api;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}

impl EglApi {
    pub fn load() -> Result<Self, dynlib::Error> {
        let dynlib = Self::open_library().inspect_err(|err| {
            log::error!("could not open {}: {err}", LIB_NAME.to_string_lossy());
        })?;
        log::info!("loaded {}", LIB_NAME.to_string_lossy());

        let api = unsafe { Api::load_with(|name| dynlib.lookup_checked(name)) };

        // NOTE: extension entry points are not reliably exported as symbols;
        // they can only be reached through eglGetProcAddress, which itself
        // must come out of the core table first.
        let get_proc_address = dynlib
            .lookup::<GetProcAddressFn>(c"eglGetProcAddress")
            .inspect_err(|err| log::error!("could not resolve eglGetProcAddress: {err}"))?;

        let ext = unsafe { ExtApi::load_with(|name| get_proc_address(name.as_ptr())) };

        Ok(Self {
            api,
            ext,
            get_proc_address,
            extensions: None,
            _dynlib: dynlib,
        })
    }

    #[cfg(all(unix, not(target_vendor = "apple")))]
    fn open_library() -> Result<DynLib, dynlib::Error> {
        DynLib::load(LIB_NAME).or_else(|_| DynLib::load(c"libEGL.so.1"))
    }

    #[cfg(any(windows, target_vendor = "apple"))]
    fn open_library() -> Result<DynLib, dynlib::Error> {
        DynLib::load(LIB_NAME)
    }

    pub fn ext(&self) -> &ExtApi {
        &self.ext
    }

    /// Reinitializing a display can leave previously resolved extension
    /// pointers stale (or make new ones available); this rebuilds the whole
    /// extension table and drops the cached extension string.
    pub fn reload_extensions(&mut self) {
        let get_proc_address = self.get_proc_address;
        self.ext = unsafe { ExtApi::load_with(|name| get_proc_address(name.as_ptr())) };
        self.extensions = None;
    }

    unsafe fn query_extension_string(&self, dpy: EGLDisplay) -> String {
        let ptr = unsafe { self.api.QueryString(dpy, libegl::EXTENSIONS as EGLint) };
        if ptr.is_null() {
            String::new()
        } else {
            unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
        }
    }

    /// Tests against the current display's extension string, fetched once
    /// and cached; pass `refresh` to refetch after a display change.
    pub unsafe fn is_extension_supported(&mut self, extension: &str, refresh: bool) -> bool {
        if self.extensions.is_none() || refresh {
            let dpy = unsafe { self.api.GetCurrentDisplay() };
            self.extensions = Some(unsafe { self.query_extension_string(dpy) });
        }
        supports_extension(self.extensions.as_deref().unwrap_or(""), extension)
    }

    /// Tests against the given display's extension string, refetched on
    /// every call.
    pub unsafe fn is_display_extension_supported(&self, dpy: EGLDisplay, extension: &str) -> bool {
        supports_extension(&unsafe { self.query_extension_string(dpy) }, extension)
    }

    /// Same as [`Api::CreateContext`] plus the QNX driver quirk: libGLESv2
    /// has to be resident before the first eglMakeCurrent call there, so the
    /// first successfully created ES2-capable context preloads it.
    #[allow(non_snake_case)]
    pub unsafe fn CreateContext(
        &self,
        dpy: EGLDisplay,
        config: EGLConfig,
        share_context: EGLContext,
        attrib_list: *const EGLint,
    ) -> EGLContext {
        let context = unsafe { self.api.CreateContext(dpy, config, share_context, attrib_list) };
        #[cfg(target_os = "nto")]
        if context != libegl::NO_CONTEXT {
            unsafe { self.preload_gles2(dpy, config) };
        }
        context
    }

    #[cfg(target_os = "nto")]
    unsafe fn preload_gles2(&self, dpy: EGLDisplay, config: EGLConfig) {
        use std::sync::atomic::{AtomicBool, Ordering};

        static PRELOADED: AtomicBool = AtomicBool::new(false);
        if PRELOADED.load(Ordering::Relaxed) {
            return;
        }

        let mut renderable_type: EGLint = 0;
        let ok = unsafe {
            self.api.GetConfigAttrib(
                dpy,
                config,
                libegl::RENDERABLE_TYPE as EGLint,
                &mut renderable_type,
            )
        };
        if ok == libegl::FALSE
            || renderable_type as libegl::EGLenum & libegl::OPENGL_ES2_BIT == 0
        {
            return;
        }

        log::info!("preloading libGLESv2.so");
        if let Ok(lib) = DynLib::load(c"libGLESv2.so") {
            // must stay resident for the rest of the process
            std::mem::forget(lib);
            PRELOADED.store(true, Ordering::Relaxed);
        }
    }
}
