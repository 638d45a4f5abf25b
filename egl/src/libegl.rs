use std::ffi::{c_char, c_uint, c_void};
use std::ptr::null_mut;

use crate::api::fn_table;

pub type khronos_int32_t = i32;
pub type khronos_utime_nanoseconds_t = u64;

// https://registry.khronos.org/EGL/api/EGL/eglplatform.h

pub type EGLNativeDisplayType = *mut c_void;
pub type EGLNativePixmapType = *mut c_void;
pub type EGLNativeWindowType = *mut c_void;

pub type EGLint = khronos_int32_t;

// https://registry.khronos.org/EGL/api/EGL/egl.h

// 1.0

pub type EGLBoolean = c_uint;
pub type EGLDisplay = *mut c_void;

pub type EGLConfig = *mut c_void;
pub type EGLSurface = *mut c_void;
pub type EGLContext = *mut c_void;
pub type __eglMustCastToProperFunctionPointerType = unsafe extern "C" fn();

pub const ALPHA_SIZE: EGLenum = 0x3021;
pub const BAD_ACCESS: EGLenum = 0x3002;
pub const BAD_ALLOC: EGLenum = 0x3003;
pub const BAD_ATTRIBUTE: EGLenum = 0x3004;
pub const BAD_CONFIG: EGLenum = 0x3005;
pub const BAD_CONTEXT: EGLenum = 0x3006;
pub const BAD_CURRENT_SURFACE: EGLenum = 0x3007;
pub const BAD_DISPLAY: EGLenum = 0x3008;
pub const BAD_MATCH: EGLenum = 0x3009;
pub const BAD_NATIVE_PIXMAP: EGLenum = 0x300A;
pub const BAD_NATIVE_WINDOW: EGLenum = 0x300B;
pub const BAD_PARAMETER: EGLenum = 0x300C;
pub const BAD_SURFACE: EGLenum = 0x300D;
pub const BLUE_SIZE: EGLenum = 0x3022;
pub const BUFFER_SIZE: EGLenum = 0x3020;
pub const CONFIG_CAVEAT: EGLenum = 0x3027;
pub const CONFIG_ID: EGLenum = 0x3028;
pub const CORE_NATIVE_ENGINE: EGLenum = 0x305B;
pub const DEPTH_SIZE: EGLenum = 0x3025;
pub const DONT_CARE: EGLint = -1;
pub const DRAW: EGLenum = 0x3059;
pub const EXTENSIONS: EGLenum = 0x3055;
pub const FALSE: EGLBoolean = 0;
pub const GREEN_SIZE: EGLenum = 0x3023;
pub const HEIGHT: EGLenum = 0x3056;
pub const LARGEST_PBUFFER: EGLenum = 0x3058;
pub const LEVEL: EGLenum = 0x3029;
pub const MAX_PBUFFER_HEIGHT: EGLenum = 0x302A;
pub const MAX_PBUFFER_PIXELS: EGLenum = 0x302B;
pub const MAX_PBUFFER_WIDTH: EGLenum = 0x302C;
pub const NATIVE_RENDERABLE: EGLenum = 0x302D;
pub const NATIVE_VISUAL_ID: EGLenum = 0x302E;
pub const NATIVE_VISUAL_TYPE: EGLenum = 0x302F;
pub const NONE: EGLenum = 0x3038;
pub const NON_CONFORMANT_CONFIG: EGLenum = 0x3051;
pub const NOT_INITIALIZED: EGLenum = 0x3001;
pub const NO_CONTEXT: EGLContext = null_mut();
pub const NO_DISPLAY: EGLDisplay = null_mut();
pub const NO_SURFACE: EGLSurface = null_mut();
pub const PBUFFER_BIT: EGLenum = 0x0001;
pub const PIXMAP_BIT: EGLenum = 0x0002;
pub const READ: EGLenum = 0x305A;
pub const RED_SIZE: EGLenum = 0x3024;
pub const SAMPLES: EGLenum = 0x3031;
pub const SAMPLE_BUFFERS: EGLenum = 0x3032;
pub const SLOW_CONFIG: EGLenum = 0x3050;
pub const STENCIL_SIZE: EGLenum = 0x3026;
pub const SUCCESS: EGLenum = 0x3000;
pub const SURFACE_TYPE: EGLenum = 0x3033;
pub const TRANSPARENT_BLUE_VALUE: EGLenum = 0x3035;
pub const TRANSPARENT_GREEN_VALUE: EGLenum = 0x3036;
pub const TRANSPARENT_RED_VALUE: EGLenum = 0x3037;
pub const TRANSPARENT_RGB: EGLenum = 0x3052;
pub const TRANSPARENT_TYPE: EGLenum = 0x3034;
pub const TRUE: EGLBoolean = 1;
pub const VENDOR: EGLenum = 0x3053;
pub const VERSION: EGLenum = 0x3054;
pub const WIDTH: EGLenum = 0x3057;
pub const WINDOW_BIT: EGLenum = 0x0004;

// 1.1

pub const BACK_BUFFER: EGLenum = 0x3084;
pub const BIND_TO_TEXTURE_RGB: EGLenum = 0x3039;
pub const BIND_TO_TEXTURE_RGBA: EGLenum = 0x303A;
pub const CONTEXT_LOST: EGLenum = 0x300E;
pub const MIN_SWAP_INTERVAL: EGLenum = 0x303B;
pub const MAX_SWAP_INTERVAL: EGLenum = 0x303C;
pub const MIPMAP_TEXTURE: EGLenum = 0x3082;
pub const MIPMAP_LEVEL: EGLenum = 0x3083;
pub const NO_TEXTURE: EGLenum = 0x305C;
pub const TEXTURE_2D: EGLenum = 0x305F;
pub const TEXTURE_FORMAT: EGLenum = 0x3080;
pub const TEXTURE_RGB: EGLenum = 0x305D;
pub const TEXTURE_RGBA: EGLenum = 0x305E;
pub const TEXTURE_TARGET: EGLenum = 0x3081;

// 1.2

pub type EGLenum = c_uint;
pub type EGLClientBuffer = *mut c_void;

pub const ALPHA_FORMAT: EGLenum = 0x3088;
pub const ALPHA_FORMAT_NONPRE: EGLenum = 0x308B;
pub const ALPHA_FORMAT_PRE: EGLenum = 0x308C;
pub const ALPHA_MASK_SIZE: EGLenum = 0x303E;
pub const BUFFER_PRESERVED: EGLenum = 0x3094;
pub const BUFFER_DESTROYED: EGLenum = 0x3095;
pub const CLIENT_APIS: EGLenum = 0x308D;
pub const COLORSPACE: EGLenum = 0x3087;
#[allow(non_upper_case_globals)]
pub const COLORSPACE_sRGB: EGLenum = 0x3089;
pub const COLORSPACE_LINEAR: EGLenum = 0x308A;
pub const COLOR_BUFFER_TYPE: EGLenum = 0x303F;
pub const CONTEXT_CLIENT_TYPE: EGLenum = 0x3097;
pub const DISPLAY_SCALING: EGLenum = 10000;
pub const HORIZONTAL_RESOLUTION: EGLenum = 0x3090;
pub const LUMINANCE_BUFFER: EGLenum = 0x308F;
pub const LUMINANCE_SIZE: EGLenum = 0x303D;
pub const OPENGL_ES_BIT: EGLenum = 0x0001;
pub const OPENVG_BIT: EGLenum = 0x0002;
pub const OPENGL_ES_API: EGLenum = 0x30A0;
pub const OPENVG_API: EGLenum = 0x30A1;
pub const OPENVG_IMAGE: EGLenum = 0x3096;
pub const PIXEL_ASPECT_RATIO: EGLenum = 0x3092;
pub const RENDERABLE_TYPE: EGLenum = 0x3040;
pub const RENDER_BUFFER: EGLenum = 0x3086;
pub const RGB_BUFFER: EGLenum = 0x308E;
pub const SINGLE_BUFFER: EGLenum = 0x3085;
pub const SWAP_BEHAVIOR: EGLenum = 0x3093;
pub const UNKNOWN: EGLint = -1;
pub const VERTICAL_RESOLUTION: EGLenum = 0x3091;

// 1.3

pub const CONFORMANT: EGLenum = 0x3042;
pub const CONTEXT_CLIENT_VERSION: EGLenum = 0x3098;
pub const MATCH_NATIVE_PIXMAP: EGLenum = 0x3041;
pub const OPENGL_ES2_BIT: EGLenum = 0x0004;
pub const VG_ALPHA_FORMAT: EGLenum = 0x3088;
pub const VG_ALPHA_FORMAT_NONPRE: EGLenum = 0x308B;
pub const VG_ALPHA_FORMAT_PRE: EGLenum = 0x308C;
pub const VG_ALPHA_FORMAT_PRE_BIT: EGLenum = 0x0040;
pub const VG_COLORSPACE: EGLenum = 0x3087;
#[allow(non_upper_case_globals)]
pub const VG_COLORSPACE_sRGB: EGLenum = 0x3089;
pub const VG_COLORSPACE_LINEAR: EGLenum = 0x308A;
pub const VG_COLORSPACE_LINEAR_BIT: EGLenum = 0x0020;

// 1.4

pub const DEFAULT_DISPLAY: EGLNativeDisplayType = null_mut();
pub const MULTISAMPLE_RESOLVE_BOX_BIT: EGLenum = 0x0200;
pub const MULTISAMPLE_RESOLVE: EGLenum = 0x3099;
pub const MULTISAMPLE_RESOLVE_DEFAULT: EGLenum = 0x309A;
pub const MULTISAMPLE_RESOLVE_BOX: EGLenum = 0x309B;
pub const OPENGL_API: EGLenum = 0x30A2;
pub const OPENGL_BIT: EGLenum = 0x0008;
pub const SWAP_BEHAVIOR_PRESERVED_BIT: EGLenum = 0x0400;

// 1.5

pub type EGLSync = *mut c_void;
pub type EGLAttrib = isize;
pub type EGLTime = khronos_utime_nanoseconds_t;
pub type EGLImage = *mut c_void;

pub const CONTEXT_MAJOR_VERSION: EGLenum = 0x3098;
pub const CONTEXT_MINOR_VERSION: EGLenum = 0x30FB;
pub const CONTEXT_OPENGL_PROFILE_MASK: EGLenum = 0x30FD;
pub const CONTEXT_OPENGL_RESET_NOTIFICATION_STRATEGY: EGLenum = 0x31BD;
pub const NO_RESET_NOTIFICATION: EGLenum = 0x31BE;
pub const LOSE_CONTEXT_ON_RESET: EGLenum = 0x31BF;
pub const CONTEXT_OPENGL_CORE_PROFILE_BIT: EGLenum = 0x00000001;
pub const CONTEXT_OPENGL_COMPATIBILITY_PROFILE_BIT: EGLenum = 0x00000002;
pub const CONTEXT_OPENGL_DEBUG: EGLenum = 0x31B0;
pub const CONTEXT_OPENGL_FORWARD_COMPATIBLE: EGLenum = 0x31B1;
pub const CONTEXT_OPENGL_ROBUST_ACCESS: EGLenum = 0x31B2;
pub const OPENGL_ES3_BIT: EGLenum = 0x00000040;
pub const CL_EVENT_HANDLE: EGLenum = 0x309C;
pub const SYNC_CL_EVENT: EGLenum = 0x30FE;
pub const SYNC_CL_EVENT_COMPLETE: EGLenum = 0x30FF;
pub const SYNC_PRIOR_COMMANDS_COMPLETE: EGLenum = 0x30F0;
pub const SYNC_TYPE: EGLenum = 0x30F7;
pub const SYNC_STATUS: EGLenum = 0x30F1;
pub const SYNC_CONDITION: EGLenum = 0x30F8;
pub const SIGNALED: EGLenum = 0x30F2;
pub const UNSIGNALED: EGLenum = 0x30F3;
pub const SYNC_FLUSH_COMMANDS_BIT: EGLenum = 0x0001;
pub const FOREVER: u64 = 0xFFFFFFFFFFFFFFFF;
pub const TIMEOUT_EXPIRED: EGLenum = 0x30F5;
pub const CONDITION_SATISFIED: EGLenum = 0x30F6;
pub const NO_SYNC: EGLSync = null_mut();
pub const SYNC_FENCE: EGLenum = 0x30F9;
pub const GL_COLORSPACE: EGLenum = 0x309D;
pub const GL_COLORSPACE_SRGB: EGLenum = 0x3089;
pub const GL_COLORSPACE_LINEAR: EGLenum = 0x308A;
pub const GL_RENDERBUFFER: EGLenum = 0x30B9;
pub const GL_TEXTURE_2D: EGLenum = 0x30B1;
pub const GL_TEXTURE_LEVEL: EGLenum = 0x30BC;
pub const GL_TEXTURE_3D: EGLenum = 0x30B2;
pub const GL_TEXTURE_ZOFFSET: EGLenum = 0x30BD;
pub const GL_TEXTURE_CUBE_MAP_POSITIVE_X: EGLenum = 0x30B3;
pub const GL_TEXTURE_CUBE_MAP_NEGATIVE_X: EGLenum = 0x30B4;
pub const GL_TEXTURE_CUBE_MAP_POSITIVE_Y: EGLenum = 0x30B5;
pub const GL_TEXTURE_CUBE_MAP_NEGATIVE_Y: EGLenum = 0x30B6;
pub const GL_TEXTURE_CUBE_MAP_POSITIVE_Z: EGLenum = 0x30B7;
pub const GL_TEXTURE_CUBE_MAP_NEGATIVE_Z: EGLenum = 0x30B8;
pub const IMAGE_PRESERVED: EGLenum = 0x30D2;
pub const NO_IMAGE: EGLImage = null_mut();

fn_table! {
    pub struct Api;

    // 1.0
    fn ChooseConfig(
        dpy: EGLDisplay,
        attrib_list: *const EGLint,
        configs: *mut EGLConfig,
        config_size: EGLint,
        num_config: *mut EGLint,
    ) -> EGLBoolean;
    fn CopyBuffers(dpy: EGLDisplay, surface: EGLSurface, target: EGLNativePixmapType) -> EGLBoolean;
    fn CreateContext(
        dpy: EGLDisplay,
        config: EGLConfig,
        share_context: EGLContext,
        attrib_list: *const EGLint,
    ) -> EGLContext;
    fn CreatePbufferSurface(
        dpy: EGLDisplay,
        config: EGLConfig,
        attrib_list: *const EGLint,
    ) -> EGLSurface;
    fn CreatePixmapSurface(
        dpy: EGLDisplay,
        config: EGLConfig,
        pixmap: EGLNativePixmapType,
        attrib_list: *const EGLint,
    ) -> EGLSurface;
    fn CreateWindowSurface(
        dpy: EGLDisplay,
        config: EGLConfig,
        win: EGLNativeWindowType,
        attrib_list: *const EGLint,
    ) -> EGLSurface;
    fn DestroyContext(dpy: EGLDisplay, ctx: EGLContext) -> EGLBoolean;
    fn DestroySurface(dpy: EGLDisplay, surface: EGLSurface) -> EGLBoolean;
    fn GetConfigAttrib(
        dpy: EGLDisplay,
        config: EGLConfig,
        attribute: EGLint,
        value: *mut EGLint,
    ) -> EGLBoolean;
    fn GetConfigs(
        dpy: EGLDisplay,
        configs: *mut EGLConfig,
        config_size: EGLint,
        num_config: *mut EGLint,
    ) -> EGLBoolean;
    fn GetCurrentDisplay() -> EGLDisplay;
    fn GetCurrentSurface(readdraw: EGLint) -> EGLSurface;
    fn GetDisplay(display_id: EGLNativeDisplayType) -> EGLDisplay;
    fn GetError() -> EGLint;
    fn GetProcAddress(procname: *const c_char) -> __eglMustCastToProperFunctionPointerType;
    fn Initialize(dpy: EGLDisplay, major: *mut EGLint, minor: *mut EGLint) -> EGLBoolean;
    fn MakeCurrent(
        dpy: EGLDisplay,
        draw: EGLSurface,
        read: EGLSurface,
        ctx: EGLContext,
    ) -> EGLBoolean;
    fn QueryContext(
        dpy: EGLDisplay,
        ctx: EGLContext,
        attribute: EGLint,
        value: *mut EGLint,
    ) -> EGLBoolean;
    fn QueryString(dpy: EGLDisplay, name: EGLint) -> *const c_char;
    fn QuerySurface(
        dpy: EGLDisplay,
        surface: EGLSurface,
        attribute: EGLint,
        value: *mut EGLint,
    ) -> EGLBoolean;
    fn SwapBuffers(dpy: EGLDisplay, surface: EGLSurface) -> EGLBoolean;
    fn Terminate(dpy: EGLDisplay) -> EGLBoolean;
    fn WaitGL() -> EGLBoolean;
    fn WaitNative(engine: EGLint) -> EGLBoolean;

    // 1.1
    fn BindTexImage(dpy: EGLDisplay, surface: EGLSurface, buffer: EGLint) -> EGLBoolean;
    fn ReleaseTexImage(dpy: EGLDisplay, surface: EGLSurface, buffer: EGLint) -> EGLBoolean;
    fn SurfaceAttrib(
        dpy: EGLDisplay,
        surface: EGLSurface,
        attribute: EGLint,
        value: EGLint,
    ) -> EGLBoolean;
    fn SwapInterval(dpy: EGLDisplay, interval: EGLint) -> EGLBoolean;

    // 1.2
    fn BindAPI(api: EGLenum) -> EGLBoolean;
    fn QueryAPI() -> EGLenum;
    fn CreatePbufferFromClientBuffer(
        dpy: EGLDisplay,
        buftype: EGLenum,
        buffer: EGLClientBuffer,
        config: EGLConfig,
        attrib_list: *const EGLint,
    ) -> EGLSurface;
    fn ReleaseThread() -> EGLBoolean;
    fn WaitClient() -> EGLBoolean;

    // 1.4
    fn GetCurrentContext() -> EGLContext;

    // 1.5
    fn CreateSync(dpy: EGLDisplay, r#type: EGLenum, attrib_list: *const EGLAttrib) -> EGLSync;
    fn DestroySync(dpy: EGLDisplay, sync: EGLSync) -> EGLBoolean;
    fn ClientWaitSync(dpy: EGLDisplay, sync: EGLSync, flags: EGLint, timeout: EGLTime) -> EGLint;
    fn GetSyncAttrib(
        dpy: EGLDisplay,
        sync: EGLSync,
        attribute: EGLint,
        value: *mut EGLAttrib,
    ) -> EGLBoolean;
    fn CreateImage(
        dpy: EGLDisplay,
        ctx: EGLContext,
        target: EGLenum,
        buffer: EGLClientBuffer,
        attrib_list: *const EGLAttrib,
    ) -> EGLImage;
    fn DestroyImage(dpy: EGLDisplay, image: EGLImage) -> EGLBoolean;
    fn GetPlatformDisplay(
        platform: EGLenum,
        native_display: *mut c_void,
        attrib_list: *const EGLAttrib,
    ) -> EGLDisplay;
    fn CreatePlatformWindowSurface(
        dpy: EGLDisplay,
        config: EGLConfig,
        native_window: *mut c_void,
        attrib_list: *const EGLAttrib,
    ) -> EGLSurface;
    fn CreatePlatformPixmapSurface(
        dpy: EGLDisplay,
        config: EGLConfig,
        native_pixmap: *mut c_void,
        attrib_list: *const EGLAttrib,
    ) -> EGLSurface;
    fn WaitSync(dpy: EGLDisplay, sync: EGLSync, flags: EGLint) -> EGLBoolean;
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::ffi::c_void;
    use std::ptr::null_mut;

    use super::*;

    unsafe extern "C" fn fake_get_error() -> EGLint {
        SUCCESS as EGLint
    }

    unsafe extern "C" fn fake_initialize(
        _dpy: EGLDisplay,
        major: *mut EGLint,
        minor: *mut EGLint,
    ) -> EGLBoolean {
        unsafe {
            *major = 1;
            *minor = 5;
        }
        TRUE
    }

    #[test]
    fn resolves_each_symbol_once() {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let api = unsafe {
            Api::load_with(|name| {
                *counts
                    .entry(name.to_string_lossy().into_owned())
                    .or_default() += 1;
                if name.to_bytes() == b"eglGetError" {
                    fake_get_error as *mut c_void
                } else {
                    null_mut()
                }
            })
        };

        assert_eq!(counts.len(), 44);
        assert!(counts.values().all(|&count| count == 1));
        assert_eq!(counts.get("eglChooseConfig"), Some(&1));

        // calls go through the stored pointer, not back through the resolver
        assert_eq!(unsafe { api.GetError() }, SUCCESS as EGLint);
        assert_eq!(unsafe { api.GetError() }, SUCCESS as EGLint);
        assert_eq!(counts.get("eglGetError"), Some(&1));
    }

    #[test]
    fn forwards_arguments_and_returns() {
        let api = unsafe {
            Api::load_with(|name| {
                if name.to_bytes() == b"eglInitialize" {
                    fake_initialize as *mut c_void
                } else {
                    null_mut()
                }
            })
        };

        let (mut major, mut minor) = (0, 0);
        let ok = unsafe { api.Initialize(NO_DISPLAY, &mut major, &mut minor) };
        assert_eq!(ok, TRUE);
        assert_eq!((major, minor), (1, 5));
    }

    #[test]
    fn unresolved_slots_stay_null() {
        let api = unsafe { Api::load_with(|_| null_mut()) };
        assert!(!api.ChooseConfig.is_loaded());
        assert!(api.SwapBuffers.as_ptr().is_null());
    }

    #[test]
    #[should_panic(expected = "eglSwapBuffers was not loaded")]
    fn unresolved_function_panics() {
        let api = unsafe { Api::load_with(|_| null_mut()) };
        unsafe { api.SwapBuffers(NO_DISPLAY, NO_SURFACE) };
    }
}
