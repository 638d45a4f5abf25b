use std::ffi::{c_char, c_int, c_void};
use std::ptr::null_mut;

use crate::api::fn_table;
use crate::libegl::*;

pub type khronos_stime_nanoseconds_t = i64;
pub type khronos_ssize_t = isize;

// https://registry.khronos.org/EGL/api/EGL/eglext.h

pub type EGLSyncKHR = *mut c_void;
pub type EGLAttribKHR = isize;
pub type EGLTimeKHR = khronos_utime_nanoseconds_t;
pub type EGLImageKHR = *mut c_void;
pub type EGLStreamKHR = *mut c_void;
pub type EGLuint64KHR = u64;
pub type EGLNativeFileDescriptorKHR = c_int;
pub type EGLObjectKHR = *mut c_void;
pub type EGLLabelKHR = *mut c_void;

pub type EGLDEBUGPROCKHR = Option<
    unsafe extern "C" fn(
        error: EGLenum,
        command: *const c_char,
        messageType: EGLint,
        threadLabel: EGLLabelKHR,
        objectLabel: EGLLabelKHR,
        message: *const c_char,
    ),
>;

pub type EGLsizeiANDROID = khronos_ssize_t;
pub type EGLnsecsANDROID = khronos_stime_nanoseconds_t;

pub type EGLSetBlobFuncANDROID = Option<
    unsafe extern "C" fn(
        key: *const c_void,
        keySize: EGLsizeiANDROID,
        value: *const c_void,
        valueSize: EGLsizeiANDROID,
    ),
>;
pub type EGLGetBlobFuncANDROID = Option<
    unsafe extern "C" fn(
        key: *const c_void,
        keySize: EGLsizeiANDROID,
        value: *mut c_void,
        valueSize: EGLsizeiANDROID,
    ) -> EGLsizeiANDROID,
>;

pub type EGLDeviceEXT = *mut c_void;
pub type EGLOutputLayerEXT = *mut c_void;
pub type EGLOutputPortEXT = *mut c_void;

#[repr(C)]
pub struct EGLClientPixmapHI {
    pub pData: *mut c_void,
    pub iWidth: EGLint,
    pub iHeight: EGLint,
    pub iStride: EGLint,
}

pub type EGLSyncNV = *mut c_void;
pub type EGLTimeNV = khronos_utime_nanoseconds_t;
pub type EGLuint64NV = u64;

pub const NO_SYNC_KHR: EGLSyncKHR = null_mut();
pub const NO_IMAGE_KHR: EGLImageKHR = null_mut();
pub const NO_STREAM_KHR: EGLStreamKHR = null_mut();
pub const NO_FILE_DESCRIPTOR_KHR: EGLNativeFileDescriptorKHR = -1;
pub const NO_DEVICE_EXT: EGLDeviceEXT = null_mut();
pub const NO_OUTPUT_LAYER_EXT: EGLOutputLayerEXT = null_mut();
pub const NO_OUTPUT_PORT_EXT: EGLOutputPortEXT = null_mut();
pub const NO_SYNC_NV: EGLSyncNV = null_mut();
pub const FOREVER_KHR: u64 = 0xFFFFFFFFFFFFFFFF;
pub const FOREVER_NV: u64 = 0xFFFFFFFFFFFFFFFF;

pub const PLATFORM_X11_KHR: EGLenum = 0x31D5;
pub const PLATFORM_X11_EXT: EGLenum = 0x31D5;
pub const PLATFORM_GBM_KHR: EGLenum = 0x31D7;
pub const PLATFORM_GBM_MESA: EGLenum = 0x31D7;
pub const PLATFORM_WAYLAND_KHR: EGLenum = 0x31D8;
pub const PLATFORM_WAYLAND_EXT: EGLenum = 0x31D8;
pub const PLATFORM_DEVICE_EXT: EGLenum = 0x313F;

fn_table! {
    pub struct ExtApi;

    // KHR
    fn CreateSync64KHR(dpy: EGLDisplay, r#type: EGLenum, attrib_list: *const EGLAttribKHR) -> EGLSyncKHR;
    fn DebugMessageControlKHR(callback: EGLDEBUGPROCKHR, attrib_list: *const EGLAttrib) -> EGLint;
    fn QueryDebugKHR(attribute: EGLint, value: *mut EGLAttrib) -> EGLBoolean;
    fn LabelObjectKHR(
        display: EGLDisplay,
        objectType: EGLenum,
        object: EGLObjectKHR,
        label: EGLLabelKHR,
    ) -> EGLint;
    fn QueryDisplayAttribKHR(dpy: EGLDisplay, name: EGLint, value: *mut EGLAttrib) -> EGLBoolean;
    fn CreateSyncKHR(dpy: EGLDisplay, r#type: EGLenum, attrib_list: *const EGLint) -> EGLSyncKHR;
    fn DestroySyncKHR(dpy: EGLDisplay, sync: EGLSyncKHR) -> EGLBoolean;
    fn ClientWaitSyncKHR(
        dpy: EGLDisplay,
        sync: EGLSyncKHR,
        flags: EGLint,
        timeout: EGLTimeKHR,
    ) -> EGLint;
    fn GetSyncAttribKHR(
        dpy: EGLDisplay,
        sync: EGLSyncKHR,
        attribute: EGLint,
        value: *mut EGLint,
    ) -> EGLBoolean;
    fn CreateImageKHR(
        dpy: EGLDisplay,
        ctx: EGLContext,
        target: EGLenum,
        buffer: EGLClientBuffer,
        attrib_list: *const EGLint,
    ) -> EGLImageKHR;
    fn DestroyImageKHR(dpy: EGLDisplay, image: EGLImageKHR) -> EGLBoolean;
    fn LockSurfaceKHR(
        dpy: EGLDisplay,
        surface: EGLSurface,
        attrib_list: *const EGLint,
    ) -> EGLBoolean;
    fn UnlockSurfaceKHR(dpy: EGLDisplay, surface: EGLSurface) -> EGLBoolean;
    fn QuerySurface64KHR(
        dpy: EGLDisplay,
        surface: EGLSurface,
        attribute: EGLint,
        value: *mut EGLAttribKHR,
    ) -> EGLBoolean;
    fn SetDamageRegionKHR(
        dpy: EGLDisplay,
        surface: EGLSurface,
        rects: *mut EGLint,
        n_rects: EGLint,
    ) -> EGLBoolean;
    fn SignalSyncKHR(dpy: EGLDisplay, sync: EGLSyncKHR, mode: EGLenum) -> EGLBoolean;
    fn CreateStreamKHR(dpy: EGLDisplay, attrib_list: *const EGLint) -> EGLStreamKHR;
    fn DestroyStreamKHR(dpy: EGLDisplay, stream: EGLStreamKHR) -> EGLBoolean;
    fn StreamAttribKHR(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
        attribute: EGLenum,
        value: EGLint,
    ) -> EGLBoolean;
    fn QueryStreamKHR(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
        attribute: EGLenum,
        value: *mut EGLint,
    ) -> EGLBoolean;
    fn QueryStreamu64KHR(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
        attribute: EGLenum,
        value: *mut EGLuint64KHR,
    ) -> EGLBoolean;
    fn CreateStreamAttribKHR(dpy: EGLDisplay, attrib_list: *const EGLAttrib) -> EGLStreamKHR;
    fn SetStreamAttribKHR(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
        attribute: EGLenum,
        value: EGLAttrib,
    ) -> EGLBoolean;
    fn QueryStreamAttribKHR(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
        attribute: EGLenum,
        value: *mut EGLAttrib,
    ) -> EGLBoolean;
    fn StreamConsumerAcquireAttribKHR(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
        attrib_list: *const EGLAttrib,
    ) -> EGLBoolean;
    fn StreamConsumerReleaseAttribKHR(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
        attrib_list: *const EGLAttrib,
    ) -> EGLBoolean;
    fn StreamConsumerGLTextureExternalKHR(dpy: EGLDisplay, stream: EGLStreamKHR) -> EGLBoolean;
    fn StreamConsumerAcquireKHR(dpy: EGLDisplay, stream: EGLStreamKHR) -> EGLBoolean;
    fn StreamConsumerReleaseKHR(dpy: EGLDisplay, stream: EGLStreamKHR) -> EGLBoolean;
    fn GetStreamFileDescriptorKHR(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
    ) -> EGLNativeFileDescriptorKHR;
    fn CreateStreamFromFileDescriptorKHR(
        dpy: EGLDisplay,
        file_descriptor: EGLNativeFileDescriptorKHR,
    ) -> EGLStreamKHR;
    fn QueryStreamTimeKHR(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
        attribute: EGLenum,
        value: *mut EGLTimeKHR,
    ) -> EGLBoolean;
    fn CreateStreamProducerSurfaceKHR(
        dpy: EGLDisplay,
        config: EGLConfig,
        stream: EGLStreamKHR,
        attrib_list: *const EGLint,
    ) -> EGLSurface;
    fn SwapBuffersWithDamageKHR(
        dpy: EGLDisplay,
        surface: EGLSurface,
        rects: *mut EGLint,
        n_rects: EGLint,
    ) -> EGLBoolean;
    fn WaitSyncKHR(dpy: EGLDisplay, sync: EGLSyncKHR, flags: EGLint) -> EGLint;

    // ANDROID
    fn SetBlobCacheFuncsANDROID(
        dpy: EGLDisplay,
        set: EGLSetBlobFuncANDROID,
        get: EGLGetBlobFuncANDROID,
    );
    fn CreateNativeClientBufferANDROID(attrib_list: *const EGLint) -> EGLClientBuffer;
    fn DupNativeFenceFDANDROID(dpy: EGLDisplay, sync: EGLSyncKHR) -> EGLint;
    fn PresentationTimeANDROID(
        dpy: EGLDisplay,
        surface: EGLSurface,
        time: EGLnsecsANDROID,
    ) -> EGLBoolean;

    // ANGLE
    fn QuerySurfacePointerANGLE(
        dpy: EGLDisplay,
        surface: EGLSurface,
        attribute: EGLint,
        value: *mut *mut c_void,
    ) -> EGLBoolean;

    // EXT
    fn CompositorSetContextListEXT(
        external_ref_ids: *const EGLint,
        num_entries: EGLint,
    ) -> EGLBoolean;
    fn CompositorSetContextAttributesEXT(
        external_ref_id: EGLint,
        context_attributes: *const EGLint,
        num_entries: EGLint,
    ) -> EGLBoolean;
    fn CompositorSetWindowListEXT(
        external_ref_id: EGLint,
        external_win_ids: *const EGLint,
        num_entries: EGLint,
    ) -> EGLBoolean;
    fn CompositorSetWindowAttributesEXT(
        external_win_id: EGLint,
        window_attributes: *const EGLint,
        num_entries: EGLint,
    ) -> EGLBoolean;
    fn CompositorBindTexWindowEXT(external_win_id: EGLint) -> EGLBoolean;
    fn CompositorSetSizeEXT(external_win_id: EGLint, width: EGLint, height: EGLint) -> EGLBoolean;
    fn CompositorSwapPolicyEXT(external_win_id: EGLint, policy: EGLint) -> EGLBoolean;
    fn QueryDeviceAttribEXT(
        device: EGLDeviceEXT,
        attribute: EGLint,
        value: *mut EGLAttrib,
    ) -> EGLBoolean;
    fn QueryDeviceStringEXT(device: EGLDeviceEXT, name: EGLint) -> *const c_char;
    fn QueryDevicesEXT(
        max_devices: EGLint,
        devices: *mut EGLDeviceEXT,
        num_devices: *mut EGLint,
    ) -> EGLBoolean;
    fn QueryDisplayAttribEXT(dpy: EGLDisplay, attribute: EGLint, value: *mut EGLAttrib) -> EGLBoolean;
    fn QueryDmaBufFormatsEXT(
        dpy: EGLDisplay,
        max_formats: EGLint,
        formats: *mut EGLint,
        num_formats: *mut EGLint,
    ) -> EGLBoolean;
    fn QueryDmaBufModifiersEXT(
        dpy: EGLDisplay,
        format: EGLint,
        max_modifiers: EGLint,
        modifiers: *mut EGLuint64KHR,
        external_only: *mut EGLBoolean,
        num_modifiers: *mut EGLint,
    ) -> EGLBoolean;
    fn GetOutputLayersEXT(
        dpy: EGLDisplay,
        attrib_list: *const EGLAttrib,
        layers: *mut EGLOutputLayerEXT,
        max_layers: EGLint,
        num_layers: *mut EGLint,
    ) -> EGLBoolean;
    fn GetOutputPortsEXT(
        dpy: EGLDisplay,
        attrib_list: *const EGLAttrib,
        ports: *mut EGLOutputPortEXT,
        max_ports: EGLint,
        num_ports: *mut EGLint,
    ) -> EGLBoolean;
    fn OutputLayerAttribEXT(
        dpy: EGLDisplay,
        layer: EGLOutputLayerEXT,
        attribute: EGLint,
        value: EGLAttrib,
    ) -> EGLBoolean;
    fn QueryOutputLayerAttribEXT(
        dpy: EGLDisplay,
        layer: EGLOutputLayerEXT,
        attribute: EGLint,
        value: *mut EGLAttrib,
    ) -> EGLBoolean;
    fn QueryOutputLayerStringEXT(
        dpy: EGLDisplay,
        layer: EGLOutputLayerEXT,
        name: EGLint,
    ) -> *const c_char;
    fn OutputPortAttribEXT(
        dpy: EGLDisplay,
        port: EGLOutputPortEXT,
        attribute: EGLint,
        value: EGLAttrib,
    ) -> EGLBoolean;
    fn QueryOutputPortAttribEXT(
        dpy: EGLDisplay,
        port: EGLOutputPortEXT,
        attribute: EGLint,
        value: *mut EGLAttrib,
    ) -> EGLBoolean;
    fn QueryOutputPortStringEXT(
        dpy: EGLDisplay,
        port: EGLOutputPortEXT,
        name: EGLint,
    ) -> *const c_char;
    fn GetPlatformDisplayEXT(
        platform: EGLenum,
        native_display: *mut c_void,
        attrib_list: *const EGLint,
    ) -> EGLDisplay;
    fn CreatePlatformWindowSurfaceEXT(
        dpy: EGLDisplay,
        config: EGLConfig,
        native_window: *mut c_void,
        attrib_list: *const EGLint,
    ) -> EGLSurface;
    fn CreatePlatformPixmapSurfaceEXT(
        dpy: EGLDisplay,
        config: EGLConfig,
        native_pixmap: *mut c_void,
        attrib_list: *const EGLint,
    ) -> EGLSurface;
    fn StreamConsumerOutputEXT(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
        layer: EGLOutputLayerEXT,
    ) -> EGLBoolean;
    fn SwapBuffersWithDamageEXT(
        dpy: EGLDisplay,
        surface: EGLSurface,
        rects: *mut EGLint,
        n_rects: EGLint,
    ) -> EGLBoolean;

    // HI
    fn CreatePixmapSurfaceHI(
        dpy: EGLDisplay,
        config: EGLConfig,
        pixmap: *mut EGLClientPixmapHI,
    ) -> EGLSurface;

    // MESA
    fn CreateDRMImageMESA(dpy: EGLDisplay, attrib_list: *const EGLint) -> EGLImageKHR;
    fn ExportDRMImageMESA(
        dpy: EGLDisplay,
        image: EGLImageKHR,
        name: *mut EGLint,
        handle: *mut EGLint,
        stride: *mut EGLint,
    ) -> EGLBoolean;
    fn ExportDMABUFImageQueryMESA(
        dpy: EGLDisplay,
        image: EGLImageKHR,
        fourcc: *mut c_int,
        num_planes: *mut c_int,
        modifiers: *mut EGLuint64KHR,
    ) -> EGLBoolean;
    fn ExportDMABUFImageMESA(
        dpy: EGLDisplay,
        image: EGLImageKHR,
        fds: *mut c_int,
        strides: *mut EGLint,
        offsets: *mut EGLint,
    ) -> EGLBoolean;

    // NOK
    fn SwapBuffersRegionNOK(
        dpy: EGLDisplay,
        surface: EGLSurface,
        numRects: EGLint,
        rects: *const EGLint,
    ) -> EGLBoolean;
    fn SwapBuffersRegion2NOK(
        dpy: EGLDisplay,
        surface: EGLSurface,
        numRects: EGLint,
        rects: *const EGLint,
    ) -> EGLBoolean;

    // NV
    fn QueryNativeDisplayNV(dpy: EGLDisplay, display_id: *mut EGLNativeDisplayType) -> EGLBoolean;
    fn QueryNativeWindowNV(
        dpy: EGLDisplay,
        surf: EGLSurface,
        window: *mut EGLNativeWindowType,
    ) -> EGLBoolean;
    fn QueryNativePixmapNV(
        dpy: EGLDisplay,
        surf: EGLSurface,
        pixmap: *mut EGLNativePixmapType,
    ) -> EGLBoolean;
    fn PostSubBufferNV(
        dpy: EGLDisplay,
        surface: EGLSurface,
        x: EGLint,
        y: EGLint,
        width: EGLint,
        height: EGLint,
    ) -> EGLBoolean;
    fn StreamConsumerGLTextureExternalAttribsNV(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
        attrib_list: *mut EGLAttrib,
    ) -> EGLBoolean;
    fn QueryDisplayAttribNV(dpy: EGLDisplay, attribute: EGLint, value: *mut EGLAttrib) -> EGLBoolean;
    fn SetStreamMetadataNV(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
        n: EGLint,
        offset: EGLint,
        size: EGLint,
        data: *const c_void,
    ) -> EGLBoolean;
    fn QueryStreamMetadataNV(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
        name: EGLenum,
        n: EGLint,
        offset: EGLint,
        size: EGLint,
        data: *mut c_void,
    ) -> EGLBoolean;
    fn ResetStreamNV(dpy: EGLDisplay, stream: EGLStreamKHR) -> EGLBoolean;
    fn CreateStreamSyncNV(
        dpy: EGLDisplay,
        stream: EGLStreamKHR,
        r#type: EGLenum,
        attrib_list: *const EGLint,
    ) -> EGLSyncKHR;
    fn CreateFenceSyncNV(
        dpy: EGLDisplay,
        condition: EGLenum,
        attrib_list: *const EGLint,
    ) -> EGLSyncNV;
    fn DestroySyncNV(sync: EGLSyncNV) -> EGLBoolean;
    fn FenceNV(sync: EGLSyncNV) -> EGLBoolean;
    fn ClientWaitSyncNV(sync: EGLSyncNV, flags: EGLint, timeout: EGLTimeNV) -> EGLint;
    fn SignalSyncNV(sync: EGLSyncNV, mode: EGLenum) -> EGLBoolean;
    fn GetSyncAttribNV(sync: EGLSyncNV, attribute: EGLint, value: *mut EGLint) -> EGLBoolean;
    fn GetSystemTimeFrequencyNV() -> EGLuint64NV;
    fn GetSystemTimeNV() -> EGLuint64NV;
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::ffi::c_void;
    use std::ptr::null_mut;

    use super::*;

    unsafe extern "C" fn fake_get_system_time() -> EGLuint64NV {
        42
    }

    #[test]
    fn repopulating_resolves_every_slot_again() {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut resolve = |name: &std::ffi::CStr| {
            *counts
                .entry(name.to_string_lossy().into_owned())
                .or_default() += 1;
            null_mut::<c_void>()
        };

        let _ext = unsafe { ExtApi::load_with(&mut resolve) };
        // the reset path rebuilds the table wholesale through the resolver
        let _ext = unsafe { ExtApi::load_with(&mut resolve) };

        assert_eq!(counts.len(), 91);
        assert!(counts.values().all(|&count| count == 2));
        assert_eq!(counts.get("eglCreateImageKHR"), Some(&2));
    }

    #[test]
    fn forwards_through_resolved_pointer() {
        let ext = unsafe {
            ExtApi::load_with(|name| {
                if name.to_bytes() == b"eglGetSystemTimeNV" {
                    fake_get_system_time as *mut c_void
                } else {
                    null_mut()
                }
            })
        };

        assert!(ext.GetSystemTimeNV.is_loaded());
        assert!(!ext.CreateImageKHR.is_loaded());
        assert_eq!(unsafe { ext.GetSystemTimeNV() }, 42);
    }
}
