use anyhow::Context as _;

use egl::libegl;

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!(
            "{level:<5} {target} > {text}",
            level = record.level(),
            target = record.target(),
            text = record.args(),
        );
    }

    fn flush(&self) {}
}

impl Logger {
    fn init() {
        log::set_logger(&Logger).expect("could not set logger");
        log::set_max_level(log::LevelFilter::Trace);
    }
}

fn main() -> anyhow::Result<()> {
    Logger::init();

    let api = egl::EglApi::load().context("could not load egl")?;

    unsafe {
        let dpy = api.GetDisplay(libegl::DEFAULT_DISPLAY);
        if dpy == libegl::NO_DISPLAY {
            anyhow::bail!("could not get default display");
        }

        let (mut major, mut minor) = (0, 0);
        if api.Initialize(dpy, &mut major, &mut minor) == libegl::FALSE {
            anyhow::bail!("could not initialize display: {:#x}", api.GetError());
        }
        log::info!("initialized egl version {major}.{minor}");

        for (what, name) in [
            ("vendor", libegl::VENDOR),
            ("version", libegl::VERSION),
            ("client apis", libegl::CLIENT_APIS),
        ] {
            let value = api.QueryString(dpy, name as libegl::EGLint);
            if !value.is_null() {
                let value = std::ffi::CStr::from_ptr(value);
                log::info!("{what}: {}", value.to_string_lossy());
            }
        }

        for extension in [
            "EGL_KHR_image_base",
            "EGL_KHR_fence_sync",
            "EGL_EXT_platform_wayland",
        ] {
            log::info!(
                "{extension}: {}",
                api.is_display_extension_supported(dpy, extension),
            );
        }

        api.Terminate(dpy);
    }

    Ok(())
}
