//! C ABI consumed by the kiosk firmware loop.
//!
//! `config` installs custom TOML before the first session; `session` feeds
//! HID reports and hands back draw/play/volume instructions.

use std::ffi::{c_char, CStr};
use std::path::Path;

pub mod config;
pub mod session;

#[cfg(test)]
mod tests;

pub use config::*;
pub use session::*;

/// Move `value` to the heap; the firmware gets it back through [`free_handle`].
pub(crate) fn into_handle<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// # Safety
/// `handle` is null or came from [`into_handle`] and was not freed yet.
pub(crate) unsafe fn free_handle<T>(handle: *mut T) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Borrow a NUL-terminated UTF-8 string from the firmware.
pub(crate) unsafe fn utf8_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Bind checked FFI arguments or return `$on_err` from the caller.
///
/// `str:` expects UTF-8 text, `ref:`/`mut:` a non-null handle.
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::utf8_arg($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; ref: $name:ident = $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            return $on_err;
        }
        let $name = unsafe { &*$ptr };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; mut: $name:ident = $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            return $on_err;
        }
        let $name = unsafe { &mut *$ptr };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

/// `extern "C" fn $fn_name(handle)` releasing a handle from [`into_handle`].
macro_rules! ffi_close {
    ($fn_name:ident, $T:ty) => {
        #[no_mangle]
        pub extern "C" fn $fn_name(handle: *mut $T) {
            unsafe { $crate::ffi::free_handle(handle) };
        }
    };
}

pub(crate) use ffi_close;
pub(crate) use ffi_guard;

#[no_mangle]
pub extern "C" fn kana_engine_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr().cast()
}

/// Start writing JSON spans under `log_dir`. No-op without the `trace`
/// feature or on a second call.
#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn kana_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir));
}
