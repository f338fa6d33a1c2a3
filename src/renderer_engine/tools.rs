use gl::types::*;
use log::{info, warn};
use std::collections::HashSet;
use std::ffi::CStr;
use std::os::raw::c_void;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGED_IDS: Mutex<HashSet<u32>> = Mutex::new(HashSet::new());
}

#[macro_export]
macro_rules! cstr {
    ($s:expr) => {
        concat!($s, "\0").as_ptr() as *const i8
    };
}

/// Affiche les informations OpenGL / GPU du contexte actuel
/// # Safety
///
/// L'appelant doit s'assurer que le contexte OpenGL est valide et actif.
pub unsafe fn show_opengl_context_info() {
    // Vendor / Renderer / Version / GLSL
    let vendor = CStr::from_ptr(gl::GetString(gl::VENDOR) as *const i8)
        .to_str()
        .unwrap_or("Unknown");
    let renderer = CStr::from_ptr(gl::GetString(gl::RENDERER) as *const i8)
        .to_str()
        .unwrap_or("Unknown");
    let version = CStr::from_ptr(gl::GetString(gl::VERSION) as *const i8)
        .to_str()
        .unwrap_or("Unknown");
    let glsl_version = CStr::from_ptr(gl::GetString(gl::SHADING_LANGUAGE_VERSION) as *const i8)
        .to_str()
        .unwrap_or("Unknown");

    info!("🖥 OpenGL context info:");
    info!("  Vendor   : {}", vendor);
    info!("  Renderer : {}", renderer);
    info!("  OpenGL   : {}", version);
    info!("  GLSL     : {}", glsl_version);

    // Consommer le glerror si nécessaire
    let err = gl::GetError();
    if err != gl::NO_ERROR {
        warn!("glerror consumed after getting context info: 0x{:X}", err);
    }
}

/// Callback OpenGL debug, safe pour Rust
extern "system" fn gl_debug_callback(
    source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    _length: GLsizei,
    message: *const i8,
    _user_param: *mut c_void,
) {
    // Unsafe uniquement pour lire le C string
    let msg = unsafe { CStr::from_ptr(message).to_string_lossy() };

    if severity == gl::DEBUG_SEVERITY_NOTIFICATION {
        return; // ignore notifications
    }

    // Ne logue qu’une fois par ID
    let mut logged = LOGGED_IDS.lock().unwrap();
    if !logged.insert(id) {
        return;
    }

    let src_str = match source {
        gl::DEBUG_SOURCE_API => "API",
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => "Window System",
        gl::DEBUG_SOURCE_SHADER_COMPILER => "Shader Compiler",
        gl::DEBUG_SOURCE_THIRD_PARTY => "Third Party",
        gl::DEBUG_SOURCE_APPLICATION => "Application",
        _ => "Other",
    };

    let type_str = match type_ {
        gl::DEBUG_TYPE_ERROR => "Error",
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated Behavior",
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined Behavior",
        gl::DEBUG_TYPE_PORTABILITY => "Portability",
        gl::DEBUG_TYPE_PERFORMANCE => "Performance",
        _ => "Other",
    };

    let sev_str = match severity {
        gl::DEBUG_SEVERITY_HIGH => "High",
        gl::DEBUG_SEVERITY_MEDIUM => "Medium",
        gl::DEBUG_SEVERITY_LOW => "Low",
        _ => "Unknown",
    };

    warn!(
        "[OpenGL Debug] id: {:X}, source: {}, type: {}, severity: {}, message: {}",
        id, src_str, type_str, sev_str, msg
    );
}

/// Configure le debug OpenGL via `glDebugMessageCallback`.
///
/// # Safety
///
/// Cette fonction est unsafe car elle enregistre un callback C vers Rust.
/// L'appelant doit s'assurer que :
/// - Le contexte OpenGL est actif.
/// - Le callback reste valide pendant toute la durée du contexte.
pub unsafe fn setup_opengl_debug() {
    gl::Enable(gl::DEBUG_OUTPUT);
    gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS); // important pour que le callback soit synchrone

    gl::DebugMessageCallback(Some(gl_debug_callback), std::ptr::null_mut());

    gl::DebugMessageControl(
        gl::DONT_CARE,
        gl::DONT_CARE,
        gl::DONT_CARE,
        0,
        std::ptr::null(),
        gl::TRUE,
    );
}

/// Formats a byte size into a human-readable string with appropriate units (bytes, KB, MB, GB).
pub fn format_bytes(size: isize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let size_f64 = size as f64;

    if size_f64 >= GB {
        format!("{:.3} GB", size_f64 / GB)
    } else if size_f64 >= MB {
        format!("{:.3} MB", size_f64 / MB)
    } else if size_f64 >= KB {
        format!("{:.3} KB", size_f64 / KB)
    } else {
        format!("{} bytes", size)
    }
}
