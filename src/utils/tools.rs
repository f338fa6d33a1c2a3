use log::info;

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    // Info système (Rust version, OS)
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    // Versions exportées par build.rs (via cargo_metadata)
    let gl_version = option_env!("GL_VERSION").unwrap_or("Unknown");
    let glfw_version = option_env!("GLFW_VERSION").unwrap_or("Unknown");
    let glam_version = option_env!("GLAM_VERSION").unwrap_or("Unknown");

    info!("Rust core dependancies");
    info!("  GL   version: {}", gl_version);
    info!("  GLFW version: {}", glfw_version);
    info!("  GLAM version: {}", glam_version);
}
