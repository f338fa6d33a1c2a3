use cargo_metadata::MetadataCommand;

/// Exporte les versions des dépendances graphiques vers l'environnement de
/// compilation ; elles sont relues par `utils::show_rust_core_dependencies`.
fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    let Ok(metadata) = MetadataCommand::new().exec() else {
        // Pas de metadata (réseau coupé, etc.) : les versions resteront "Unknown".
        return;
    };

    for name in ["gl", "glfw", "glam", "rand"] {
        if let Some(pkg) = metadata.packages.iter().find(|p| p.name.to_string() == name) {
            println!(
                "cargo:rustc-env={}_VERSION={}",
                name.to_uppercase(),
                pkg.version
            );
        }
    }
}
