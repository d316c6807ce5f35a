//! Version command.

/// The current version of Pixora, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line printed by `--version`.
pub fn version_line() -> String {
    format!("pixora {}", VERSION)
}

/// Handle the --version command: print the version and exit.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}
