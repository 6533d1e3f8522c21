//! Command: print version information.

/// Version string baked in at build time.
#[must_use]
pub const fn version() -> &'static str {
    env!("DOTS_VERSION")
}

/// Print the dots version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("dots {}", version());
}
