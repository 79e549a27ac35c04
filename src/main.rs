#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), eframe::Error> {
    // Set up logging; RUST_LOG=debug shows individual drops
    env_logger::init();

    // Run the garden application
    digital_garden::run_app()
}

// The web build starts from the library's wasm entry point
#[cfg(target_arch = "wasm32")]
fn main() {}
