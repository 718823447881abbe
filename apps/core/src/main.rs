fn main() {
    if let Err(error) = quickrun_core::logging::init() {
        eprintln!("[quickrun] logging disabled: {error}");
    }

    if let Err(error) = quickrun_core::runtime::run() {
        tracing::error!("runtime failed: {error}");
        eprintln!("[quickrun] runtime failed: {error}");
        std::process::exit(1);
    }
}
