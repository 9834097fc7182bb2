//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    use std::io::{self, BufRead, Write};
    use textboard_app::Shell;
    use textboard_core::BoardConfig;

    env_logger::init();
    log::info!("Starting Textboard");

    // Optional JSON config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| format!("cannot read {path}: {e}"))
                .and_then(|json| BoardConfig::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(config) => {
                    log::info!("Loaded config from {}", path);
                    config
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(2);
                }
            }
        }
        None => BoardConfig::default(),
    };

    let mut shell = Shell::with_config(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        };
        match shell.handle_line(&line) {
            Ok(Some(output)) => {
                if writeln!(stdout, "{output}").is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => eprintln!("error: {e}"),
        }
        if shell.quit_requested() {
            break;
        }
    }

    log::info!("Exiting Textboard");
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
