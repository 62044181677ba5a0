use cart_history::SessionConfig;
use cart_history::shell::{HELP_TEXT, Shell};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cart_history::init_logging();

    // Only `--config <path>` is accepted
    let mut args = std::env::args().skip(1);
    let mut config_path: Option<PathBuf> = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown argument: {}", other).into()),
        }
    }

    let config = SessionConfig::resolve(config_path.as_deref())?;
    tracing::info!(capacity = config.history_capacity, "starting cart session");

    println!("=== Cart History ===");
    println!("{}\n", HELP_TEXT);

    let mut shell = Shell::new(&config)?;
    let stdin = std::io::stdin();
    shell.run(stdin.lock(), std::io::stdout())?;

    Ok(())
}
