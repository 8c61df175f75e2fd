use anyhow::{Result, anyhow};
use kagisashi::Config;
use kagisashi::inject::{self, InjectError, PLACEHOLDER};

fn main() -> Result<()> {
    let config = Config::from_cli()?;
    run(&config)
}

fn run(config: &Config) -> Result<()> {
    if config.api_key.is_empty() {
        eprintln!("Warning: API_KEY environment variable is not set.");
        eprintln!("The app will work but API calls may fail.");
        eprintln!(
            "To set it locally, run: export API_KEY=your_key_here (Linux/Mac) or set API_KEY=your_key_here (Windows)"
        );
    }

    match inject::inject_file(&config.target_path, &config.api_key) {
        Ok(outcome) => {
            if outcome.occurrences == 0 {
                eprintln!(
                    "Warning: {PLACEHOLDER} placeholder not found in index.html. It may have already been replaced."
                );
            }
            if config.api_key.is_empty() {
                println!("✓ index.html processed (API key was empty)");
            } else {
                println!("✓ API key injected into index.html");
            }
            Ok(())
        }
        Err(InjectError::TargetMissing(path)) => Err(anyhow!(
            "index.html not found at {}. Run the web build first.",
            path.display()
        )),
        Err(err) => Err(err.into()),
    }
}
