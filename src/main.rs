use clap::Parser;
use small_utils::utils::{logger, validation::Validate};
use small_utils::{greeting, stats, textfile, CliConfig, Result};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-utils");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    config.validate()?;
    run(&config)?;

    tracing::info!("All operations completed");
    Ok(())
}

fn run(config: &CliConfig) -> Result<()> {
    let avg = stats::average(&config.numbers)?;
    println!("Average is: {}", avg);

    greeting::greet_user(&config.name);

    textfile::write_initial(&config.output_path, "Initial content\n")?;
    let content = textfile::read_all(&config.output_path)?;
    println!("File Content: {}", content);

    textfile::append(&config.output_path, "Appended content\n")?;
    for line in textfile::read_lines(&config.output_path)? {
        println!("{}", line?);
    }

    textfile::delete_file(&config.output_path)?;
    tracing::debug!("Removed {}", config.output_path);

    Ok(())
}
