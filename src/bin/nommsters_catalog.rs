use clap::Parser;
use nommsters_catalog::{config, session, CatalogGenerator, ConsoleOperator};
use std::process::ExitCode;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(
    name = "nommsters-catalog",
    about = "Generate the card-gallery JSON catalog from the card spreadsheet",
    long_about = "Prompts for the spreadsheet, a version label and a destination, shows a summary, and writes the catalog only after confirmation."
)]
struct Cli {
    #[arg(
        long = "images-root",
        value_name = "DIR",
        default_value = config::IMAGES_ROOT,
        help = "Folder image paths are rooted at"
    )]
    images_root: String,
    #[arg(long, help = "Log each normalized card")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let generator = match CatalogGenerator::builder().images_root(cli.images_root).build() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut operator = ConsoleOperator::stdio();
    match session::run(&generator, &mut operator) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", e);
            ExitCode::FAILURE
        }
    }
}
