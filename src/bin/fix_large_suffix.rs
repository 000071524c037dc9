use clap::Parser;
use nommsters_catalog::migrate;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "fix-large-suffix",
    about = "Point card images at their _large.jpg files",
    long_about = "Rewrites every card image path ending in .jpg but not _large.jpg and writes the result to a new file."
)]
struct Cli {
    #[arg(value_name = "INPUT", help = "Catalog to read")]
    input: PathBuf,
    #[arg(value_name = "OUTPUT", help = "Where to write the updated catalog")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match migrate::fix_large_suffix_file(&cli.input, &cli.output) {
        Ok(fixed) => {
            println!("Updated {} image paths.", fixed);
            println!("Wrote {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
