use clap::Parser;
use miette::Result;
use fplot::cli::{Cli, Commands};
use fplot::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    fplot::cli::init_logging(cli.verbose);
    let printer = Printer::new();

    match cli.command {
        Commands::Draw(args) => fplot::cli::draw::run(args, &printer)?,
        Commands::Check(args) => fplot::cli::check::run(args, &printer)?,
        Commands::Normalize(args) => fplot::cli::normalize::run(args, &printer)?,
        Commands::Init(args) => fplot::cli::init::run(args, &printer)?,
        Commands::Completions(args) => fplot::cli::completions::run(args)?,
    }

    Ok(())
}
