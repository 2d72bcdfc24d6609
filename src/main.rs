use clap::Parser;
use gridmask::cli::{Cli, Commands};
use gridmask::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Masks(args) => {
            gridmask::cli::masks::run(args, &printer)?;
        }
        Commands::Ranges(args) => {
            gridmask::cli::ranges::run(args, &printer)?;
        }
        Commands::Fill(args) => gridmask::cli::fill::run(args, &printer)?,
        Commands::Composite(args) => gridmask::cli::composite::run(args, &printer)?,
        Commands::Preview(args) => {
            gridmask::cli::preview::run(args, &printer)?;
        }
        Commands::Completions(args) => gridmask::cli::completions::run(args)?,
    }

    Ok(())
}
