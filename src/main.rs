use clap::Parser;
use miette::Result;
use pft::cli::{logging, Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    logging::init(cli.global.verbose, cli.global.quiet);

    match cli.command {
        Commands::New(args) => pft::cli::commands::new::run(args, &cli.global),
        Commands::Show(args) => pft::cli::commands::show::run(args, &cli.global),
        Commands::Check(args) => pft::cli::commands::check::run(args, &cli.global),
        Commands::Probe(args) => pft::cli::commands::probe::run(args, &cli.global),
        Commands::Build(args) => pft::cli::commands::build::run(args, &cli.global),
        Commands::Completions(args) => pft::cli::commands::completions::run(args),
    }
}
