//! Command-line scrambler and simulator for WCA twisty puzzles.

mod cli;
mod prefs;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;
    env_logger::builder().init();

    let args = cli::Args::parse();
    log::debug!("{}", twistysim_core::ENGINE_VERSION_STRING);

    let prefs = prefs::Prefs::load(args.config.as_deref());
    cli::exec(args, &prefs, &mut std::io::stdout().lock())
}
