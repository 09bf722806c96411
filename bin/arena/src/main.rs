//! Arena Binary
//!
//! Runs Kuhn poker matchups between equilibrium, human-like, and
//! exploitative agents, prints a report per matchup, and journals every
//! hand as JSON.
//!
//! Options: --hands, --seed, --alpha, --matchup, --mirror, --output, --config
mod args;
mod matchup;
mod settings;

use args::Args;
use clap::Parser;
use settings::Settings;

fn main() -> anyhow::Result<()> {
    kuhn_core::log();
    kuhn_core::brb();
    let args = Args::parse();
    let settings = match args.config.as_ref() {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .overridden(&args)?;
    settings.validate()?;
    log::info!("[arena] {}", settings);
    let journal = kuhn_analysis::Journal::new(settings.output())?;
    for matchup in settings.matchup().expand() {
        let session = matchup.run(&settings)?;
        let summary = kuhn_analysis::Summary::new(matchup.label(), &session);
        println!("{}", summary);
        journal.save_session(matchup.label(), &session)?;
        journal.save_summary(&summary)?;
        if kuhn_core::interrupted() {
            log::warn!("[arena] stopping before remaining matchups");
            break;
        }
    }
    Ok(())
}
