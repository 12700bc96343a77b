use clap::Parser;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use tourney::args::AppArgs;
use tourney::engine::{Tournament, TournamentSummary};
use tourney::report::{rounds_table, standings_table};
use tourney::simulation::{run_to_completion, RandomResultSource};
use tourney::store::{save_summary, store_path, LOG_FILENAME};
use tourney::types::AppResult;

fn main() -> AppResult<()> {
    let args = AppArgs::parse();

    let logfile_path = store_path(LOG_FILENAME)?;
    let logfile = FileAppender::builder()
        .append(false)
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build(logfile_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(args.log_level))?;

    log4rs::init_config(config)?;

    let config = args.tournament_config()?;
    let mut source = RandomResultSource::new(config.random_seed);
    let mut tournament = Tournament::new(config, args.roster())?;
    run_to_completion(&mut tournament, &mut source)?;

    let summary = TournamentSummary::from_tournament(&tournament);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} ({}, {} players)\n",
            tournament.config().name,
            tournament.format(),
            tournament.players().len()
        );
        println!("{}", rounds_table(&tournament));
        println!("{}", standings_table(&tournament));
    }

    if let Some(path) = args.output.as_ref() {
        save_summary(path, &summary)?;
    }

    Ok(())
}
