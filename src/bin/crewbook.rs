// Binary entry point for the interactive roster.
use anyhow::{Context, Result};
use crewbook::command::CommandWord;
use crewbook::config::Config;
use crewbook::context::{AppContext, StandardContext};
use crewbook::logic::Logic;
use crewbook::storage::JsonStorage;
use crewbook::store::Model;
use crewbook::{cli, help, parser};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        cli::print_help("crewbook");
        return Ok(());
    }

    let mut override_root: Option<PathBuf> = None;
    let mut i = 1;
    while i < args.len() {
        if matches!(args[i].as_str(), "--root" | "-r") && i + 1 < args.len() {
            override_root = Some(args[i + 1].clone().into());
            i += 1;
        }
        i += 1;
    }

    let ctx = StandardContext::new(override_root);
    let config = Config::load(&ctx)?;
    init_logging(&ctx, &config)?;

    let roster_path = config.roster_path(&ctx)?;
    log::info!("Using roster file {}", roster_path.display());
    let mut logic = Logic::open_or_empty(JsonStorage::new(roster_path));
    if !logic.storage().can_save() {
        eprintln!("Roster file could not be read; changes will not be saved this session.");
    }

    run(&mut logic)
}

fn init_logging(ctx: &dyn AppContext, config: &Config) -> Result<()> {
    let log_path = ctx.get_log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    WriteLogger::init(
        config.level_filter(),
        ConfigBuilder::new().build(),
        file,
    )
    .context("Failed to initialise logger")?;
    Ok(())
}

fn run(logic: &mut Logic<JsonStorage>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match logic.execute(&line) {
            Ok(result) => {
                println!("{}", result.feedback);
                if result.show_help {
                    print!("{}", help::render_help());
                }
                if result.exit {
                    break;
                }
                if let Some(word) = parser::keyword_of(&line)
                    && shows_members(word)
                {
                    print_members(logic.model());
                }
            }
            Err(e) => println!("{}", e),
        }
        print!("> ");
        stdout.flush()?;
    }
    log::info!("Session ended");
    Ok(())
}

fn shows_members(word: CommandWord) -> bool {
    matches!(
        word,
        CommandWord::Padd
            | CommandWord::Delete
            | CommandWord::Edit
            | CommandWord::Find
            | CommandWord::List
            | CommandWord::Clear
    )
}

fn print_members(model: &dyn Model) {
    for (i, member) in model.filtered_member_list().iter().enumerate() {
        println!("{}. {}", i + 1, member);
    }
}
