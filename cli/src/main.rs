use clap::{Parser, Subcommand};
use courtside_cli::CliContext;
use courtside_cli::commands;
use courtside_cli::readline;

#[tokio::main]
async fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut ctx = CliContext::init().await.map_err(|e| e.to_string())?;
    commands::render(&ctx)?;

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                println!("{err}");
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "cli")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the configured data directory and dataset files
    Config,
    /// Change the data directory and reload every dataset
    SetDirectory {
        #[arg(short, long)]
        path: String,
    },
    /// List playoff tiers present in the advanced table
    ListTiers,
    /// List the team-season labels available for selection
    ListTeams,
    /// List the selectable statistics
    ListStats,
    /// Select playoff tiers by number (no values = all tiers)
    Tiers { values: Vec<i64> },
    /// Select team-season labels (no values = checkbox default)
    Teams { labels: Vec<String> },
    /// Toggle the "select all teams" checkbox
    AllTeams {
        #[arg(long)]
        on: bool,
    },
    /// Pick the line-chart statistic by column name
    Stat { name: String },
    /// Pick the three 3D-view statistics by column name
    Dims { names: Vec<String> },
    /// Recompute and summarize all three views
    Render,
    /// Print one view's chart spec as JSON (parallel | line | scatter)
    Export { view: String },
    Exit,
}

async fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "courtside".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Config) => commands::show_config(ctx)?,
        Some(Commands::SetDirectory { path }) => commands::set_directory(path, ctx).await?,
        Some(Commands::ListTiers) => commands::list_tiers(ctx)?,
        Some(Commands::ListTeams) => commands::list_teams(ctx)?,
        Some(Commands::ListStats) => commands::list_stats()?,
        Some(Commands::Tiers { values }) => commands::set_tiers(values, ctx)?,
        Some(Commands::Teams { labels }) => commands::set_teams(labels, ctx)?,
        Some(Commands::AllTeams { on }) => commands::set_all_teams(*on, ctx)?,
        Some(Commands::Stat { name }) => commands::set_stat(name, ctx)?,
        Some(Commands::Dims { names }) => commands::set_dims(names, ctx)?,
        Some(Commands::Render) => commands::render(ctx)?,
        Some(Commands::Export { view }) => commands::export(view, ctx)?,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
