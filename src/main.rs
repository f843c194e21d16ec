use chrono::{Local, NaiveDate};
use clap::Parser;
use moodjour::application::init::init;
use moodjour::application::manage_config::CONFIG_KEYS;
use moodjour::application::{
    ConfigService, EntriesService, GoalsService, HabitsService, InsightsQuery, InsightsService,
    LogEntryService, LogRequest,
};
use moodjour::cli::{
    format_entry, format_entry_list, format_goal_list, format_habit_list, format_insights,
    format_mood_table, Cli, Commands, GoalAction, HabitAction,
};
use moodjour::domain::entry_date::resolve_date;
use moodjour::domain::GoalPeriod;
use moodjour::error::{MoodjourError, Result};
use moodjour::infrastructure::FileSystemRepository;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn optional_date(input: Option<String>) -> Result<Option<NaiveDate>> {
    input.map(|s| resolve_date(&s, today())).transpose()
}

fn goal_period(input: &str) -> Result<GoalPeriod> {
    GoalPeriod::from_str(input).map_err(MoodjourError::InvalidEntry)
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("moodjour - Terminal mood journal");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized moodjour journal at {}", path.display());
            Ok(())
        }
        Commands::Log {
            date,
            text,
            mood,
            mood_override,
            clear_override,
            sleep,
            done,
            undone,
            edit,
        } => {
            let repo = FileSystemRepository::discover()?;
            let request = LogRequest {
                date,
                text,
                mood,
                mood_override,
                clear_override,
                sleep_hours: sleep,
                done,
                undone,
                edit,
            };
            let outcome = LogEntryService::new(repo).execute(request, today())?;
            let verb = if outcome.created { "Created" } else { "Updated" };
            match outcome.entry.effective_mood() {
                Some(mood) => println!("{} entry for {} ({})", verb, outcome.entry.id, mood),
                None => println!("{} entry for {}", verb, outcome.entry.id),
            }
            Ok(())
        }
        Commands::List { from, to, limit } => {
            let repo = FileSystemRepository::discover()?;
            let entries =
                EntriesService::new(repo).list(optional_date(from)?, optional_date(to)?, limit)?;
            println!("{}", format_entry_list(&entries).trim_end());
            Ok(())
        }
        Commands::Show { date } => {
            let repo = FileSystemRepository::discover()?;
            let entry = EntriesService::new(repo).show(resolve_date(&date, today())?)?;
            print!("{}", format_entry(&entry));
            Ok(())
        }
        Commands::Insights {
            from,
            to,
            days,
            themes,
            json,
        } => {
            let repo = FileSystemRepository::discover()?;
            let query = InsightsQuery {
                from: optional_date(from)?,
                to: optional_date(to)?,
                days,
                themes,
            };
            let report = InsightsService::new(repo).execute(&query, today())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", format_insights(&report).trim_end());
            }
            Ok(())
        }
        Commands::Moods => {
            print!("{}", format_mood_table());
            Ok(())
        }
        Commands::Habits { action } => {
            let repo = FileSystemRepository::discover()?;
            let service = HabitsService::new(repo);
            match action.unwrap_or(HabitAction::List) {
                HabitAction::List => {
                    println!("{}", format_habit_list(&service.list()?).trim_end());
                }
                HabitAction::Add { id, label } => {
                    let habit = service.add(&id, &label)?;
                    println!("Tracking habit '{}' ({})", habit.id, habit.label);
                }
                HabitAction::Remove { id } => {
                    let habit = service.remove(&id)?;
                    println!("Stopped tracking habit '{}'", habit.id);
                }
            }
            Ok(())
        }
        Commands::Goals { action } => {
            let repo = FileSystemRepository::discover()?;
            let service = GoalsService::new(repo);
            let action = action.unwrap_or(GoalAction::List {
                period: None,
                all: false,
            });
            match action {
                GoalAction::List { period, all } => {
                    let period = period.as_deref().map(goal_period).transpose()?;
                    let goals = service.list(period, all)?;
                    println!("{}", format_goal_list(&goals).trim_end());
                }
                GoalAction::Add { text, period } => {
                    let goal = service.add(goal_period(&period)?, &text)?;
                    println!("Added {} goal {}: {}", goal.period, goal.id, goal.text);
                }
                GoalAction::Complete { id } => {
                    let goal = service.set_completed(id, true)?;
                    println!("Completed goal {}: {}", goal.id, goal.text);
                }
                GoalAction::Reopen { id } => {
                    let goal = service.set_completed(id, false)?;
                    println!("Reopened goal {}: {}", goal.id, goal.text);
                }
                GoalAction::Remove { id } => {
                    let goal = service.remove(id)?;
                    println!("Removed goal {}: {}", goal.id, goal.text);
                }
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                for (key, value) in service.list()? {
                    println!("{} = {}", key, value);
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: moodjour config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS.join(", "));
                Ok(())
            }
        }
    }
}
