use crate::filter::{Filter, DEFAULT_STATE};
use clap::{Arg, ArgAction, ArgMatches, Command};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Pulls(Filter),
    Issues(Filter),
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub log_level: Option<String>,
    pub team: String,
    pub action: Action,
}

fn filter_args() -> [Arg; 4] {
    [
        Arg::new("state")
            .short('s')
            .long("state")
            .num_args(1)
            .value_parser(["open", "closed", "all"])
            .default_value(DEFAULT_STATE)
            .help("Filter by state"),
        Arg::new("milestone")
            .short('m')
            .long("milestone")
            .num_args(1)
            .help("Milestone to filter on"),
        Arg::new("user")
            .short('u')
            .long("user")
            .num_args(1)
            .help("Only show items opened by this user"),
        Arg::new("new")
            .short('n')
            .long("new")
            .action(ArgAction::SetTrue)
            .help("Only show items created in the last 24 hours"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("teams")
        .about("Manage GitHub issues and pull requests for a team's repositories")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("team")
                .short('t')
                .long("team")
                .num_args(1)
                .required(true)
                .help("Team name to manage (in org/teamname format)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .num_args(1)
                .help("Override RUST_LOG level (e.g., info, debug)"),
        )
        .subcommand(
            Command::new("pulls")
                .about("Displays PRs for the team's repositories")
                .args(filter_args()),
        )
        .subcommand(
            Command::new("issues")
                .about("Displays issues for the team's repositories")
                .args(filter_args()),
        )
        .subcommand(Command::new("list").about("Lists the team's repositories"))
}

fn filter_from(matches: &ArgMatches) -> Filter {
    Filter {
        milestone: matches.get_one::<String>("milestone").cloned(),
        user: matches.get_one::<String>("user").cloned(),
        state: matches
            .get_one::<String>("state")
            .cloned()
            .unwrap_or_else(|| DEFAULT_STATE.to_string()),
        new: matches.get_flag("new"),
    }
}

pub fn parse_matches(matches: &ArgMatches) -> CliOptions {
    let action = match matches.subcommand() {
        Some(("pulls", sub)) => Action::Pulls(filter_from(sub)),
        Some(("issues", sub)) => Action::Issues(filter_from(sub)),
        _ => Action::List,
    };
    CliOptions {
        log_level: matches.get_one::<String>("log-level").cloned(),
        team: matches
            .get_one::<String>("team")
            .cloned()
            .unwrap_or_default(),
        action,
    }
}

pub fn init_logging(level: Option<&str>) {
    // Explicit level wins, else RUST_LOG, else warn.
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(lvl) = level {
        builder.parse_filters(lvl);
    }
    builder.init();
}
