use std::io;
use teams::cli::{self, Action, CliOptions};
use teams::commands::{self, Context};
use teams::config::{Config, TeamSpec};
use teams::github::GitHubClient;
use teams::render::Table;

#[tokio::main(flavor = "current_thread")] // requests are issued one at a time
async fn main() {
    let matches = cli::build_cli().get_matches();
    let opts = cli::parse_matches(&matches);

    cli::init_logging(opts.log_level.as_deref());

    if let Err(e) = run(opts).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(opts: CliOptions) -> anyhow::Result<()> {
    let spec = TeamSpec::parse(&opts.team)?;
    let cfg = Config::from_env()?;
    let api = GitHubClient::new(cfg)?;
    let ctx = Context::resolve(api, &spec).await?;

    let mut out = io::stdout().lock();
    let table = Table::new();
    match opts.action {
        Action::Pulls(filter) => commands::run_pulls(&ctx, &filter, table, &mut out).await?,
        Action::Issues(filter) => commands::run_issues(&ctx, &filter, table, &mut out).await?,
        Action::List => commands::run_list(&ctx, table, &mut out)?,
    }
    Ok(())
}
