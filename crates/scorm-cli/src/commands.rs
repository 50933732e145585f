use colored::Colorize;

use scorm_server::{ScormServer, ServerConfig};

use crate::cli::{Cli, Command, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind.parse()?,
        weight: args.weight,
        has_score: !args.unscored,
    };
    println!(
        "{} SCORM tracker on {} (weight: {}, scored: {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.weight,
        config.has_score,
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(ScormServer::new(config).serve())?;
    Ok(())
}
