use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "scormd",
    about = "SCORM runtime bridge — attempt tracker server",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the attempt tracker server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:1484")]
    pub bind: String,

    /// Weight / maximum grade for the attempt
    #[arg(long, default_value = "1.0")]
    pub weight: f64,

    /// Serve an unscored attempt
    #[arg(long)]
    pub unscored: bool,
}
