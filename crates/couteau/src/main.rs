use crate::prelude::*;
use clap::Parser;

mod age;
mod config;
mod controller;
mod error;
mod fetch;
mod gender;
mod news;
mod pokemon;
mod prelude;
mod render;
mod session;
mod universities;
mod weather;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "A pocket toolbox of public lookup APIs"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "COUTEAU_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Predict the gender of a first name (genderize.io)
    Gender(crate::gender::Options),

    /// Estimate the age behind a first name (agify.io)
    Age(crate::age::Options),

    /// List the universities of a country (hipolabs)
    Universities(crate::universities::Options),

    /// Current weather for a location (wttr.in)
    Weather(crate::weather::Options),

    /// Pokédex entry by name or number (PokéAPI)
    Pokemon(crate::pokemon::Options),

    /// Latest posts of a WordPress site
    News(crate::news::Options),

    /// Interactive session: one lookup per line, results printed as they settle
    Session(crate::session::Options),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Gender(options) => crate::gender::run(options, app.global).await,
        SubCommands::Age(options) => crate::age::run(options, app.global).await,
        SubCommands::Universities(options) => crate::universities::run(options, app.global).await,
        SubCommands::Weather(options) => crate::weather::run(options, app.global).await,
        SubCommands::Pokemon(options) => crate::pokemon::run(options, app.global).await,
        SubCommands::News(options) => crate::news::run(options, app.global).await,
        SubCommands::Session(options) => crate::session::run(options, app.global).await,
    }
}
