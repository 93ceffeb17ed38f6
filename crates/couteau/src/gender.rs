use crate::prelude::*;
use crate::render::{rule, Render};
use colored::Colorize;
use couteau_core::gender::{Gender, GenderResult};

#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// First name to look up (e.g. "Maria")
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    let tool = crate::config::EndpointConfig::from_env().gender_tool();
    crate::render::run_once(tool, &options.name, options.json, &global).await
}

impl Render for GenderResult {
    fn render(&self) -> String {
        let badge = match self.gender {
            Gender::Male => self.gender.label().bright_blue().bold(),
            Gender::Female => self.gender.label().bright_magenta().bold(),
        };

        let mut out = String::new();
        out.push_str(&format!("{}\n", rule().bright_cyan()));
        out.push_str(&format!("{}  {}\n", self.name.white().bold(), badge));
        out.push_str(&format!("{}\n", rule().bright_cyan()));
        out.push_str(&format!(
            "{}: {}%  |  {}: {}",
            "Probability".green(),
            self.probability_percent(),
            "Samples".green(),
            self.count
        ));
        out
    }
}
