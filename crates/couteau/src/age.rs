use crate::prelude::*;
use crate::render::{paint, rule, Render};
use colored::Colorize;
use couteau_core::age::AgeResult;

#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// First name to look up (e.g. "Carlos")
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    let tool = crate::config::EndpointConfig::from_env().age_tool();
    crate::render::run_once(tool, &options.name, options.json, &global).await
}

impl Render for AgeResult {
    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", rule().bright_cyan()));
        out.push_str(&format!("{}\n", self.name.white().bold()));
        out.push_str(&format!("{}\n", rule().bright_cyan()));
        out.push_str(&format!(
            "{} years  {}\n",
            self.age.to_string().bright_yellow().bold(),
            paint(&self.category.label().to_uppercase(), self.category.color()).bold()
        ));
        out.push_str(&format!("{}: {}", "Samples".green(), self.count));
        out
    }
}
