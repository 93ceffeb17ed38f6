use crate::prelude::*;
use crate::render::{rule, Render};
use colored::Colorize;
use couteau_core::universities::UniversityList;

#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// Country name in English (e.g. "Dominican Republic")
    pub country: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    let tool = crate::config::EndpointConfig::from_env().universities_tool();
    crate::render::run_once(tool, &options.country, options.json, &global).await
}

impl Render for UniversityList {
    fn render(&self) -> String {
        let mut table = new_table();
        table.set_titles(prettytable::row!["#", "Name", "Domain", "Website"]);

        for (idx, uni) in self.universities.iter().enumerate() {
            table.add_row(prettytable::row![
                idx + 1,
                uni.name,
                uni.primary_domain().unwrap_or("-"),
                uni.website().unwrap_or("-")
            ]);
        }

        let mut out = String::new();
        out.push_str(&format!("{}\n", rule().bright_cyan()));
        out.push_str(&format!(
            "{}\n",
            format!("{} UNIVERSITIES FOUND", self.total).bright_cyan().bold()
        ));
        out.push_str(&format!("{}\n", rule().bright_cyan()));
        out.push_str(&table.to_string());
        out
    }
}
