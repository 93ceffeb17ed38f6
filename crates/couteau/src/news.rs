use crate::prelude::*;
use crate::render::{rule, Render};
use colored::Colorize;
use couteau_core::news::{NewsFeed, DEFAULT_FEED};

#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// Root URL of a WordPress site
    #[arg(short, long, env = "COUTEAU_NEWS_FEED", default_value = DEFAULT_FEED)]
    pub feed: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    let tool = crate::config::EndpointConfig::from_env().news_tool();
    crate::render::run_once(tool, &options.feed, options.json, &global).await
}

impl Render for NewsFeed {
    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", rule().bright_cyan()));
        out.push_str(&format!("{}\n", "LATEST NEWS".bright_cyan().bold()));
        out.push_str(&format!("{}\n", rule().bright_cyan()));

        for (idx, article) in self.articles.iter().enumerate() {
            out.push_str(&format!(
                "\n{} {}\n",
                format!("[{}]", idx + 1).yellow().bold(),
                article.title.white().bold()
            ));
            out.push_str(&format!(
                "    {}: {}\n",
                "Date".green(),
                article.published.as_deref().unwrap_or(&article.date)
            ));
            out.push_str(&format!("    {}\n", article.excerpt));
            out.push_str(&format!(
                "    {}: {}\n",
                "Read".green(),
                article.link.cyan().underline()
            ));
            if let Some(image) = &article.image_url {
                out.push_str(&format!("    {}: {}\n", "Image".green(), image.bright_black()));
            }
        }
        out
    }
}
