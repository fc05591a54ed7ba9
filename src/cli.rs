use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::dates::DateFilter;

/// Simple CLI for 'monecole'
#[derive(Parser, Debug)]
#[command(name = "monecole")]
#[command(version)]
#[command(about = "Simple CLI for the 'monecole' ENT", long_about = None)]
pub struct Cli {
    /// Account login (email)
    #[arg(short, long, env = "ENT_USERNAME")]
    pub username: String,

    /// Account password
    #[arg(short, long, env = "ENT_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// URL of the ENT (ex: https://monecole-ent.essonne.fr)
    #[arg(long, env = "ENT_URL")]
    pub url: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Homework sets
    Homeworks(HomeworksArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct HomeworksArgs {
    #[command(subcommand)]
    pub action: Option<HomeworksAction>,
}

impl HomeworksArgs {
    /// Sub-command to run, `list` when omitted.
    #[must_use]
    pub fn action(&self) -> HomeworksAction {
        self.action.clone().unwrap_or(HomeworksAction::List)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum HomeworksAction {
    /// List homework sets
    List,
    /// Show the content of one homework set
    Get(GetArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[command(group(
    ArgGroup::new("period")
        .args(["today", "tomorrow", "thisweek", "nextweek"])
        .multiple(false)
))]
pub struct GetArgs {
    /// Homework set id, as printed by `homeworks list`
    pub id: String,

    /// Only today's homeworks
    #[arg(long)]
    pub today: bool,

    /// Only tomorrow's homeworks
    #[arg(long)]
    pub tomorrow: bool,

    /// Homeworks from Monday to Sunday of the current week
    #[arg(long)]
    pub thisweek: bool,

    /// Homeworks from Monday to Sunday of next week
    #[arg(long)]
    pub nextweek: bool,
}

impl GetArgs {
    /// Selected period, `None` when no flag was given.
    #[must_use]
    pub fn filter(&self) -> Option<DateFilter> {
        if self.today {
            Some(DateFilter::Today)
        } else if self.tomorrow {
            Some(DateFilter::Tomorrow)
        } else if self.thisweek {
            Some(DateFilter::ThisWeek)
        } else if self.nextweek {
            Some(DateFilter::NextWeek)
        } else {
            None
        }
    }
}
