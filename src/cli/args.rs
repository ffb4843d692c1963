use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "taqwim", version, author, about = "A terminal Hijri calendar with Islamic events")]
pub struct Cli {
    /// Treat this Gregorian date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's Hijri date and the next Islamic event
    Today {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a month grid (defaults to the current Hijri month)
    Month {
        /// Hijri year (AH)
        #[arg(long, requires = "month")]
        year: Option<i32>,
        /// Hijri month (1-12)
        #[arg(long)]
        month: Option<u8>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a date between calendars (Gregorian to Hijri by default)
    Convert {
        /// Date as YYYY-MM-DD
        date: String,
        /// Read the date as Hijri and convert it to Gregorian
        #[arg(long)]
        to_gregorian: bool,
    },
    /// List Islamic events
    Events {
        /// Only events in this Hijri month (1-12)
        #[arg(long)]
        month: Option<u8>,
        /// Only events of this category (holiday, significant, historical, night)
        #[arg(long)]
        category: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the next Islamic event and when it falls
    Next,
    /// Print the calendar context used for assistant prompts
    Context {
        /// Wrap the context in a full prompt for this question
        question: Option<String>,
    },
    /// Show or update configuration
    Config {
        /// Month-name language: en or ar
        #[arg(long)]
        locale: Option<String>,
        /// Whole days to shift today's date before conversion
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i32>,
    },
}
