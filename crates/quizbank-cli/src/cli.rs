//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// quizbank: convert question bank exports to quiz-import CSV
#[derive(Parser)]
#[command(name = "quizbank")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a question bank CSV and save the result
    Convert {
        /// Path to the question bank export
        #[arg(value_name = "INPUT")]
        file: PathBuf,

        /// Output path (default: <input>_converted.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter of the input: comma, tab, semicolon, pipe, auto, or a single character
        #[arg(short, long, default_value = "comma")]
        delimiter: DelimiterChoice,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,
    },

    /// Show how each question would be converted
    Preview {
        /// Path to the question bank export
        #[arg(value_name = "INPUT")]
        file: PathBuf,

        /// Field delimiter of the input
        #[arg(short, long, default_value = "comma")]
        delimiter: DelimiterChoice,

        /// Show at most this many questions
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print full details for each question
        #[arg(long, conflicts_with = "json")]
        details: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how source columns map to the output schema
    Guide,
}

/// Delimiter selection for input files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DelimiterChoice {
    #[default]
    Comma,
    Tab,
    Semicolon,
    Pipe,
    /// Detect from the first lines of the file
    Auto,
    Other(u8),
}

impl DelimiterChoice {
    /// Delimiter byte for the reader; `None` means auto-detect.
    pub fn as_byte(self) -> Option<u8> {
        match self {
            DelimiterChoice::Comma => Some(b','),
            DelimiterChoice::Tab => Some(b'\t'),
            DelimiterChoice::Semicolon => Some(b';'),
            DelimiterChoice::Pipe => Some(b'|'),
            DelimiterChoice::Auto => None,
            DelimiterChoice::Other(b) => Some(b),
        }
    }
}

impl std::str::FromStr for DelimiterChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comma" | "," => Ok(DelimiterChoice::Comma),
            "tab" | "\\t" | "\t" => Ok(DelimiterChoice::Tab),
            "semicolon" | ";" => Ok(DelimiterChoice::Semicolon),
            "pipe" | "|" => Ok(DelimiterChoice::Pipe),
            "auto" | "detect" => Ok(DelimiterChoice::Auto),
            other if other.len() == 1 && other.is_ascii() => {
                Ok(DelimiterChoice::Other(other.as_bytes()[0]))
            }
            _ => Err(format!(
                "Unknown delimiter: {}. Use comma, tab, semicolon, pipe, auto, or a single character.",
                s
            )),
        }
    }
}

impl std::fmt::Display for DelimiterChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DelimiterChoice::Comma => write!(f, "comma"),
            DelimiterChoice::Tab => write!(f, "tab"),
            DelimiterChoice::Semicolon => write!(f, "semicolon"),
            DelimiterChoice::Pipe => write!(f, "pipe"),
            DelimiterChoice::Auto => write!(f, "auto"),
            DelimiterChoice::Other(b) => write!(f, "{}", *b as char),
        }
    }
}
