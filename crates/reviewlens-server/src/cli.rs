use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reviewlens")]
#[command(author, version, about = "Review sentiment analysis server and trainer")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the analysis server with web UI
    Serve {
        /// Listen port
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Listen address
        #[arg(short, long, default_value = "127.0.0.1")]
        address: String,

        /// Trained lexicon snapshot; omit to use the built-in lexicon
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Upload-history store path
        #[arg(long, default_value = "./data/uploads.jsonl")]
        history: PathBuf,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Train a lexicon snapshot from CSV review corpora
    Train {
        /// Input CSV files (each needs a 'review' column)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Where to write the snapshot
        #[arg(short, long, default_value = "./lexicon.json")]
        output: PathBuf,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}
