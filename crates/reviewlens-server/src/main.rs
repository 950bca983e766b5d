use clap::Parser;
use reviewlens_engine::{lexicon, ReviewAnalyzer, SentimentModel, Trainer};
use reviewlens_history::HistoryStore;
use reviewlens_server::cli::{Cli, Commands};
use reviewlens_server::{app::run_server, ingest, state::AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            address,
            lexicon: lexicon_path,
            history,
            verbose,
        } => {
            init_logging(verbose);

            // A corrupt snapshot is fatal here on purpose: loading it would
            // silently misclassify every review of every later batch.
            let snapshot = match &lexicon_path {
                Some(path) => lexicon::load(path)?,
                None => lexicon::builtin(),
            };
            let model = SentimentModel::from_snapshot(&snapshot)?;
            let analyzer = ReviewAnalyzer::new(model);
            let store = HistoryStore::open(&history)?;

            let addr: SocketAddr = format!("{}:{}", address, port).parse()?;

            println!();
            println!("  ReviewLens - review sentiment analysis");
            println!();
            println!(
                "  Lexicon:  {}",
                lexicon_path
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "built-in".to_string())
            );
            println!("  History:  {}", history.display());
            println!();
            println!("  Open http://{} in your browser", addr);
            println!();

            run_server(AppState::new(analyzer, store), addr).await?;
        }

        Commands::Train {
            input,
            output,
            verbose,
        } => {
            init_logging(verbose);

            let (reviews, sources) = ingest::read_corpus(&input)?;
            println!("Training on {} reviews from {} files", reviews.len(), sources.len());

            let trainer = Trainer::new()?;
            let snapshot = trainer.train(&reviews, sources)?;
            lexicon::save(&snapshot, &output)?;

            println!(
                "Wrote {} ({} positive / {} negative / {} neutral words)",
                output.display(),
                snapshot.positive.len(),
                snapshot.negative.len(),
                snapshot.neutral.len(),
            );
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "reviewlens=debug,tower_http=debug"
    } else {
        "reviewlens=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
