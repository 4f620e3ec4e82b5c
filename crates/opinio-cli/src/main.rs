use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod corpus;
mod repl;
mod train;

#[derive(Parser)]
#[command(name = "opinio", about = "Satisfaction review classification pipeline", version)]
struct Cli {
    /// Directory holding raw review CSVs, corpus files, and model artifacts.
    #[arg(long, env = "OPINIO_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the per-language corpus files from the raw review sources.
    BuildCorpus {
        /// LibreTranslate-compatible endpoint used to fill translation gaps.
        #[arg(long, env = "OPINIO_TRANSLATE_URL", default_value = "http://localhost:5000")]
        translate_url: String,
    },
    /// Train the per-language classifiers from the corpus files.
    Train,
    /// Classify one comment through the full language gate.
    Classify {
        /// The raw comment text.
        text: String,
    },
    /// Interactively try a trained model against typed text.
    Try,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::BuildCorpus { translate_url } => {
            let translator = opinio_translate::HttpTranslator::new(translate_url);
            let stats = corpus::run_corpus_pipeline(
                &cli.data_dir,
                &translator,
                opinio_translate::TRANSLATE_DELAY,
                &opinio_core::TracingSink,
            )
            .await?;
            if !stats.skipped {
                tracing::info!(fr = stats.fr_rows, en = stats.en_rows, "corpus build complete");
            }
        }
        Command::Train => train::run_training(&cli.data_dir)?,
        Command::Classify { text } => match opinio_ai::classify_comment(&cli.data_dir, &text) {
            Ok(result) => {
                let sentiment = if result.polarity { "positive" } else { "negative" };
                println!("{} => {sentiment}", result.language);
            }
            Err(error) => {
                eprintln!("rejected: {error}");
                std::process::exit(1);
            }
        },
        Command::Try => repl::run_repl(&cli.data_dir)?,
    }
    Ok(())
}
