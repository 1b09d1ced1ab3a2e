//! Command-line interface: train, predict, evaluate.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use taalboost::prelude::*;


#[derive(Parser)]
#[command(name = "taalboost")]
#[command(about = "English/Dutch text classification with decision trees and boosted stumps")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}


#[derive(Subcommand)]
enum Commands {
    /// Train a model on a labeled example file
    Train {
        /// File with one `label|text` example per line
        examples: PathBuf,

        /// Where to write the trained model
        model_out: PathBuf,

        /// Learner to train
        #[arg(value_enum)]
        learner: Learner,

        /// Depth limit for the decision tree (unbounded when omitted)
        #[arg(long)]
        max_depth: Option<usize>,

        /// Number of boosting rounds for `ada`
        #[arg(long, default_value_t = DEFAULT_STUMP_COUNT)]
        stumps: usize,
    },

    /// Classify a file of snippets, printing one label per line
    Predict {
        /// A trained model file
        model: PathBuf,

        /// File with one snippet per line (text after the last `|`)
        examples: PathBuf,
    },

    /// Score a model against a labeled file
    Evaluate {
        /// A trained model file
        model: PathBuf,

        /// File with one `label|text` example per line
        examples: PathBuf,
    },
}


#[derive(Debug, Clone, Copy, ValueEnum)]
enum Learner {
    /// A single decision tree
    Dt,
    /// AdaBoost over decision stumps
    Ada,
}


fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}


fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Train { examples, model_out, learner, max_depth, stumps } => {
            let mut sample = read_labeled(&examples)?;
            let model = match learner {
                Learner::Dt => {
                    let mut tree = match max_depth {
                        Some(depth) => DecisionTree::new().max_depth(depth),
                        None => DecisionTree::new(),
                    };
                    tree.train(&sample)?;
                    Model::Tree(tree)
                }
                Learner::Ada => {
                    let mut ensemble = AdaBoost::new();
                    ensemble.train(&mut sample, stumps)?;
                    Model::Ensemble(ensemble)
                }
            };
            model.save(&model_out)
        }
        Commands::Predict { model, examples } => {
            let model = Model::load(&model)?;
            for observation in read_unlabeled(&examples)? {
                println!("{}", model.predict(&observation)?);
            }
            Ok(())
        }
        Commands::Evaluate { model, examples } => {
            let model = Model::load(&model)?;
            let sample = read_labeled(&examples)?;
            let evaluation = Evaluation::of_model(&model, &sample)?;
            println!("{evaluation}");
            Ok(())
        }
    }
}
