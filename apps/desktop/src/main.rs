use std::{path::PathBuf, sync::Arc};

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use editor_core::{EditorSession, LocalDictBackend};

#[derive(Parser, Debug)]
#[command(about = "Headless maintenance tool for input-method dictionaries")]
struct Args {
    /// Dictionary file to operate on.
    #[arg(long)]
    dict: PathBuf,
    /// Optional char-map file supplying per-character codes for composition.
    #[arg(long)]
    char_map: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the candidate words for a code in ranked order.
    Query { code: String },
    /// Compose the full code for a word.
    Compose { word: String },
    /// Add a word (composing its code when omitted) and persist.
    Add { word: String, code: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut session = EditorSession::new(Arc::new(LocalDictBackend::new()));
    session
        .load_dictionary(args.dict, args.char_map.as_deref())
        .await?;

    match args.command {
        Command::Query { code } => {
            let words = session.set_active_code(&code).await?;
            if words.is_empty() {
                bail!("no candidates for code '{code}'");
            }
            for (rank, word) in words.iter().enumerate() {
                println!("{}\t{word}", rank + 1);
            }
        }
        Command::Compose { word } => match session.compose_code(&word).await? {
            Some(code) => println!("{code}"),
            None => bail!("no code could be composed for '{word}'"),
        },
        Command::Add { word, code } => {
            let code = match code {
                Some(code) => code,
                None => session
                    .compose_code(&word)
                    .await?
                    .ok_or_else(|| anyhow!("no code could be composed for '{word}'"))?,
            };
            session.add_word(&word, &code).await?;
            println!("added '{word}' under '{code}'");
        }
    }
    Ok(())
}
