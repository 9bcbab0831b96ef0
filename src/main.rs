use clap::{Parser, Subcommand};
use idmangler::block::Block;
use idmangler::item::Item;
use idmangler::{string, ItemDecoder, ItemEncoder};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "idmangler", about = "Encode and decode item ID strings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an ID string and print it as JSON
    Decode {
        id: String,
        /// Print the raw block list instead of the item
        #[arg(short, long)]
        blocks: bool,
    },
    /// Encode an item (JSON) into an ID string
    Encode {
        /// Item JSON file; reads stdin when omitted
        input: Option<PathBuf>,
        /// Format version written to the Start block
        #[arg(short = 'V', long, default_value = "1")]
        format_version: u8,
        /// Treat the input as a block list rather than an item
        #[arg(short, long)]
        blocks: bool,
    },
    /// Show the transcoded bytes and the blocks they hold
    Inspect {
        id: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse().command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {

        // ── Decode ───────────────────────────────────────────────────────────
        Commands::Decode { id, blocks } => {
            let decoded = ItemDecoder::new().decode(id.trim())?;
            let json = if blocks {
                serde_json::to_string_pretty(&decoded)?
            } else {
                serde_json::to_string_pretty(&Item::from_blocks(&decoded)?)?
            };
            println!("{}", json);
        }

        // ── Encode ───────────────────────────────────────────────────────────
        Commands::Encode { input, format_version, blocks } => {
            let text = read_input(input.as_ref())?;
            let encoder = ItemEncoder::from_version_byte(format_version)?;
            let list: Vec<Block> = if blocks {
                serde_json::from_str(&text)?
            } else {
                let item: Item = serde_json::from_str(&text)?;
                item.to_blocks()
                    .into_iter()
                    .filter(|b| !matches!(b, Block::Start(_)))
                    .collect()
            };
            println!("{}", encoder.encode(&list)?);
        }

        // ── Inspect ──────────────────────────────────────────────────────────
        Commands::Inspect { id } => {
            let bytes = string::decode_string(id.trim())?;
            println!("Bytes ({}): {}", bytes.len(), hex::encode(&bytes));
            for block in ItemDecoder::new().decode_bytes(&bytes)? {
                println!("  {:<28} {:?}", block.id().to_string(), block);
            }
        }
    }

    Ok(())
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p),
        None    => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}
