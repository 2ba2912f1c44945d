mod commands;

use clap::{Parser, Subcommand};
use opaque_id::{OpaqueId, ProfilesConfig, stock};

#[derive(Parser)]
#[command(name = "opaque-id")]
#[command(version)]
#[command(about = "Scramble u64 identifiers into short opaque strings and back", long_about = None)]
struct Cli {
    /// Profile from profiles.toml supplying alphabet, key, and min length
    #[arg(short, long, default_value = "base58")]
    profile: String,

    /// Alphabet symbols, or a stock name (base64, base58, base36, base32);
    /// overrides the profile
    #[arg(short, long)]
    alphabet: Option<String>,

    /// Base64 permutation key; overrides the profile
    #[arg(short, long)]
    key: Option<String>,

    /// Minimum encoded length; overrides the profile
    #[arg(short, long)]
    min_length: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode integer values to opaque IDs (reads stdin if none given)
    Encode { values: Vec<String> },
    /// Decode opaque IDs back to integers (reads stdin if none given)
    Decode { ids: Vec<String> },
    /// Generate a fresh permutation key for the selected alphabet
    Generate,
    /// List configured profiles
    List,
}

/// Alphabet, key, and min length resolved from the profile plus any
/// explicit flag overrides.
struct Resolved {
    alphabet: String,
    key: Option<String>,
    min_length: Option<usize>,
}

impl Resolved {
    fn build(&self) -> Result<OpaqueId, Box<dyn std::error::Error>> {
        let key = self
            .key
            .as_deref()
            .ok_or("no permutation key: pass --key or select a profile")?;
        let min_length = self
            .min_length
            .ok_or("no minimum length: pass --min-length or select a profile")?;
        Ok(OpaqueId::new(&self.alphabet, key, min_length)?)
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ProfilesConfig::load_with_overrides()?;

    if let Command::List = cli.command {
        return commands::list(&config);
    }

    let resolved = resolve(&cli, &config)?;

    match cli.command {
        Command::Encode { values } => commands::encode(&resolved.build()?, &values),
        Command::Decode { ids } => commands::decode(&resolved.build()?, &ids),
        Command::Generate => commands::generate(&resolved.alphabet),
        Command::List => unreachable!(),
    }
}

fn resolve(cli: &Cli, config: &ProfilesConfig) -> Result<Resolved, Box<dyn std::error::Error>> {
    // A fully explicit triple works without any profile; otherwise the
    // profile supplies whatever the flags leave out.
    let profile = config.get_profile(&cli.profile);

    let alphabet = match &cli.alphabet {
        Some(chosen) => stock::by_name(chosen)
            .map(str::to_string)
            .unwrap_or_else(|| chosen.clone()),
        None => profile
            .ok_or_else(|| {
                format!(
                    "profile '{}' not found. Use `list` to see available profiles.",
                    cli.profile
                )
            })?
            .alphabet
            .clone(),
    };

    let key = cli.key.clone().or_else(|| profile.map(|p| p.key.clone()));
    let min_length = cli.min_length.or_else(|| profile.map(|p| p.min_length));

    Ok(Resolved {
        alphabet,
        key,
        min_length,
    })
}
