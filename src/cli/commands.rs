use std::io::{self, BufRead};

use opaque_id::{OpaqueId, ProfilesConfig, generate_key};

pub fn encode(codec: &OpaqueId, values: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for raw in inputs(values)? {
        let id = match raw.parse::<u64>() {
            Ok(value) => codec.encode(value),
            // Negative numbers get the typed domain error instead of a
            // generic parse failure.
            Err(_) => match raw.parse::<i64>() {
                Ok(value) => codec.encode_signed(value)?,
                Err(e) => return Err(format!("invalid integer '{}': {}", raw, e).into()),
            },
        };
        println!("{}", id);
    }
    Ok(())
}

pub fn decode(codec: &OpaqueId, ids: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for id in inputs(ids)? {
        println!("{}", codec.decode(id.trim())?);
    }
    Ok(())
}

pub fn generate(alphabet: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", generate_key(alphabet)?);
    Ok(())
}

pub fn list(config: &ProfilesConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("Available profiles:\n");
    let mut profiles: Vec<_> = config.profiles.iter().collect();
    profiles.sort_by_key(|(name, _)| *name);

    for (name, profile) in profiles {
        let size = profile.alphabet.chars().count();
        let preview: String = profile.alphabet.chars().take(20).collect();
        let suffix = if size > 20 { "..." } else { "" };
        println!(
            "  {:<10} base-{:<3} min-len {:<2}  {}{}",
            name, size, profile.min_length, preview, suffix
        );
    }
    Ok(())
}

/// Explicit arguments, or one entry per non-empty stdin line.
fn inputs(args: &[String]) -> Result<Vec<String>, io::Error> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}
