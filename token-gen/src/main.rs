use std::{env, sync::Arc};

use anyhow::{Context, Result, bail};
use chrono::Duration;
use clap::Parser;
use token_gate::services::auth::{SigningConfig, TokenIssuer};

/// Mint a bearer token for local testing.
///
/// Reads `JWT_SECRET` and `TOKEN_LIFETIME_SECONDS` the same way the server does
/// (a `.env` file is honoured), so the token is accepted by a locally running
/// instance.
#[derive(Parser, Debug)]
#[command(name = "token-gen", version, about)]
struct Args {
    /// Subject id (`user_id` claim)
    #[arg(long)]
    sub: String,

    /// Display name (`username` claim)
    #[arg(long, default_value = "")]
    name: String,

    /// Role to grant; repeat for several, order is kept
    #[arg(long = "role")]
    roles: Vec<String>,

    /// Override the configured lifetime (seconds, may be negative)
    #[arg(long, allow_hyphen_values = true)]
    lifetime_seconds: Option<i64>,

    /// Print only the token
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn configured_lifetime() -> Result<i64> {
    let raw = env::var("TOKEN_LIFETIME_SECONDS").context("TOKEN_LIFETIME_SECONDS is not set")?;
    raw.trim()
        .parse()
        .with_context(|| format!("TOKEN_LIFETIME_SECONDS is not an integer: {raw:?}"))
}

fn lifetime_from_seconds(secs: i64) -> Result<Duration> {
    Duration::try_seconds(secs)
        .with_context(|| format!("lifetime of {secs}s is out of range"))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let secret = env::var("JWT_SECRET").context("JWT_SECRET is not set")?;
    let lifetime = match args.lifetime_seconds {
        Some(secs) => secs,
        None => configured_lifetime()?,
    };
    if args.sub.is_empty() {
        bail!("--sub must not be empty");
    }

    let config = SigningConfig::new(secret, lifetime_from_seconds(lifetime)?)?;
    let issuer = TokenIssuer::with_system_clock(Arc::new(config));
    let token = issuer.issue(args.sub.clone(), args.name, args.roles)?;

    if args.quiet {
        println!("{token}");
    } else {
        println!("sub:      {}", args.sub);
        println!("lifetime: {lifetime}s");
        println!("token:    {token}");
        println!();
        println!("curl -H 'Authorization: Bearer {token}' http://localhost:3000/api/v1/me");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifetime_in_range_converts() {
        assert_eq!(lifetime_from_seconds(3600).unwrap(), Duration::hours(1));
        assert_eq!(lifetime_from_seconds(-3600).unwrap(), Duration::hours(-1));
    }

    #[test]
    fn huge_lifetime_is_an_error() {
        assert!(lifetime_from_seconds(i64::MAX).is_err());
        assert!(lifetime_from_seconds(i64::MIN).is_err());
    }
}
