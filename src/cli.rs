use crate::error::UncError;
use crate::identity::IdentityInput;
use crate::pipeline::derive;
use crate::sink::{NoopSink, WriterSink};
use anyhow::Context;
use clap::Parser;
use std::io::Write;

pub const HELP_TEXT: &str = "unc -f <first name> -l <last name> -d <Date Of Birth> or unc -h";

// unc -f Jane -l Doe -d 1990-01-01 -s "secret" -v

#[derive(Debug, Parser)]
#[command(name = "unc", version, about = "Derive a pseudo-anonymized username", override_usage = HELP_TEXT)]
pub struct Args {
    /// The users first name
    #[arg(short = 'f', long = "firstname")]
    pub first_name: Option<String>,

    /// The users last name
    #[arg(short = 'l', long = "lastname")]
    pub last_name: Option<String>,

    /// The users date of birth
    #[arg(short = 'd', long = "dateOfBirth")]
    pub date_of_birth: Option<String>,

    /// An optional secret mixed into the hash
    #[arg(short = 's', long = "salt")]
    pub salt: Option<String>,

    /// Print every hash stage before the username
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    pub fn identity(&self) -> Result<IdentityInput, UncError> {
        IdentityInput::new(
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default(),
            self.date_of_birth.as_deref().unwrap_or_default(),
            self.salt.as_deref(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was incomplete, usage was printed instead
    HelpShown,
    Derived(String),
}

pub fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<Outcome> {
    let input = match args.identity() {
        Ok(input) => input,
        Err(e) => {
            tracing::debug!(field = e.field(), "incomplete identity, showing help");
            writeln!(out, "{HELP_TEXT}").context("failed to write help text")?;
            return Ok(Outcome::HelpShown);
        }
    };

    tracing::debug!(salted = input.has_salt(), verbose = args.verbose, "deriving username");

    let username = if args.verbose {
        let mut sink = WriterSink::new(&mut *out);
        derive(&input, &mut sink)
    } else {
        derive(&input, &mut NoopSink)
    };

    writeln!(out, "{username}").context("failed to write username")?;
    out.flush().context("failed to flush output")?;

    Ok(Outcome::Derived(username.into_string()))
}
