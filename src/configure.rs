//! Interactive credential setup.

use std::io::{self, BufRead, Write};

use log::info;

use crate::credential::{CredentialStore, Credentials};
use crate::errors::*;

const PROMPTS: [&str; 3] = [
    "Access Key  eg: \"AKIAIX2QPWZ7EXAMPLE\"",
    "Secret Key  eg: \"z5MFJCcEyYBmh2BxbrlZBWNJ4izEXAMPLE\"",
    "AWS Region code eg: \"us-west-2\"",
];

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{:>15}: ", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before setup finished",
        )
        .into());
    }
    Ok(line.trim().to_string())
}

/// Prompt for access key, secret key and region, then save all three to
/// `store`. Nothing is saved unless every prompt gets an answer.
pub fn configure<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &dyn CredentialStore,
) -> Result<Credentials> {
    let access_key = ask(input, output, PROMPTS[0])?;
    let secret_key = ask(input, output, PROMPTS[1])?;
    let region = ask(input, output, PROMPTS[2])?;
    let creds = Credentials {
        access_key,
        secret_key,
        region,
    };
    store.save(&creds).chain_err(|| "error saving credentials")?;
    info!("credentials saved for access key {}", creds.access_key);
    Ok(creds)
}
