//! The `s3auth` command: option parsing and the setup / sign flow.

use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use log::debug;
use structopt::StructOpt;

use crate::config::Config;
use crate::configure::configure;
use crate::errors::*;
use crate::signer::sign_headers;

pub const CONFIG_MISSING: &str = "Config is missing. Please run \"s3auth --configure\"";
pub const URL_MISSING: &str = "Please provide a URL ie; s3auth \"http://s3.bucket.com/files\"";

#[derive(Debug, Default, StructOpt)]
#[structopt(
    name = "s3auth",
    about = "Generate AWS4 authentication headers for your protected files"
)]
pub struct Opt {
    /// Interactive setup
    #[structopt(long)]
    pub configure: bool,

    /// Credential file to use instead of the default location.
    #[structopt(long)]
    pub config_file: Option<String>,

    /// URL of the object to fetch.
    pub url: Option<String>,
}

fn execute<R: BufRead, W: Write>(
    opt: &Opt,
    mut config: Config,
    now: &DateTime<Utc>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    if let Some(path) = &opt.config_file {
        config.config_file = path.clone();
    }
    let store = config.file_store()?;
    debug!("using credential file {}", store.path().display());

    if opt.configure {
        configure(input, out, &store)?;
        return Ok(());
    }

    let creds = config.credentials(&store)?;
    if let Err(err) = creds.ensure_complete() {
        debug!("{}", err);
        writeln!(out, "{}", CONFIG_MISSING)?;
        return Ok(());
    }

    let url = match &opt.url {
        Some(url) => url,
        None => bail!(ErrorKind::InvalidInput(URL_MISSING.to_string())),
    };

    for header in sign_headers(url, &creds, now)?.iter() {
        writeln!(out, "{}", header)?;
    }
    Ok(())
}

/// Run the command and return its exit status.
///
/// - `--configure`: prompt on `input`, save, exit 0.
/// - credentials incomplete: print a hint on `out`, exit 0.
/// - no URL: print usage on `out`, exit 1.
/// - any other failure: report on `err`, exit 1.
///
/// `now` is the single instant the headers are signed at.
pub fn run<R: BufRead, W: Write, E: Write>(
    opt: &Opt,
    config: Config,
    now: &DateTime<Utc>,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> i32 {
    match execute(opt, config, now, input, out) {
        Ok(()) => 0,
        Err(Error(ErrorKind::InvalidInput(msg), _)) => {
            let _ = writeln!(out, "{}", msg);
            1
        }
        Err(e) => {
            let _ = writeln!(err, "error: {}", e);
            for cause in e.iter().skip(1) {
                let _ = writeln!(err, "caused by: {}", cause);
            }
            1
        }
    }
}
