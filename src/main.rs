//! `s3auth` prints S3 authentication headers for a protected file.
//!
//! ```text
//! s3auth --configure
//! s3auth "https://mybucket.s3.amazonaws.com/path/to/file.pkg"
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.
use std::io;
use std::process;

use chrono::Utc;
use structopt::StructOpt;

use s3auth::cli::{run, Opt};
use s3auth::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opt = Opt::from_args();
    let now = Utc::now();
    let stdin = io::stdin();
    let code = run(
        &opt,
        Config::default().from_env(),
        &now,
        &mut stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    );
    process::exit(code);
}
