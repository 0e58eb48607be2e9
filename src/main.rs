use std::io::{self, Write};
use std::process;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cart::{cli, render};

fn init_logging(verbose: bool) {
    let default = if verbose { "cart=debug" } else { "cart=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &cli::Args) -> anyhow::Result<()> {
    let (source, image) = args.paths()?;
    let config = args.config();
    let document = render::run(source, image, &config, args.dump_mask.as_deref())?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(document.as_bytes())
        .and_then(|()| stdout.flush())
        .context("cannot write to stdout")?;
    Ok(())
}

fn main() {
    let args = cli::parse_args();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        match e.downcast_ref::<cart::error::CartError>() {
            Some(err) => eprintln!("cart: {}: {}", err.kind(), err),
            None => eprintln!("cart: {:#}", e),
        }
        process::exit(1);
    }
}
