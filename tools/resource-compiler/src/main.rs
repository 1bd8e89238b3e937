//! Compiles the `pfm2sid` resource definitions into a C++ header and implementation file.

use anyhow::Result;

use resource_compiler::{cli, compile, resources};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = cli::get_config();
    let library = resources::build_library()?;
    let paths = compile(&library, &config.output)?;

    log::info!(
        "generated \"{}\" and \"{}\"",
        paths.header.display(),
        paths.source.display()
    );
    Ok(())
}
