use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::io;
use sysname_cli::arch::Arch;
use sysname_cli::args::Args;
use sysname_cli::style::StyleConfig;
use sysname_cli::Resolver;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let arch = match args.arch {
        Some(arch) => arch,
        None => Arch::host()?,
    };
    log::debug!("resolving syscall numbers with the {arch} table");

    let input = io::stdin().lock();
    if let Some(path) = &args.file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Unable to open {}", path.display()))?;
        let style = StyleConfig {
            use_colors: false,
            ..StyleConfig::default()
        };
        Resolver::new(arch, args, file, style)?.run(input)
    } else {
        Resolver::new(arch, args, io::stdout(), StyleConfig::default())?.run(input)
    }
}
