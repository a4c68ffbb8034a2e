use camino::Utf8PathBuf;
use clap::Parser;
use ohno::app_err;
use roli_dash::Result;
use roli_dash::config::Config;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output configuration file path
    #[arg(value_name = "PATH", default_value = "roli.yml")]
    pub output: Utf8PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

pub fn init_config(args: &InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(app_err!("{} already exists; pass --force to overwrite it", args.output));
    }

    Config::save_default_with_comments(&args.output)?;
    println!("Generated default configuration file: {}", args.output);
    Ok(())
}
