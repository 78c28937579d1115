use athena_schema_cli::{AthenaSchemaCli, Cli};

use anyhow::Result;

fn main() -> Result<()> {
    let cli = Cli::from_args(std::env::args_os());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    AthenaSchemaCli::new().run(cli)
}
