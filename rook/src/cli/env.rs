use clap::Args;

use crate::{
    cli::{Error, internal::write_stdout},
    config::{Config, OutputFormat},
};

#[derive(Args, Clone)]
pub struct EnvCommand {
    #[arg(
        short = 'o',
        long = "output",
        default_value = "yaml",
        help = "Output format, `yaml` or `json`."
    )]
    pub output: OutputFormat,
}

impl EnvCommand {
    pub fn run(self, config: &Config) -> Result<(), Error> {
        let env_vars = config.pod_config_builder().env_vars();
        tracing::debug!("rendering {} environment variables", env_vars.len());
        write_stdout(self.output.render(&env_vars)?)
    }
}
