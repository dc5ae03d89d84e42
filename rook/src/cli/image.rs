use clap::Args;

use crate::{
    cli::{Error, internal::write_stdout},
    config::Config,
};

#[derive(Args, Clone)]
pub struct ImageCommand {
    #[arg(
        long = "version",
        help = "Image tag to use. Defaults to `defaultVersion` from the configuration file, \
                then to `latest`."
    )]
    pub version: Option<String>,
}

impl ImageCommand {
    pub fn run(self, config: &Config) -> Result<(), Error> {
        let version = config.version_or_default(self.version);
        let image = config.pod_config_builder().make_rook_image(&version);
        write_stdout(format!("{image}\n"))
    }
}
