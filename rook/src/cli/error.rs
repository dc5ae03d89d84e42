use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Configuration {
        #[snafu(source(from(crate::config::Error, Box::new)))]
        source: Box<crate::config::Error>,
    },

    #[snafu(display("{source}"))]
    PodConfiguration {
        #[snafu(source(from(rook_k8sutil::Error, Box::new)))]
        source: Box<rook_k8sutil::Error>,
    },

    #[snafu(display("Failed to render YAML, error: {source}"))]
    SerializeYaml { source: serde_yaml::Error },

    #[snafu(display("Failed to render JSON, error: {source}"))]
    SerializeJson { source: serde_json::Error },

    #[snafu(display("Failed to write to stdout, error: {source}"))]
    WriteStdout { source: std::io::Error },
}

impl Error {
    /// Whether the process must abort instead of exiting normally.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::PodConfiguration { source } => source.is_fatal(),
            _ => false,
        }
    }
}

impl From<crate::config::Error> for Error {
    fn from(source: crate::config::Error) -> Self { Self::Configuration { source: Box::new(source) } }
}

impl From<rook_k8sutil::Error> for Error {
    fn from(source: rook_k8sutil::Error) -> Self {
        Self::PodConfiguration { source: Box::new(source) }
    }
}
