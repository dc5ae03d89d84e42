use std::{fmt, str::FromStr};

use serde::Serialize;
use snafu::{ResultExt, Snafu};

use crate::cli::{Error, error};

/// How rendered pod configuration is written to stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    pub fn render<T>(self, value: &T) -> Result<String, Error>
    where
        T: Serialize,
    {
        match self {
            Self::Yaml => serde_yaml::to_string(value).context(error::SerializeYamlSnafu),
            Self::Json => serde_json::to_string_pretty(value)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .context(error::SerializeJsonSnafu),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        };
        f.write_str(val)
    }
}

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ParseOutputFormatError::Invalid { value: value.to_string() }),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ParseOutputFormatError {
    #[snafu(display("'{value}' is not a valid output format, expected 'yaml' or 'json'"))]
    Invalid { value: String },
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("YML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("toml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for format in [OutputFormat::Yaml, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_render() {
        let value = BTreeMap::from([("app", "mon")]);
        assert_eq!(OutputFormat::Yaml.render(&value).unwrap(), "app: mon\n");
        assert_eq!(OutputFormat::Json.render(&value).unwrap(), "{\n  \"app\": \"mon\"\n}\n");
    }
}
