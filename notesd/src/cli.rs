use std::path::PathBuf;
use clap::Parser;
use notes::bin_constants::DEFAULT_CONFIG_FILE;

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_file() {
        let config = CliConfig::try_parse_from(["notesd"]).unwrap();
        assert_eq!(config.config_file, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn explicit_config_file() {
        let config = CliConfig::try_parse_from(["notesd", "--config-file=/tmp/notes.toml"])
            .unwrap();
        assert_eq!(config.config_file, PathBuf::from("/tmp/notes.toml"));
    }

    #[test]
    fn unknown_flag() {
        assert!(CliConfig::try_parse_from(["notesd", "--db=local"]).is_err());
    }
}
