use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for citydb-server
#[derive(Debug, Parser)]
#[command(
    name = "citydb-server",
    version,
    about = "Serve the city scoring catalog over HTTP/JSON"
)]
pub struct CliArgs {
    /// Path to the dataset (.json, or .json.gz with the 'compact' feature).
    /// Defaults to the dataset bundled with citydb-core.
    #[arg(short = 'i', long = "input", env = "CITYDB_DATA")]
    pub input: Option<PathBuf>,

    /// Interface to bind
    #[arg(long, env = "CITYDB_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short = 'p', long, env = "CITYDB_PORT", default_value_t = 8000)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = CliArgs::try_parse_from(["citydb-server"]).unwrap();
        assert_eq!(args.host, "0.0.0.0");
        assert_eq!(args.port, 8000);
    }

    #[test]
    fn explicit_values() {
        let args =
            CliArgs::try_parse_from(["citydb-server", "-i", "cities.json.gz", "-p", "9000"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("cities.json.gz")));
        assert_eq!(args.port, 9000);
    }
}
