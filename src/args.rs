use clap::Parser;
use clap_verbosity_flag::Verbosity;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Endpoint of the receiving peer, e.g. tcp://127.0.0.1:4505
    #[clap(short = 'e', long = "endpoint")]
    pub endpoint: String,

    /// Size (in bytes) of each message payload
    #[clap(short = 'p', long = "payload-size")]
    pub payload_size: usize,

    /// Can be called multiple times to increase output
    #[clap(flatten)]
    pub verbose: Verbosity,
}

/// Benchmark configuration, fixed at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub payload_size: usize,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            endpoint: args.endpoint,
            payload_size: args.payload_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_endpoint_and_payload_size() {
        assert!(Args::try_parse_from(["pub-thr"]).is_err());
        assert!(Args::try_parse_from(["pub-thr", "-e", "tcp://127.0.0.1:4505"]).is_err());
        assert!(Args::try_parse_from(["pub-thr", "-p", "64"]).is_err());
    }

    #[test]
    fn parses_endpoint_and_payload_size() {
        let args =
            Args::try_parse_from(["pub-thr", "-e", "tcp://127.0.0.1:4505", "-p", "64"]).unwrap();
        let config = Config::from(args);

        assert_eq!(config.endpoint, "tcp://127.0.0.1:4505");
        assert_eq!(config.payload_size, 64);
    }

    #[test]
    fn accepts_zero_payload_size() {
        let args = Args::try_parse_from(["pub-thr", "-e", "mock://x", "-p", "0"]).unwrap();
        assert_eq!(args.payload_size, 0);
    }
}
