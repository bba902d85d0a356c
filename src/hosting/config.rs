use crate::Probability;
use crate::strategy::Policy;
use crate::strategy::Tactic;
use clap::Parser;

/// Server configuration. Every flag falls back to an environment variable.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Serve rock-paper-scissors rounds over HTTP", long_about = None)]
pub struct Config {
    /// Socket address to listen on. Takes precedence over `--port`.
    #[arg(long, env = "BIND_ADDR")]
    pub bind: Option<String>,
    /// Port to listen on across all interfaces.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
    /// HTTP worker threads (defaults to one per core).
    #[arg(long, env = "WORKERS")]
    pub workers: Option<usize>,
    /// Weight of the pattern counter-attack band.
    #[arg(long, env = "WEIGHT_PATTERN", default_value_t = crate::WEIGHT_PATTERN)]
    pub pattern: Probability,
    /// Weight of the direct counter band.
    #[arg(long, env = "WEIGHT_COUNTER", default_value_t = crate::WEIGHT_COUNTER)]
    pub counter: Probability,
    /// Weight of the forced-draw band.
    #[arg(long, env = "WEIGHT_MIRROR", default_value_t = crate::WEIGHT_MIRROR)]
    pub mirror: Probability,
    /// Weight of the uniform noise band.
    #[arg(long, env = "WEIGHT_NOISE", default_value_t = crate::WEIGHT_NOISE)]
    pub noise: Probability,
}

impl Config {
    pub fn policy(&self) -> anyhow::Result<Policy> {
        Policy::new(&[
            (Tactic::Pattern, self.pattern),
            (Tactic::Counter, self.counter),
            (Tactic::Mirror, self.mirror),
            (Tactic::Noise, self.noise),
        ])
    }
    pub fn address(&self) -> String {
        self.bind
            .clone()
            .unwrap_or_else(|| format!("0.0.0.0:{}", self.port))
    }
    pub fn workers(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_weights() {
        let config = Config::try_parse_from([
            "hosting",
            "--pattern",
            "0",
            "--counter",
            "1",
            "--mirror",
            "0",
            "--noise",
            "0",
            "--workers",
            "2",
        ])
        .unwrap();
        let policy = config.policy().unwrap();
        assert_eq!(policy.choices().len(), 1);
        assert_eq!(policy.choose(0.5), Tactic::Counter);
        assert_eq!(config.workers(), 2);
    }

    #[test]
    fn port_builds_the_address() {
        let config = Config::try_parse_from(["hosting", "--port", "9090"]).unwrap();
        if config.bind.is_none() {
            assert_eq!(config.address(), "0.0.0.0:9090");
        }
        let config =
            Config::try_parse_from(["hosting", "--port", "9090", "--bind", "127.0.0.1:7000"])
                .unwrap();
        assert_eq!(config.address(), "127.0.0.1:7000");
    }

    #[test]
    fn rejects_negative_weights() {
        let config = Config::try_parse_from(["hosting", "--noise=-1"]).unwrap();
        assert!(config.policy().is_err());
        let config =
            Config::try_parse_from(["hosting", "--pattern", "3e38", "--counter", "3e38"]).unwrap();
        assert!(config.policy().is_err());
    }
}
