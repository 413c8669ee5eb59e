//! cwm-relay - send a shortcut's command to the cwm daemon
//!
//! Reads `cwm_command.txt` next to the executable, forwards its first line
//! to the daemon at `~/.cwm/cwm.sock` and reports failures with a dialog
//! or notification.

use clap::Parser;
use cwm_relay::cli::{self, Environment, EXIT_FAILURE};
use cwm_relay::common::{config::Config, logging};
use cwm_relay::notify::{Notifier, OsNotifier, SilentNotifier};

#[derive(Parser)]
#[command(name = "cwm-relay", about = "Relay a shortcut command to the cwm daemon")]
#[command(version, long_about = None)]
struct Cli {
    /// Log each step to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}", e);
            let defaults = Config::default();
            OsNotifier.dialog(&defaults.notify.title, e.dialog_message());
            std::process::exit(EXIT_FAILURE);
        }
    };

    let env = Environment::from_process();
    let code = if config.notify.enabled {
        cli::run(env, &config, &OsNotifier).await
    } else {
        cli::run(env, &config, &SilentNotifier).await
    };

    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_needed() {
        let cli = Cli::try_parse_from(["cwm-relay"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["cwm-relay", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
