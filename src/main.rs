use std::io;
use std::io::BufRead;

use clap::Parser;
use param_checker::CheckRequest;
use param_checker::CheckerConfig;
use param_checker::Error;
use param_checker::ParamChecker;
use param_checker::Result;
use param_checker::SimulatedHost;
use param_checker::SimulatedTarget;
use param_checker::StdoutConsole;
use param_checker::TargetAddress;
use tracing::error;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

/// Param checker device backed by an in-memory host.
///
/// Commands are read from stdin, one per line:
///   check <index> [slot] [--keep-alive] | check
///   set <index> [slot] <param> <value>
///   tick [count]
///   quit
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML file declaring the simulated targets
    #[arg(long)]
    rack: Option<String>,

    /// TOML file merged over the loaded configuration
    #[arg(long)]
    config: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Check(Option<CheckRequest>),
    Set {
        address: TargetAddress,
        index: usize,
        value: f64,
    },
    Tick(u64),
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("invalid argument `{0}`")]
    InvalidArgument(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

fn main() -> Result<()> {
    init_observability();

    let args = Args::parse();
    let mut settings = CheckerConfig::new()?;
    if let Some(path) = &args.config {
        settings = settings.with_override_config(path)?;
    }
    let settings = settings.validate()?;

    let host = match &args.rack {
        Some(path) => SimulatedHost::from_rack_file(path)?,
        None => demo_rack()?,
    };
    info!("device loaded with {} targets", host.addresses().count());

    let mut checker = ParamChecker::new(host, StdoutConsole, settings);
    checker.print_load_banner()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            Command::Check(request) => {
                match checker.check(request) {
                    // Already explained on the console
                    Ok(_) | Err(Error::Watch(_)) => {}
                    Err(e) => return Err(e),
                }
            }
            Command::Set {
                address,
                index,
                value,
            } => {
                if let Err(e) = checker.host_mut().set_value(&address, index, value) {
                    error!("set failed: {}", e);
                    eprintln!("{}", e);
                }
            }
            Command::Tick(count) => {
                for _ in 0..count {
                    checker.on_tick();
                }
            }
            Command::Quit => break,
        }
    }

    Ok(())
}

fn init_observability() {
    let base_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_default_env());
    tracing_subscriber::registry().with(base_subscriber).init();
}

fn demo_rack() -> Result<SimulatedHost> {
    let mut host = SimulatedHost::new();
    host.insert_target(
        TargetAddress::single(0),
        SimulatedTarget::new("FLEX")
            .with_display_name("Lead")
            .with_parameter("Cutoff", 0.5)
            .with_parameter("Resonance", 0.2),
    )?;
    host.insert_target(
        TargetAddress::single(2),
        SimulatedTarget::new("3x Osc")
            .with_parameter("Osc 1 level", 0.1)
            .with_parameter("Osc 2 level", 0.5)
            .with_parameter("Osc 3 level", 0.9),
    )?;
    host.insert_target(
        TargetAddress::slot(1, 3),
        SimulatedTarget::new("Fruity Limiter")
            .with_parameter("Gain", 0.0)
            .with_parameter("Ceiling", 1.0),
    )?;
    Ok(host)
}

fn parse_command(line: &str) -> std::result::Result<Option<Command>, CommandError> {
    let mut words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    let name = words.remove(0);

    let command = match name {
        "check" => {
            let keep_alive = words.iter().any(|w| *w == "--keep-alive");
            words.retain(|w| *w != "--keep-alive");
            let indexes = words
                .iter()
                .map(|w| parse_arg::<usize>(w))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            let request = match indexes.as_slice() {
                [] if keep_alive => return Err(CommandError::Usage("check <index> [slot] [--keep-alive]")),
                [] => None,
                [index] => Some(CheckRequest::new(*index)),
                [index, slot] => Some(CheckRequest::new(*index).slot(*slot)),
                _ => return Err(CommandError::Usage("check <index> [slot] [--keep-alive]")),
            };
            Command::Check(request.map(|r| if keep_alive { r.keep_alive(true) } else { r }))
        }
        "set" => {
            let (address, index, value): (TargetAddress, usize, f64) = match words.as_slice() {
                [target, index, value] => (
                    TargetAddress::single(parse_arg(target)?),
                    parse_arg(index)?,
                    parse_arg(value)?,
                ),
                [target, slot, index, value] => (
                    TargetAddress::slot(parse_arg(target)?, parse_arg(slot)?),
                    parse_arg(index)?,
                    parse_arg(value)?,
                ),
                _ => return Err(CommandError::Usage("set <index> [slot] <param> <value>")),
            };
            Command::Set {
                address,
                index,
                value,
            }
        }
        "tick" => match words.as_slice() {
            [] => Command::Tick(1),
            [count] => Command::Tick(parse_arg(count)?),
            _ => return Err(CommandError::Usage("tick [count]")),
        },
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_arg<T: std::str::FromStr>(word: &str) -> std::result::Result<T, CommandError> {
    word.parse().map_err(|_| CommandError::InvalidArgument(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_without_args_is_the_toggle() {
        assert_eq!(parse_command("check"), Ok(Some(Command::Check(None))));
    }

    #[test]
    fn check_parses_slot_and_keep_alive() {
        let command = parse_command("check 1 3 --keep-alive").unwrap();

        assert_eq!(
            command,
            Some(Command::Check(Some(CheckRequest::new(1).slot(3).keep_alive(true))))
        );
    }

    #[test]
    fn set_accepts_single_and_slot_addresses() {
        assert_eq!(
            parse_command("set 2 1 0.6").unwrap(),
            Some(Command::Set {
                address: TargetAddress::single(2),
                index: 1,
                value: 0.6,
            })
        );
        assert_eq!(
            parse_command("set 1 3 0 0.25").unwrap(),
            Some(Command::Set {
                address: TargetAddress::slot(1, 3),
                index: 0,
                value: 0.25,
            })
        );
    }

    #[test]
    fn tick_defaults_to_one() {
        assert_eq!(parse_command("tick").unwrap(), Some(Command::Tick(1)));
        assert_eq!(parse_command("tick 20").unwrap(), Some(Command::Tick(20)));
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn malformed_commands_are_rejected() {
        assert_eq!(
            parse_command("check -1"),
            Err(CommandError::InvalidArgument("-1".to_string()))
        );
        assert!(matches!(parse_command("check --keep-alive"), Err(CommandError::Usage(_))));
        assert_eq!(
            parse_command("listen 2"),
            Err(CommandError::Unknown("listen".to_string()))
        );
    }

    #[test]
    fn demo_rack_has_scenario_target() {
        use param_checker::HostApis;

        let host = demo_rack().unwrap();
        assert_eq!(host.parameter_count(&TargetAddress::single(2)), 3);
    }
}
