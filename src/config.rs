use std::path::PathBuf;
use clap::{value_parser, Arg, ArgMatches, Command};
use tokio::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Interactive two-player game on the console
    Play { round: Duration },
    /// HTTP lookup service
    Serve { listen_host: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub words_path: PathBuf,
    pub letters_path: PathBuf,
    pub log_file: Option<String>,
    pub mode: Mode,
}

pub fn build_cli() -> Command {
    Command::new("wordrack")
        .version("0.1")
        .author("Ron Straight <straightre@gmail.com>")
        .about("Two players, ten letters, fifteen seconds each")
        .arg(
            Arg::new("words")
                .long("words")
                .num_args(1)
                .global(true)
                .default_value("share/scrabble_words.txt")
                .help("Word list, one word per line"),
        )
        .arg(
            Arg::new("letters")
                .long("letters")
                .num_args(1)
                .global(true)
                .default_value("share/letter_info.txt")
                .help("Letter info: '<points> <letter><count> ...' per line"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .global(true)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .subcommand(
            Command::new("play")
                .about("Play rounds on the console (default)")
                .arg(
                    Arg::new("round-secs")
                        .long("round-secs")
                        .num_args(1)
                        .value_parser(value_parser!(u64).range(1..))
                        .default_value("15")
                        .help("Length of each player's entry window in seconds"),
                ),
        )
        .subcommand(
            Command::new("serve")
                .about("Serve rack validation and solving over HTTP")
                .arg(
                    Arg::new("listen-host")
                        .long("listen-host")
                        .num_args(1)
                        .default_value("0.0.0.0:2345")
                        .help("Specify the listen address (e.g., 0.0.0.0:2345)"),
                ),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let mode = match matches.subcommand() {
            Some(("serve", sub)) => Mode::Serve {
                listen_host: sub
                    .get_one::<String>("listen-host")
                    .cloned()
                    .unwrap_or_else(|| "0.0.0.0:2345".to_string()),
            },
            Some(("play", sub)) => Mode::Play {
                round: Duration::from_secs(sub.get_one::<u64>("round-secs").copied().unwrap_or(15)),
            },
            _ => Mode::Play { round: Duration::from_secs(15) },
        };

        // global args resolve against the subcommand's matches when one was given
        let scope = matches.subcommand().map_or(matches, |(_, sub)| sub);
        let path_arg = |name: &str, default: &str| {
            scope
                .get_one::<String>(name)
                .map_or_else(|| PathBuf::from(default), PathBuf::from)
        };

        Config {
            words_path: path_arg("words", "share/scrabble_words.txt"),
            letters_path: path_arg("letters", "share/letter_info.txt"),
            log_file: scope.get_one::<String>("log-file").cloned(),
            mode,
        }
    }
}
