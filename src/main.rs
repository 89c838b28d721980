use clap::{CommandFactory, Parser};
use encoji::{PayloadSource, Smuggler, SmugglerConfig};
use env_logger::Builder;
use log::LevelFilter;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("ENCOJI_VERSION");
const PROFILE: &str = env!("ENCOJI_PROFILE");
const GIT_HASH: &str = env!("ENCOJI_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, PROFILE, GIT_HASH))
}

/// Process exit statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Ok = 0,
    MissingInput = 1,
    TooManyInputs = 2,
    ExecutionError = 4,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status as u8)
    }
}

#[derive(Parser)]
#[command(name = "encoji")]
#[command(about = "Encode/decode text using unicode variation selectors", long_about = None)]
struct Cli {
    /// Smuggle data within provided text
    #[arg(long, value_name = "TEXT")]
    encode: Option<String>,

    /// Smuggle data from file within provided text
    #[arg(long, value_name = "PATH")]
    encodefile: Option<PathBuf>,

    /// Decode smuggled data
    #[arg(long)]
    decode: bool,

    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log each processed line to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Text to process instead of stdin
    text: Vec<String>,
}

impl Cli {
    /// Whether any mode was asked for with a usable value
    fn has_mode(&self) -> bool {
        self.decode
            || self.version
            || self.encode.as_deref().is_some_and(|text| !text.is_empty())
            || self
                .encodefile
                .as_deref()
                .is_some_and(|path| !path.as_os_str().is_empty())
    }

    fn flag_count(&self) -> usize {
        [
            self.encode.is_some(),
            self.encodefile.is_some(),
            self.decode,
            self.version,
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

fn init_logger(verbose: bool) {
    Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .parse_default_env()
        .init();
}

fn print_usage() {
    eprintln!("{}", Cli::command().render_help());
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if !cli.has_mode() {
        print_usage();
        return Status::MissingInput.into();
    }
    if cli.flag_count() > 1 {
        eprintln!("Error: too many flags provided");
        print_usage();
        return Status::TooManyInputs.into();
    }

    if cli.version {
        println!("encoji version {}", get_version());
        return Status::Ok.into();
    }

    let config = match (cli.encode, cli.encodefile) {
        (Some(text), _) => SmugglerConfig::encode(&PayloadSource::Text(text)),
        (None, Some(path)) => SmugglerConfig::encode(&PayloadSource::File(path)),
        (None, None) => Ok(SmugglerConfig::decode()),
    };

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Status::ExecutionError.into();
        }
    };
    log::debug!("mode {:?}, payload {} bytes", config.mode, config.payload.len());

    let smuggler = Smuggler::new(config);
    let stdout = io::stdout();
    let result = if cli.text.is_empty() {
        smuggler.run(io::stdin().lock(), stdout.lock())
    } else {
        smuggler.run(Cursor::new(cli.text.join(" ")), stdout.lock())
    };

    match result {
        Ok(lines) => {
            log::info!("processed {} lines", lines);
            Status::Ok.into()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Status::ExecutionError.into()
        }
    }
}
