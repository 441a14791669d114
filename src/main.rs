use clap::Parser;
use log::debug;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use trisum::accumulator::Width;
use trisum::config::Config;
use trisum::console::input::{Lines, Terminal};
use trisum::console::{print, Session};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Integer width used for input and arithmetic: i32 or i64
    #[arg(short, long, env = "TRISUM_WIDTH")]
    width: Option<Width>,

    /// Print each accumulator result before the final output
    #[arg(short, long)]
    breakdown: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Path to a configuration file (default: ~/.config/trisum/config.toml)
    #[arg(short, long, env = "TRISUM_CONFIG")]
    config: Option<PathBuf>,

    /// Values of x, y and z; prompt for them if omitted
    #[arg(num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    values: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = Config::from_file(args.config.as_deref()).unwrap_or_default();
    if let Some(width) = args.width {
        config.width = width;
    }
    config.breakdown |= args.breakdown;
    config.color &= !args.no_color;
    debug!(target: "trisum", "resolved config: {config:?}");

    let colored = config.color && io::stdout().is_terminal();
    if colored {
        print::enable_color();
    }

    let preset: Option<[String; 3]> = args.values.try_into().ok();
    if preset.is_none() && io::stdin().is_terminal() {
        let mut session = Session::new(Terminal::new(colored)?, io::stdout(), config);
        session.run(None)?;
    } else {
        let input = Lines::new(io::stdin().lock(), io::stdout());
        let mut session = Session::new(input, io::stdout(), config);
        session.run(preset.as_ref())?;
    }

    Ok(())
}
