use std::fs;
use std::io::{self, BufWriter, Write as _};
use std::path::PathBuf;
use std::process;

use structopt::StructOpt;

use dedart::prelude::*;

/// Segments Japanese text into dictionary morphemes (§6).
#[derive(StructOpt)]
#[structopt(name = "analyze")]
struct Cli {
    /// Path to the MeCab-compatible sys.dic file
    #[structopt(parse(from_os_str))]
    sys_dic: PathBuf,

    /// Path to the bigram connection-cost matrix.bin file
    #[structopt(parse(from_os_str))]
    matrix_bin: PathBuf,

    /// Path to the UTF-8 input text to analyze
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Raise log verbosity (pass twice for trace-level detail)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn main() {
    let args = Cli::from_args();
    init_logging(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("analyze: {}", err);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(args: &Cli) -> AnalyzerResult<()> {
    let dictionary = Dictionary::from_paths(&args.sys_dic, &args.matrix_bin)?;

    let text = fs::read_to_string(&args.input)
        .map_err(AnalyzerError::from)
        .map_err(|e| e.with_context(format!("reading {}", args.input.display())))?;
    let text = dedart::input_text::strip_eol(&text);

    let lattice = build_lattice(&dictionary, text)?;
    let (path, _cost) = shortest_path(&dictionary, &lattice)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    dedart::output::write_path(&mut writer, &path)?;
    writer.flush()?;

    Ok(())
}
