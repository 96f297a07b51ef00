use anyhow::{Context, Result};
use clap::Parser;
use cpwrite::{config::Config, geom::Geom, program::orca::Orca};

/// Creates an ORCA counterpoise-correction input file from an XYZ file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The XYZ file to be processed
    xyz_file: String,

    /// The name of the input file to be created, or `-` for stdout
    orca_input_file: String,

    /// Number of the atom within the XYZ file where the first monomer block
    /// ends
    split_atom_no: usize,

    /// Method and basis set keywords for ORCA [default: M062X D3ZERO
    /// def2-TZVPD TIGHTSCF defgrid3]
    #[arg(short, long = "method_keywords", visible_alias = "method-keywords")]
    method_keywords: Option<String>,

    /// Amount of memory (maxcore), in MB, to be requested [default: 4000]
    #[arg(short, long)]
    ram: Option<String>,

    /// JSON file providing `method_keywords` and `ram`
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Print debugging information
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(args: &Args) {
    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level),
    )
    .format_timestamp(None)
    .format_target(false)
    .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_overrides(args.method_keywords, args.ram);

    let geom = Geom::load(&args.xyz_file)?;
    let orca = Orca::new(config.template(), config.ram, geom, args.split_atom_no)
        .with_context(|| {
            format!(
                "failed to split `{}` at atom {}",
                args.xyz_file, args.split_atom_no
            )
        })?;
    orca.write_input(&args.orca_input_file)?;
    Ok(())
}
