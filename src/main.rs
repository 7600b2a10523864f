use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod cleanup;
mod mask;

#[derive(Debug, Parser)]
#[clap(
    name = "infographic-fix",
    about = "Recolor the green borders of the infographic and crop it to its content area"
)]
struct Args {
    /// Path to the infographic PNG. The file is overwritten in place; the
    /// untouched original is kept next to it with an "-original" suffix.
    #[clap(
        value_name = "IMAGE",
        default_value = "img/infographic-navigasi-strategis.png"
    )]
    input: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    cleanup::run(&args.input)
}
