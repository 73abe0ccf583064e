use std::path::PathBuf;

use clap::Parser;

use class_inspector::{
    jar::{disassemble_class, io::open_jar, read_class_bytes},
    logging::init_cli_logger,
};

/// Print the Krakatau disassembly of one class from a JAR
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input JAR
    jar: PathBuf,

    /// Class as entry path (`com/a/B.class`) or dotted name (`com.a.B`)
    class: String,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_cli_logger(args.verbose);

    let mut zip = open_jar(&args.jar)?;
    let (entry, bytes) = read_class_bytes(&mut zip, &args.class)?;
    tracing::info!("Disassembling {} ({} bytes)", entry, bytes.len());

    print!("{}", disassemble_class(&bytes)?);

    Ok(())
}
