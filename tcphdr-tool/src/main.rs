//! Inspect stored tcp headers, derive responses and edit their flags.

mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tcphdr::{decode, file, respond, TcpHeader, TCP_HEADER_LEN};
use tracing::{error, info, warn};

use render::Rendered;

#[derive(Debug, Parser)]
#[command(name = "tcphdr-tool", about = "Inspect 20-byte tcp header blobs")]
struct Args {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Print the fields of a stored header
    Show { file: PathBuf },
    /// Print a header and the response derived from it
    Respond {
        file: PathBuf,
        /// Also store the response here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Drive bit 0x20 (--ack) and bit 0x10 (--syn) of the flags byte
    Flags {
        file: PathBuf,
        #[arg(long)]
        ack: bool,
        #[arg(long)]
        syn: bool,
        /// Store the edited header here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Answer every readable file, then set both edited bits on the last one
    Demo {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn print_header(bytes: &[u8; TCP_HEADER_LEN]) -> tcphdr::Result<()> {
    let decoded = decode(bytes)?;
    print!("{}", Rendered(&decoded));
    Ok(())
}

fn show(path: &Path) -> tcphdr::Result<()> {
    let header = file::load(path)?;
    print_header(&header)
}

fn answer(path: &Path, out: Option<&Path>) -> tcphdr::Result<()> {
    let request = file::load(path)?;
    println!("*** '{}' ***", path.display());
    print_header(&request)?;

    let response = respond(&request)?;
    println!("\nResponse Header:");
    print_header(&response)?;

    if let Some(out) = out {
        file::store(out, &response)?;
    }
    Ok(())
}

fn edit(path: &Path, ack: bool, syn: bool, out: Option<&Path>) -> tcphdr::Result<()> {
    let mut bytes = file::load(path)?;
    println!("*** Before modify:");
    print_header(&bytes)?;

    TcpHeader::new_unchecked(&mut bytes[..]).edit_flags(ack, syn);
    info!(ack, syn, flags = bytes[13], "edited flags byte");
    println!("*** After modify (ack={}, syn={}):", ack, syn);
    print_header(&bytes)?;

    if let Some(out) = out {
        file::store(out, &bytes)?;
    }
    Ok(())
}

fn demo(paths: &[PathBuf]) -> tcphdr::Result<()> {
    let mut last = None;
    let mut last_err = None;

    for path in paths {
        let request = match file::load(path) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "skipping unreadable header");
                last_err = Some(e);
                continue;
            }
        };

        println!("*** '{}' ***", path.display());
        print_header(&request)?;
        println!("\nResponse Header:");
        print_header(&respond(&request)?)?;
        println!();

        last = Some(request);
    }

    let Some(mut bytes) = last else {
        // Every file failed to load.
        return match last_err {
            Some(e) => Err(e),
            None => Ok(()),
        };
    };

    println!("*** Before modify:");
    print_header(&bytes)?;
    TcpHeader::new_unchecked(&mut bytes[..]).edit_flags(true, true);
    println!("*** After modify (ack=true, syn=true):");
    print_header(&bytes)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    let res = match &args.cmd {
        Cmd::Show { file } => show(file),
        Cmd::Respond { file, out } => answer(file, out.as_deref()),
        Cmd::Flags {
            file,
            ack,
            syn,
            out,
        } => edit(file, *ack, *syn, out.as_deref()),
        Cmd::Demo { files } => demo(files),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}
