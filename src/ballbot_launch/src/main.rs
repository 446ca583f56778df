//! ballbot_launch CLI

use ballbot_launch::{
    ament::AmentIndex, ballbot::launch_description_for_host, export, generate_record, host,
    HostKind, LaunchDescription,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::{
    collections::HashMap,
    io::Write,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "ballbot_launch")]
#[command(about = "Launch description builder for the OCS2 ballbot DDP example", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true)]
    quiet: bool,

    /// Kernel identification file used to detect WSL
    #[arg(long, global = true, default_value = host::PROC_VERSION_PATH)]
    proc_version: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the launch description
    Describe {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Output file path ("-" for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },

    /// Resolve the launch description into record.json
    Record {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        /// Output file path ("-" for stdout)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,

        /// Colon-separated install prefixes (default: $AMENT_PREFIX_PATH)
        #[arg(long)]
        ament_prefix_path: Option<String>,
    },

    /// Print the host classification and terminal prefix
    Probe,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Xml,
    Yaml,
}

fn parse_launch_arg(s: &str) -> Result<(String, String), String> {
    ballbot_launch::parse_launch_arg(s).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let (host, description) = launch_description_for_host(&cli.proc_version);

    let result = match cli.command {
        Commands::Describe { format, output } => {
            report_host(host, &output);
            describe(&description, format, &output)
        }
        Commands::Record {
            args,
            output,
            ament_prefix_path,
        } => {
            report_host(host, &output);
            let ament = match ament_prefix_path {
                Some(path) => AmentIndex::from_path(&path),
                None => AmentIndex::from_env(),
            };
            let cli_args: HashMap<String, String> = args.into_iter().collect();
            record(&description, ament, cli_args, &output)
        }
        Commands::Probe => {
            println!("{}", host.diagnostic());
            println!("terminal prefix: {}", host.terminal_prefix());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// The diagnostic goes to stdout unless stdout carries the document.
fn report_host(host: HostKind, output: &Path) {
    if is_stdout(output) {
        eprintln!("{}", host.diagnostic());
    } else {
        println!("{}", host.diagnostic());
    }
}

fn describe(
    description: &LaunchDescription,
    format: Format,
    output: &Path,
) -> ballbot_launch::Result<()> {
    let content = match format {
        Format::Json => description.to_json()?,
        Format::Xml => export::to_launch_xml(description)?,
        Format::Yaml => export::to_launch_yaml(description)?,
    };
    write_output(output, &content)
}

fn record(
    description: &LaunchDescription,
    ament: AmentIndex,
    cli_args: HashMap<String, String>,
    output: &Path,
) -> ballbot_launch::Result<()> {
    let record = generate_record(description, ament, cli_args)?;
    write_output(output, &record.to_json()?)?;

    log::info!(
        "  {} arguments, {} includes, {} nodes",
        record.arguments.len(),
        record.include.len(),
        record.node.len()
    );
    Ok(())
}

fn write_output(output: &Path, content: &str) -> ballbot_launch::Result<()> {
    if is_stdout(output) {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
    } else {
        std::fs::write(output, content)?;
        log::info!("Generated {}", output.display());
    }
    Ok(())
}

fn is_stdout(output: &Path) -> bool {
    output.as_os_str() == "-"
}
