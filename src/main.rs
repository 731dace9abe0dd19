use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pictbridge::{
    engine::{execute, CliEngine},
    error::BridgeError,
    model::Model,
    writer::ModelWriter,
};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "pictbridge",
    version,
    about = "Bridge to a PICT-style combinatorial test generation engine"
)]
struct Cli {
    /// Engine program to invoke.
    #[arg(long, global = true, default_value = "pict")]
    engine: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Forward raw arguments to the engine and print its output verbatim.
    Run {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Generate rows from a JSON or YAML model spec file.
    Model { file: PathBuf },
}

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        error!("{err:#}");
        // engine status codes become the process exit status unchanged
        let code = err
            .downcast_ref::<BridgeError>()
            .map(BridgeError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let engine = CliEngine::new(&cli.engine);

    match cli.command {
        Commands::Run { args } => {
            let output = execute(&engine, &args)?;
            println!("{output}");
        }
        Commands::Model { file } => {
            let model = Model::from_spec_file(&file)
                .with_context(|| format!("loading model spec `{}`", file.display()))?;
            let set = pictbridge::generate(&model, &engine, &ModelWriter::new())?;

            println!("{}", set.header.join("\t"));
            for row in &set.rows {
                let values: Vec<&str> = row.pairs.iter().map(|(_, v)| v.as_str()).collect();
                println!("{}", values.join("\t"));
            }
        }
    }

    Ok(())
}
