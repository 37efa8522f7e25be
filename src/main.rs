use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anyhow::Context;
use idgen_playbook::{
    ExitStatus, INPUT_NAME, INPUT_NAMESPACE, INPUT_VERSION, MemoryIo, OUTPUT_UUID, OutputType,
    UuidGeneratorApp,
};
use idgen_uuid::{
    GeneratorConfig, IdentifierService, NodeId, node_id_from_env_value,
    strict_versions_from_env_value,
};

/// Exit code for problems with the host itself (bad flags, unreadable parameter file, bad
/// configuration), as opposed to a failed generation step.
const HOST_ERROR_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "idgen")]
#[command(about = "Generate a UUID (versions 1, 3, 4, 5) as a playbook step")]
struct Cli {
    /// UUID version to generate (1, 3, 4 or 5)
    #[arg(long, allow_hyphen_values = true)]
    uuid_version: Option<String>,
    /// Namespace UUID for versions 3 and 5 (hyphenated form)
    #[arg(long)]
    uuid_namespace: Option<String>,
    /// Name for versions 3 and 5
    #[arg(long, allow_hyphen_values = true)]
    uuid_name: Option<String>,
    /// JSON object of input parameters; flags override values from the file
    #[arg(long)]
    params: Option<PathBuf>,
    /// Do not write the `uuid` output (status message only)
    #[arg(long)]
    no_output: bool,
    /// Fail on versions without a generator instead of succeeding with no output
    #[arg(long)]
    strict_versions: bool,
    /// Node id for version 1 (12 hex digits); overrides IDGEN_NODE_ID
    #[arg(long)]
    node_id: Option<String>,
}

/// Entry point for the `idgen` host.
///
/// # Environment Variables
/// - `IDGEN_NODE_ID`: node id for version 1 UUIDs (default: random multicast id per process)
/// - `IDGEN_STRICT_VERSIONS`: `true` to fail on unsupported versions (default: `false`)
/// - `RUST_LOG`: log filter (default directive: `idgen=info`)
///
/// # Output
/// The status message goes to stderr, the outputs as a JSON object to stdout. The exit code
/// is 0 on success, 1 when generation fails and 2 when the host cannot run the step.
fn main() -> ExitCode {
    match run() {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(HOST_ERROR_EXIT_CODE)
        }
    }
}

fn run() -> anyhow::Result<ExitStatus> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("idgen=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = resolve_config(&cli)?;
    let mut rng = rand::thread_rng();
    let app = UuidGeneratorApp::new(IdentifierService::from_config(&config, &mut rng));

    let mut io = match &cli.params {
        Some(path) => MemoryIo::from_json_file(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => MemoryIo::new(),
    };
    for (name, value) in [
        (INPUT_VERSION, cli.uuid_version),
        (INPUT_NAMESPACE, cli.uuid_namespace),
        (INPUT_NAME, cli.uuid_name),
    ] {
        if let Some(value) = value {
            io.set_input(name, value);
        }
    }
    if !cli.no_output {
        io = io.expect_output(OUTPUT_UUID, OutputType::String);
    }

    let status = app.run(&mut io);

    if let Some(message) = io.last_message() {
        eprintln!("{}", message);
    }
    println!("{}", serde_json::to_string_pretty(io.outputs())?);

    Ok(status)
}

/// Builds the generator configuration from the environment, with flags taking precedence.
fn resolve_config(cli: &Cli) -> anyhow::Result<GeneratorConfig> {
    let node_id = match &cli.node_id {
        Some(value) => Some(value.parse::<NodeId>().context("parsing --node-id")?),
        None => node_id_from_env_value(std::env::var("IDGEN_NODE_ID").ok())
            .context("parsing IDGEN_NODE_ID")?,
    };
    let strict_versions = cli.strict_versions
        || strict_versions_from_env_value(std::env::var("IDGEN_STRICT_VERSIONS").ok())
            .context("parsing IDGEN_STRICT_VERSIONS")?;

    tracing::debug!(
        "config: node id {}, strict versions {}",
        node_id.map_or_else(|| "random".to_string(), |n| n.to_string()),
        strict_versions
    );
    Ok(GeneratorConfig::new(node_id, strict_versions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generation_flags() {
        let cli = Cli::try_parse_from([
            "idgen",
            "--uuid-version",
            "5",
            "--uuid-namespace",
            "63475079-2605-11e8-a408-27f70ff2806d",
            "--uuid-name",
            "-foobar",
        ])
        .unwrap();

        assert_eq!(cli.uuid_version.as_deref(), Some("5"));
        assert_eq!(cli.uuid_name.as_deref(), Some("-foobar"));
        assert!(!cli.no_output);
        assert!(cli.params.is_none());
    }

    #[test]
    fn test_cli_accepts_negative_version() {
        let cli = Cli::try_parse_from(["idgen", "--uuid-version", "-1"]).unwrap();

        assert_eq!(cli.uuid_version.as_deref(), Some("-1"));
    }

    #[test]
    fn test_resolve_config_flags_take_precedence() {
        let cli = Cli::try_parse_from([
            "idgen",
            "--strict-versions",
            "--node-id",
            "02:00:5e:10:00:01",
        ])
        .unwrap();

        let config = resolve_config(&cli).unwrap();

        assert!(config.strict_versions());
        assert_eq!(
            config.node_id().map(|n| n.to_string()).as_deref(),
            Some("02005e100001")
        );
    }

    #[test]
    fn test_resolve_config_rejects_bad_node_id() {
        let cli = Cli::try_parse_from(["idgen", "--strict-versions", "--node-id", "xyz"]).unwrap();

        let err = resolve_config(&cli).unwrap_err();

        assert!(format!("{:#}", err).contains("--node-id"));
    }
}
