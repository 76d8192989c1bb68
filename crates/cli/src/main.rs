use {
    clap::{Parser, Subcommand},
    tracing::warn,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use {
    leetscope_catalog::{Catalog, build_variables},
    leetscope_relay::{RelayClient, RelayRequest},
};

#[derive(Parser)]
#[command(
    name = "leetscope",
    about = "leetscope — self-hosted explorer gateway for the LeetCode GraphQL API"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Address to bind to (overrides config value).
    #[arg(long, global = true)]
    bind: Option<String>,
    /// Port to listen on (overrides config value).
    #[arg(long, global = true)]
    port: Option<u16>,
    /// Custom config directory (overrides default ~/.config/leetscope/).
    #[arg(long, global = true, env = "LEETSCOPE_CONFIG_DIR")]
    config_dir: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway server (default when no subcommand is provided).
    Gateway,
    /// List the query catalog.
    Endpoints {
        /// Only show endpoints in this category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Run one catalog query against the live upstream and print the JSON.
    Query {
        /// Catalog endpoint id (see `leetscope endpoints`).
        id: String,
        /// LeetCode username the query is about.
        #[arg(short, long)]
        username: Option<String>,
    },
}

/// Initialise tracing with an env-filter; JSON output is opt-in.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();
    init_telemetry(&cli);

    if let Some(ref dir) = cli.config_dir {
        leetscope_config::set_config_dir(dir.clone());
    }

    let command = cli.command.take();
    match command {
        None | Some(Commands::Gateway) => run_gateway(&cli).await,
        Some(Commands::Endpoints { category }) => {
            list_endpoints(category.as_deref());
            Ok(())
        },
        Some(Commands::Query { id, username }) => {
            run_query(&id, username.as_deref().unwrap_or_default()).await
        },
    }
}

async fn run_gateway(cli: &Cli) -> anyhow::Result<()> {
    let mut config = leetscope_config::discover_and_load();
    if let Some(ref bind) = cli.bind {
        config.server.bind = bind.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    leetscope_gateway::start_gateway(&config).await
}

fn list_endpoints(category: Option<&str>) {
    let catalog = Catalog::builtin();
    for def in catalog.iter() {
        if let Some(wanted) = category
            && !def.category.eq_ignore_ascii_case(wanted)
        {
            continue;
        }
        let auth = if def.requires_auth { " [auth]" } else { "" };
        println!("{:<20} {:<12} {}{auth}", def.id, def.category, def.name);
    }
}

async fn run_query(id: &str, username: &str) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let Some(def) = catalog.get(id) else {
        anyhow::bail!("unknown endpoint: {id} (see `leetscope endpoints`)");
    };

    // Caller-side enforcement: the relay never carries credentials, so an
    // auth-required query would only ever come back empty.
    if def.requires_auth {
        anyhow::bail!("{id} requires an authenticated LeetCode session and cannot be relayed");
    }

    let needs_username = def
        .variable_spec
        .iter()
        .any(|(name, _)| matches!(*name, "username" | "userSlug"));
    if needs_username && username.is_empty() {
        anyhow::bail!("{id} needs --username");
    }

    let config = leetscope_config::discover_and_load();
    let relay = RelayClient::new(&config.upstream)?;
    let variables = build_variables(def, username, chrono::Local::now().date_naive());
    let request = RelayRequest {
        query: def.query.to_string(),
        variables: Some(variables),
        operation_name: Some(def.operation_name.to_string()),
    };

    let body = relay.forward(&request).await?;
    if let Some(errors) = body.get("errors").and_then(|e| e.as_array())
        && !errors.is_empty()
    {
        // A GraphQL-level failure inside a 200; the payload still prints.
        warn!(count = errors.len(), "upstream reported GraphQL errors");
    }
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
