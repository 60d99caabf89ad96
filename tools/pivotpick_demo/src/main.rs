use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use pivotpick::{
    config, field::find_field, AnalyticsState, ApplicationConfig, FieldPicker, FileStore,
    HttpMetadataSource, MemoryStore, MetadataService, StateStorage,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "pivotpick-demo")]
#[command(about = "Browse pivot field metadata and build query requests")]
#[command(version)]
struct Args {
    /// YAML config with endpointPrefix / microfrontend
    #[arg(long)]
    config: Option<PathBuf>,

    /// Endpoint prefix, overrides config file and environment
    #[arg(long)]
    endpoint: Option<String>,

    /// Persistent token store (JSON file)
    #[arg(long)]
    token_store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List grouped fields for a template version
    Fields {
        #[arg(long, default_value = "Tcf3Ks9ZRpB")]
        template: String,

        #[arg(long, default_value = "fb2GC7FInSu")]
        version: String,

        /// Only show fields whose label contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Select fields by id and print the derived query request
    Request {
        #[arg(long, default_value = "Tcf3Ks9ZRpB")]
        template: String,

        #[arg(long, default_value = "fb2GC7FInSu")]
        version: String,

        /// Field ids, in selection order
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// Store an access token for later requests
    Login {
        access_token: String,

        #[arg(long, default_value = "")]
        refresh_token: String,

        #[arg(long)]
        remember_me: bool,
    },
    /// Forget stored tokens
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let app_config = load_config(&args)?;
    let storage = open_storage(args.token_store.as_ref())?;

    match args.command {
        Commands::Fields { template, version, search } => {
            let service = metadata_service(&app_config, &storage);
            let mut state = AnalyticsState::new();
            let mut picker = FieldPicker::load(&service, &mut state, &template, &version).await?;
            if let Some(term) = search {
                picker.set_search_term(&term);
            }

            for group in picker.filtered_groups() {
                println!("{}", group.group_name);
                for field in &group.fields {
                    let modes = if field.aggregation_modes.is_empty() {
                        String::new()
                    } else {
                        format!(" [{}]", field.aggregation_modes.join(", "))
                    };
                    println!("  {:<24} {:<32} {}{}", field.id, field.label, field.data_type, modes);
                }
            }
        }
        Commands::Request { template, version, fields } => {
            let service = metadata_service(&app_config, &storage);
            let mut state = AnalyticsState::new();
            let picker = FieldPicker::load(&service, &mut state, &template, &version).await?;

            for id in &fields {
                let Some(field) = find_field(picker.groups(), id) else {
                    bail!("Field '{}' not found in template {}:{}", id, template, version);
                };
                picker.select(field, &mut state);
            }

            let request = state
                .query_request()
                .context("No query request could be derived")?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::Login { access_token, refresh_token, remember_me } => {
            storage.store_authentication_token(&access_token, &refresh_token, remember_me);
            if !remember_me {
                info!("Token kept for this session only; pass --remember-me to persist it");
            }
        }
        Commands::Logout => {
            storage.clear_authentication_token();
            info!("Stored tokens cleared");
        }
    }

    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<ApplicationConfig> {
    let mut app_config = match &args.config {
        Some(path) => config::parse_file(path)?,
        None => ApplicationConfig::default(),
    };
    app_config.apply_env()?;
    if let Some(endpoint) = &args.endpoint {
        app_config.set_endpoint_prefix(endpoint.as_str());
    }
    info!("Using endpoint prefix '{}'", app_config.endpoint_prefix());
    Ok(app_config)
}

fn open_storage(path: Option<&PathBuf>) -> anyhow::Result<StateStorage> {
    let session = Arc::new(MemoryStore::new());
    let storage = match path {
        Some(path) => StateStorage::new(session, Arc::new(FileStore::open(path)?)),
        None => StateStorage::new(session, Arc::new(MemoryStore::new())),
    };
    Ok(storage)
}

fn metadata_service(app_config: &ApplicationConfig, storage: &StateStorage) -> MetadataService {
    let source = HttpMetadataSource::new(reqwest::Client::new(), app_config)
        .with_bearer_token(storage.get_authentication_token());
    MetadataService::new(Arc::new(source))
}
