use federation_atlas::adapters::inbound::http::AtlasServer;
use federation_atlas::adapters::outbound::console::{StderrProgressReporter, TreePrinter};
use federation_atlas::adapters::outbound::filesystem::JsonManifestReader;
use federation_atlas::adapters::outbound::network::AtlasHttpClient;
use federation_atlas::adapters::outbound::store::{FileGraphStore, InMemoryGraphStore};
use federation_atlas::application::dto::{PublishRequest, TreeRequest};
use federation_atlas::application::read_models::TreeView;
use federation_atlas::application::use_cases::{BuildTreeUseCase, PublishManifestsUseCase};
use federation_atlas::application::TopologyService;
use federation_atlas::cli::{Args, Command, PublishArgs, ServeArgs, TreeArgs};
use federation_atlas::config::{self, Settings};
use federation_atlas::logging;
use federation_atlas::ports::inbound::TopologyPort;
use federation_atlas::ports::outbound::TopologyClient;
use federation_atlas::shared::error::{AtlasError, ExitCode};
use federation_atlas::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // clap exits with 2 on usage errors and 0 for --help/--version
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Serve(serve) => run_serve(serve, args.verbose).await,
        Command::Publish(publish) => {
            logging::init(logging::effective_level("warn", args.verbose));
            run_publish(publish).await
        }
        Command::Tree(tree) => {
            logging::init(logging::effective_level("warn", args.verbose));
            run_tree(tree).await
        }
    }
}

async fn run_serve(serve: ServeArgs, verbose: u8) -> Result<()> {
    let mut settings = Settings::resolve(load_config(serve.config.as_deref())?)?;

    // CLI flags take precedence over file and environment
    if let Some(bind) = serve.bind {
        settings.host = bind;
    }
    if let Some(port) = serve.port {
        settings.port = port;
    }
    if let Some(store) = serve.store {
        settings.store_path = Some(store);
    }

    logging::init(logging::effective_level(&settings.log_level, verbose));

    let topology: Arc<dyn TopologyPort> = match settings.store_path.as_deref() {
        Some(path) => {
            let store = Arc::new(FileGraphStore::open(path)?);
            Arc::new(
                TopologyService::new(store, settings.max_depth).with_max_nodes(settings.max_nodes),
            )
        }
        None => {
            tracing::warn!(target: "atlas::store", "No store path configured, the graph is kept in memory only");
            let store = Arc::new(InMemoryGraphStore::new());
            Arc::new(
                TopologyService::new(store, settings.max_depth).with_max_nodes(settings.max_nodes),
            )
        }
    };

    AtlasServer::new(&settings.host, settings.port, topology)
        .serve()
        .await
}

async fn run_publish(publish: PublishArgs) -> Result<()> {
    let client = AtlasHttpClient::new(&publish.server)?;
    let use_case =
        PublishManifestsUseCase::new(JsonManifestReader::new(), client, StderrProgressReporter::new());

    let summary = use_case
        .execute(PublishRequest::new(publish.manifests))
        .await?;

    if !summary.is_success() {
        anyhow::bail!(
            "{} manifest(s) could not be published\n\n💡 Hint: Check the messages above for each failed file.",
            summary.failures.len()
        );
    }
    Ok(())
}

async fn run_tree(tree: TreeArgs) -> Result<()> {
    let view = match (tree.store.as_deref(), tree.server.as_deref()) {
        (Some(path), _) => tree_from_store(path, &tree).await?,
        (None, Some(server)) => {
            AtlasHttpClient::new(server)?
                .fetch_tree(&tree.host, tree.max_depth)
                .await?
        }
        (None, None) => {
            return Err(AtlasError::Config {
                message: "Either --store or --server is required".to_string(),
            }
            .into())
        }
    };

    let colored = !tree.no_color && std::io::stdout().is_terminal();
    print!("{}", TreePrinter::new(colored).render(&view));
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Option<config::ConfigFile>> {
    match explicit {
        Some(path) => Ok(Some(config::load_config_from_path(path)?)),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

async fn tree_from_store(path: &Path, tree: &TreeArgs) -> Result<TreeView> {
    // Only the tree limits apply here; server and store settings stay with `serve`
    let config_file = load_config(tree.config.as_deref())?;
    let settings = Settings::resolve_with(config_file, |_| None)?;

    if !path.exists() {
        return Err(AtlasError::StoreRead {
            path: path.to_path_buf(),
            details: "file does not exist".to_string(),
        }
        .into());
    }

    let store = FileGraphStore::open(path)?;
    let use_case =
        BuildTreeUseCase::new(store, settings.max_depth).with_max_nodes(settings.max_nodes);
    use_case
        .execute(TreeRequest::new(&tree.host).with_max_depth(tree.max_depth))
        .await
}
