use clap::{ArgGroup, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Topology dashboard backend for module-federation deployments
#[derive(Parser, Debug)]
#[command(name = "federation-atlas")]
#[command(version)]
#[command(
    about = "Record module-federation manifests and explore apps, remotes and shared dependencies",
    long_about = None
)]
pub struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Send manifest files to a running server
    Publish(PublishArgs),
    /// Print the federation tree of a host app
    Tree(TreeArgs),
}

#[derive(ClapArgs, Debug)]
pub struct ServeArgs {
    /// Path to a config file (defaults to ./federation-atlas.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// JSON snapshot file for the graph (in-memory when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub store: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct PublishArgs {
    /// Manifest JSON files
    #[arg(value_name = "MANIFEST", required = true)]
    pub manifests: Vec<PathBuf>,

    /// Base URL of the atlas server
    #[arg(long, value_name = "URL", default_value = "http://127.0.0.1:3030")]
    pub server: String,
}

#[derive(ClapArgs, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["store", "server"])))]
pub struct TreeArgs {
    /// Name of the host app
    #[arg(long)]
    pub host: String,

    /// Read the graph from a snapshot file
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Ask a running server instead
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Config file for the tree limits of --store (defaults to ./federation-atlas.config.yml when present)
    #[arg(short, long, value_name = "FILE", requires = "store")]
    pub config: Option<PathBuf>,

    /// Stop descending below this depth
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let args = Args::try_parse_from([
            "federation-atlas",
            "serve",
            "--bind",
            "0.0.0.0",
            "--port",
            "8080",
            "--store",
            "atlas.json",
        ])
        .unwrap();

        match args.command {
            Command::Serve(serve) => {
                assert_eq!(serve.bind.as_deref(), Some("0.0.0.0"));
                assert_eq!(serve.port, Some(8080));
                assert_eq!(serve.store, Some(PathBuf::from("atlas.json")));
                assert!(serve.config.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_publish_requires_manifest() {
        let result = Args::try_parse_from(["federation-atlas", "publish"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_publish_default_server() {
        let args =
            Args::try_parse_from(["federation-atlas", "publish", "shell.json", "cart.json"]).unwrap();
        match args.command {
            Command::Publish(publish) => {
                assert_eq!(publish.manifests.len(), 2);
                assert_eq!(publish.server, "http://127.0.0.1:3030");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_tree_requires_a_source() {
        let result = Args::try_parse_from(["federation-atlas", "tree", "--host", "shell"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_tree_rejects_both_sources() {
        let result = Args::try_parse_from([
            "federation-atlas",
            "tree",
            "--host",
            "shell",
            "--store",
            "atlas.json",
            "--server",
            "http://localhost:3030",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_tree_config_needs_store() {
        let result = Args::try_parse_from([
            "federation-atlas",
            "tree",
            "--host",
            "shell",
            "--server",
            "http://localhost:3030",
            "--config",
            "federation-atlas.config.yml",
        ]);
        assert!(result.is_err());

        let args = Args::try_parse_from([
            "federation-atlas",
            "tree",
            "--host",
            "shell",
            "--store",
            "atlas.json",
            "--config",
            "federation-atlas.config.yml",
        ])
        .unwrap();
        match args.command {
            Command::Tree(tree) => {
                assert_eq!(tree.config, Some(PathBuf::from("federation-atlas.config.yml")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_verbose_is_global() {
        let args = Args::try_parse_from([
            "federation-atlas",
            "tree",
            "--host",
            "shell",
            "--store",
            "atlas.json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
    }
}
