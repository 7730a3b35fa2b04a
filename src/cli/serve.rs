use crate::cli::{Config, ServeArgs, load_config};
use crate::server::start::{ServerConfig, start_server};
use std::path::PathBuf;

pub async fn handle_serve_command(
    args: ServeArgs,
    config_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let server_config = resolve_server_config(args, config);

    println!("Starting viewer server...");
    println!("Bind: {}", server_config.bind_address);
    println!("Viewer root: {}", server_config.viewer_root.display());
    println!("Processed root: {}", server_config.processed_root.display());

    start_server(server_config).await?;
    Ok(())
}

/// Merge CLI arguments over file configuration. Arguments win; the processed
/// root falls back to `<viewer_root>/processed`, which is where preprocess.py
/// writes its output.
fn resolve_server_config(args: ServeArgs, config: Config) -> ServerConfig {
    let port = args.port.unwrap_or(config.server.port);
    let bind = args.bind.unwrap_or(config.server.bind);
    let viewer_root = args.viewer_root.unwrap_or(config.server.viewer_root);
    let processed_root = args
        .processed_root
        .or(config.server.processed_root)
        .unwrap_or_else(|| viewer_root.join("processed"));

    ServerConfig {
        bind_address: format!("{bind}:{port}"),
        viewer_root,
        processed_root,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> ServeArgs {
        ServeArgs {
            port: None,
            bind: None,
            viewer_root: None,
            processed_root: None,
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = resolve_server_config(empty_args(), Config::default());
        assert_eq!(resolved.bind_address, "0.0.0.0:8080");
        assert_eq!(resolved.viewer_root, PathBuf::from("."));
        assert_eq!(resolved.processed_root, PathBuf::from("./processed"));
    }

    #[test]
    fn test_resolve_args_override_config() {
        let args = ServeArgs {
            port: Some(9090),
            bind: Some("127.0.0.1".to_string()),
            viewer_root: Some(PathBuf::from("/srv/viewer")),
            processed_root: None,
        };

        let resolved = resolve_server_config(args, Config::default());
        assert_eq!(resolved.bind_address, "127.0.0.1:9090");
        assert_eq!(resolved.viewer_root, PathBuf::from("/srv/viewer"));
        assert_eq!(resolved.processed_root, PathBuf::from("/srv/viewer/processed"));
    }

    #[test]
    fn test_resolve_explicit_processed_root() {
        let args = ServeArgs {
            processed_root: Some(PathBuf::from("/data/processed")),
            ..empty_args()
        };

        let resolved = resolve_server_config(args, Config::default());
        assert_eq!(resolved.processed_root, PathBuf::from("/data/processed"));
    }

    #[test]
    fn test_resolve_processed_root_from_config() {
        let mut config = Config::default();
        config.server.processed_root = Some(PathBuf::from("/from/config"));

        let resolved = resolve_server_config(empty_args(), config);
        assert_eq!(resolved.processed_root, PathBuf::from("/from/config"));
    }
}
