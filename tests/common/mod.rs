//! Shared utilities for integration tests.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use vanity_router::config::{parse_config, validate_config, ConfigFormat};
use vanity_router::routing::{Resolver, SharedResolver};
use vanity_router::{HttpServer, Shutdown};

pub const CONFIG: &str = r#"
host: go.example.com
cache_max_age: 3600
paths:
  /portmidi:
    repo: https://github.com/rakyll/portmidi
  /tools:
    repo: https://hg.example.com/tools
    vcs: hg
  /tools/cmd:
    repo: https://github.com/example/cmd
"#;

/// Build a shared resolver from a YAML document.
pub fn resolver_from_yaml(yaml: &str) -> SharedResolver {
    let file = parse_config(yaml, ConfigFormat::Yaml).unwrap();
    let config = validate_config(&file).unwrap();
    Resolver::from_config(config).into_shared()
}

/// Decode the slash escaping some askama releases apply.
#[allow(dead_code)]
pub fn decoded(html: String) -> String {
    html.replace("&#x2f;", "/")
}

/// Serve `resolver` on an ephemeral port.
#[allow(dead_code)]
pub async fn start_server(resolver: SharedResolver) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        HttpServer::new(resolver).run(listener, rx).await.unwrap();
    });

    (addr, shutdown)
}
