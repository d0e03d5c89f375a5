//! Local stand-in for the remote catalog, shared by the unit tests and the
//! integration tests in `tests/`.

use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread;
use tiny_http::{Header, Response, Server};

type Routes = Arc<Mutex<HashMap<String, (u16, String)>>>;

pub fn creature_json(name: &str) -> Value {
    json!({
        "name": name,
        "sprites": {
            "front_default": format!("https://img.test/{name}.png"),
            "other": {
                "official-artwork": {
                    "front_default": format!("https://img.test/artwork/{name}.png")
                }
            }
        },
        "types": [
            { "slot": 1, "type": { "name": "grass" } },
            { "slot": 2, "type": { "name": "poison" } }
        ]
    })
}

pub struct CatalogServer {
    addr: SocketAddr,
    routes: Routes,
}

impl CatalogServer {
    /// Serves `/pokemon/<name>` for every given name; everything else is 404.
    pub fn start(names: &[&str]) -> Self {
        let server = Server::http("127.0.0.1:0").expect("bind catalog server");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("catalog server has an IP address");

        let routes: Routes = Arc::new(Mutex::new(HashMap::new()));
        {
            let mut table = routes.lock().unwrap();
            for name in names {
                table.insert(
                    format!("/pokemon/{name}"),
                    (200, creature_json(name).to_string()),
                );
            }
        }

        let thread_routes = Arc::clone(&routes);
        thread::spawn(move || {
            for request in server.incoming_requests() {
                let path = request.url().to_string();
                let (status, body) = thread_routes
                    .lock()
                    .unwrap()
                    .get(&path)
                    .cloned()
                    .unwrap_or((404, r#"{"detail":"Not found."}"#.to_string()));
                let header = Header::from_bytes("Content-Type", "application/json").unwrap();
                let response = Response::from_string(body)
                    .with_status_code(status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });

        Self { addr, routes }
    }

    /// Serves an arbitrary body with status 200 under `/pokemon/<name>`.
    pub fn with_raw(self, name: &str, body: &str) -> Self {
        self.with_route(&format!("/pokemon/{name}"), 200, body)
    }

    pub fn with_route(self, path: &str, status: u16, body: &str) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/pokemon", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}
