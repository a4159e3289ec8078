//! Minimal baton example: chained middleware, ordered routes, a mounted mux.
//!
//! Run with:
//!   cargo run --example basic
//!
//! Try:
//!   curl http://localhost:3000/users/42
//!   curl -H 'authorization: token' http://localhost:3000/users/42
//!   curl http://localhost:3000/users/me
//!   curl http://localhost:3000/api/v1/orgs/acme/teams/core
//!   curl http://localhost:3000/static/css/site.css

use baton::{Mux, Request, ResponseWriter, Server, middleware};
use http::StatusCode;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let api = Mux::new()
        .get("/api/v1/orgs/:org/teams/:team", get_team)
        .get("/api/v1/orgs/:org", get_org);

    let app = Mux::new()
        .any("/*path", middleware::trace())
        .get("/users/me", current_user)
        .chain("GET", "/users/:id", (require_auth, get_user))
        .chain("*", "/api/v1/orgs/:org/*rest", (api,))
        .get("/static/*file", serve_static);

    if let Err(e) = Server::bind(([0, 0, 0, 0], 3000).into()).serve(app).await {
        eprintln!("server error: {e}");
    }
}

// Stops the chain with 401 unless the request carries credentials.
fn require_auth(w: &mut dyn ResponseWriter, req: &mut Request<'_>) {
    if req.header("authorization").is_none() {
        w.set_status(StatusCode::UNAUTHORIZED);
        return;
    }
    req.next(w);
}

// GET /users/me, registered ahead of /users/:id so it wins.
fn current_user(w: &mut dyn ResponseWriter, _req: &mut Request<'_>) {
    let _ = w.json(br#"{"id":"me","name":"guest"}"#);
}

// GET /users/:id
fn get_user(w: &mut dyn ResponseWriter, req: &mut Request<'_>) {
    let id = req.param("id").unwrap_or("unknown");
    let _ = w.json(format!(r#"{{"id":"{id}","name":"alice"}}"#).as_bytes());
}

// Mounted under /api/v1/orgs/:org. `org` comes from the outer route.
fn get_team(w: &mut dyn ResponseWriter, req: &mut Request<'_>) {
    let org = req.param("org").unwrap_or_default();
    let team = req.param("team").unwrap_or_default();
    let _ = w.json(format!(r#"{{"org":"{org}","team":"{team}"}}"#).as_bytes());
}

fn get_org(w: &mut dyn ResponseWriter, req: &mut Request<'_>) {
    let org = req.param("org").unwrap_or_default();
    let _ = w.json(format!(r#"{{"org":"{org}"}}"#).as_bytes());
}

fn serve_static(w: &mut dyn ResponseWriter, req: &mut Request<'_>) {
    match req.param("file") {
        Some(file) if !file.contains("..") => {
            let _ = w.text(&format!("contents of {file}"));
        }
        _ => w.set_status(StatusCode::FORBIDDEN),
    }
}
