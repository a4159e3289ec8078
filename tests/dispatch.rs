use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use baton::{Handler, Mux, Recorder, ResponseWriter, handler_fn, unchained};
use bytes::Bytes;
use http::StatusCode;

fn request(method: &str, path: &str) -> http::Request<Bytes> {
    http::Request::builder().method(method).uri(path).body(Bytes::new()).unwrap()
}

fn serve(mux: &Mux, method: &str, path: &str) -> Recorder {
    let mut rec = Recorder::new();
    mux.serve(&mut rec, &request(method, path));
    rec
}

fn body(rec: &Recorder) -> &str {
    std::str::from_utf8(rec.body()).unwrap()
}

/// Writes `name`, then optionally continues.
fn mark(name: &'static str, call_next: bool) -> impl Handler {
    handler_fn(move |w, req| {
        let _ = w.write(name.as_bytes());
        if call_next {
            req.next(w);
        }
    })
}

#[test]
fn test_next_runs_following_route() {
    let mux = Mux::new()
        .on("GET", "/a", mark("h1", true))
        .on("GET", "/a", mark("h2", false));
    assert_eq!(body(&serve(&mux, "GET", "/a")), "h1h2");
}

#[test]
fn test_without_next_following_route_never_runs() {
    let mux = Mux::new()
        .on("GET", "/a", mark("h1", false))
        .on("GET", "/a", mark("h2", false));
    assert_eq!(body(&serve(&mux, "GET", "/a")), "h1");
}

#[test]
fn test_chain_runs_in_order() {
    let mux = Mux::new().chain(
        "GET",
        "/a",
        (mark("1", true), mark("2", true), mark("3", true)),
    );
    assert_eq!(body(&serve(&mux, "GET", "/a")), "123");
}

#[test]
fn test_chain_then_fallthrough() {
    let mux = Mux::new()
        .chain("GET", "/a/:x", (mark("a1", true), mark("a2", true)))
        .on("GET", "/b", mark("skipped", true))
        .on("*", "/*rest", mark("tail", true));
    assert_eq!(body(&serve(&mux, "GET", "/a/1")), "a1a2tail");
}

#[test]
fn test_callers_resume_in_reverse_order() {
    let around = |name: &'static str| {
        handler_fn(move |w, req| {
            let _ = w.write(format!("<{name}").as_bytes());
            req.next(w);
            let _ = w.write(format!("{name}>").as_bytes());
        })
    };
    let mux = Mux::new()
        .chain("GET", "/", (around("a"), around("b")))
        .on("GET", "/", around("c"));
    assert_eq!(body(&serve(&mux, "GET", "/")), "<a<b<cc>b>a>");
}

#[test]
fn test_next_after_exhaustion_is_noop() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mux = Mux::new().get("/", handler_fn(move |w, req| {
        counter.fetch_add(1, Ordering::SeqCst);
        req.next(w);
        req.next(w);
    }));

    let rec = serve(&mux, "GET", "/");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(rec.is_untouched());
}

#[test]
fn test_earlier_route_wins() {
    let mux = Mux::new()
        .on("GET", "/users/:id", mark("param", false))
        .on("GET", "/users/me", mark("literal", false));
    assert_eq!(body(&serve(&mux, "GET", "/users/me")), "param");
    assert_eq!(body(&serve(&mux, "GET", "/users/42")), "param");
}

#[test]
fn test_no_matching_method() {
    let calls = Arc::new(AtomicUsize::new(0));
    let count = |calls: &Arc<AtomicUsize>| {
        let calls = Arc::clone(calls);
        handler_fn(move |_w, _req| {
            calls.fetch_add(1, Ordering::SeqCst);
        })
    };
    let mux = Mux::new()
        .on("GET", "/p/:x", count(&calls))
        .on("POST", "/p/:x", count(&calls));

    let rec = serve(&mux, "DELETE", "/p/5");
    assert!(rec.is_untouched());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    serve(&mux, "POST", "/p/5");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_params_shared_along_chain() {
    let check_id = handler_fn(|w, req| {
        if req.param("id") == Some("42") {
            req.next(w);
        }
    });
    let show = handler_fn(|w, req| {
        let _ = w.text(req.param("id").unwrap_or_default());
    });
    let mux = Mux::new().chain("GET", "/users/:id", (check_id, show));

    assert_eq!(body(&serve(&mux, "GET", "/users/42")), "42");
    assert!(serve(&mux, "GET", "/users/7").is_untouched());
}

#[test]
fn test_fallthrough_gets_fresh_scope() {
    let mux = Mux::new()
        .on("GET", "/:first/*rest", mark("", true))
        .get("/*all", handler_fn(|w, req| {
            let seen = format!("{:?}/{:?}", req.param("first"), req.param("all"));
            let _ = w.text(&seen);
        }));
    assert_eq!(body(&serve(&mux, "GET", "/x/y")), r#"None/Some("x/y")"#);
}

#[test]
fn test_nested_mux_chains_scopes() {
    let inner = Mux::new()
        .get("/orgs/:org/users/:id", handler_fn(|w, req| {
            let org = req.param("org").unwrap_or_default();
            let id = req.param("id").unwrap_or_default();
            let tenant = req.param("tenant").unwrap_or_default();
            let _ = w.text(&format!("{tenant}:{org}:{id}"));
        }));

    let outer = Mux::new().chain("GET", "/orgs/:tenant/*rest", (inner,));
    assert_eq!(body(&serve(&outer, "GET", "/orgs/acme/users/7")), "acme:acme:7");
}

#[test]
fn test_nested_mux_shadows_outer_names() {
    let inner = Mux::new().get("/v/:sub/:id", handler_fn(|w, req| {
        let own = req.params().get("id").unwrap_or_default().to_owned();
        let outer = req.params().parent().and_then(|p| p.get("id")).unwrap_or_default().to_owned();
        let _ = w.text(&format!("{own}|{outer}"));
    }));

    let outer = Mux::new().chain("GET", "/v/:id/*rest", (inner,));
    assert_eq!(body(&serve(&outer, "GET", "/v/1/2")), "2|1");

    let inner = Mux::new().get("/:id/*rest", handler_fn(|w, req| {
        let _ = w.text(req.param("id").unwrap_or_default());
    }));
    let outer = Mux::new().chain("GET", "/outer/:id", (
        handler_fn(|w, req| req.next(w)),
        inner,
    ));
    assert_eq!(body(&serve(&outer, "GET", "/outer/9")), "outer");
}

#[test]
fn test_nested_mux_without_match_ends_dispatch() {
    let inner = Mux::new().get("/only", mark("inner", true));
    let outer = Mux::new()
        .chain("GET", "/*rest", (inner,))
        .on("GET", "/*rest", mark("outer", false));

    let rec = serve(&outer, "GET", "/other");
    assert!(rec.is_untouched());
}

#[test]
fn test_inner_next_exhausts_inner_queue_only() {
    let inner = Mux::new().get("/x", mark("inner", true));
    let outer = Mux::new()
        .chain("GET", "/x", (inner, mark("after", false)));
    assert_eq!(body(&serve(&outer, "GET", "/x")), "inner");
}

#[test]
fn test_unchained_handler_ends_dispatch() {
    let legacy = unchained(|w, req| {
        w.set_status(StatusCode::ACCEPTED);
        let _ = w.text(req.uri().path());
    });
    let mux = Mux::new()
        .get("/legacy", legacy)
        .on("GET", "/legacy", mark("never", false));

    let rec = serve(&mux, "GET", "/legacy");
    assert_eq!(rec.status(), StatusCode::ACCEPTED);
    assert_eq!(body(&rec), "/legacy");
}

#[test]
fn test_request_view_passes_through() {
    let mux = Mux::new().post("/echo/:id", handler_fn(|w, req| {
        assert_eq!(req.method(), &http::Method::POST);
        assert_eq!(req.path(), "/echo/1");
        assert_eq!(req.uri().query(), Some("q=2"));
        assert_eq!(req.header("X-Custom"), Some("yes"));
        assert_eq!(req.headers().len(), 1);
        let _ = w.write(req.body());
    }));

    let req = http::Request::builder()
        .method("POST")
        .uri("/echo/1?q=2")
        .header("x-custom", "yes")
        .body(Bytes::from_static(b"payload"))
        .unwrap();
    let mut rec = Recorder::new();
    mux.serve(&mut rec, &req);
    assert_eq!(rec.body(), b"payload");
}

#[test]
fn test_mux_is_shareable_across_threads() {
    let mux = Arc::new(Mux::new().get("/users/:id", handler_fn(|w, req| {
        let _ = w.text(req.param("id").unwrap_or_default());
    })));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let mux = Arc::clone(&mux);
            std::thread::spawn(move || {
                let rec = serve(&mux, "GET", &format!("/users/{i}"));
                assert_eq!(body(&rec), i.to_string());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
