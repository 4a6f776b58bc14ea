//! Tests for route registration, matching and path building.

mod common;
use common::*;

use oxide_wildroute::{BuildError, PathParams, RouteTable, Router, RouterError};

fn basic_router() -> Router<&'static str> {
    init_tracing();
    let mut router = Router::new();
    router.add("/static", "static", None).unwrap();
    router
        .add("/::its/:#.+#/:test/:name#[a-z]+#/", "handler", None)
        .unwrap();
    router.add("/:test", "notail", None).unwrap();
    router.add(":test/", "nohead", None).unwrap();
    router.add(":test", "fullmatch", None).unwrap();
    router.add("/:#anon#/match", "anon", None).unwrap();
    router
}

#[test]
fn match_static() {
    let router = basic_router();
    assert_eq!(resolve(&router, "/static"), Some(("static", PathParams::new())));
}

#[test]
fn match_escaped_and_anonymous() {
    let router = basic_router();
    assert_eq!(
        resolve(&router, "/:its/a/cruel/world/"),
        Some(("handler", params(&[("test", "cruel"), ("name", "world")])))
    );
}

#[test]
fn match_single_wildcard() {
    let router = basic_router();
    assert_eq!(
        resolve(&router, "/test"),
        Some(("notail", params(&[("test", "test")])))
    );
    assert_eq!(
        resolve(&router, "test/"),
        Some(("nohead", params(&[("test", "test")])))
    );
    assert_eq!(
        resolve(&router, "test"),
        Some(("fullmatch", params(&[("test", "test")])))
    );
}

#[test]
fn match_anonymous_only() {
    let router = basic_router();
    assert_eq!(resolve(&router, "/anon/match"), Some(("anon", PathParams::new())));
}

#[test]
fn no_match() {
    let router = basic_router();
    assert_eq!(resolve(&router, "//no/m/at/ch/"), None);
}

#[test]
fn match_values_are_verbatim() {
    let router = Router::new().route("/items/:id", ()).unwrap();
    let m = router.match_path("/items/007").unwrap();
    assert_eq!(m.params.get("id"), Some("007"));
    assert_eq!(m.params.parse::<u32>("id"), Some(7));
}

#[test]
fn error_in_pattern() {
    let mut router = basic_router();
    let before = router.len();

    let err = router.add("/:bug#(#/", "buggy", None).unwrap_err();
    assert!(matches!(err, RouterError::Syntax { ref pattern, .. } if pattern == "/:bug#(#/"));
    assert_eq!(router.len(), before);
    assert_eq!(resolve(&router, "/static"), Some(("static", PathParams::new())));
}

#[test]
fn pattern_closing_its_group_is_rejected() {
    let mut router = basic_router();
    let before = router.len();

    let err = router.add("/:x#a)|(b#", "broken", Some("broken")).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(router.len(), before);
    assert!(router.named("broken").is_none());
    assert_eq!(resolve(&router, "/a/anything/else"), None);
}

#[test]
fn alternation_pattern_matches_whole_path() {
    let router = Router::new().route("/:k#a|b#/x", "alt").unwrap();
    assert_eq!(resolve(&router, "/a/x"), Some(("alt", params(&[("k", "a")]))));
    assert_eq!(resolve(&router, "/b/x"), Some(("alt", params(&[("k", "b")]))));
    assert_eq!(resolve(&router, "/a/xjunk"), None);
    assert_eq!(resolve(&router, "/b/x/extra"), None);
    assert_eq!(resolve(&router, "junk/a/x"), None);
}

#[test]
fn build_from_pairs() {
    let router = Router::new()
        .named_route("testroute", "/:test/:name#[a-z]+#/", "handler")
        .unwrap();
    assert_eq!(
        router
            .build_from("testroute", [("test", "hello"), ("name", "world")])
            .unwrap(),
        "/hello/world/"
    );
}

#[test]
fn build_named_route() {
    init_tracing();
    let mut router = Router::new();
    router
        .add("/:test/:name#[a-z]+#/", "handler", Some("testroute"))
        .unwrap();
    router.add("/anon/:#.#", "handler", Some("anonroute")).unwrap();

    let url = router
        .build("testroute", &params(&[("test", "hello"), ("name", "world")]))
        .unwrap();
    assert_eq!(url, "/hello/world/");

    let err = router.build("test", &PathParams::new()).unwrap_err();
    assert_eq!(
        err.as_build(),
        Some(&BuildError::UnknownRoute {
            name: "test".to_string()
        })
    );

    let err = router.build("testroute", &PathParams::new()).unwrap_err();
    assert_eq!(
        err.as_build(),
        Some(&BuildError::MissingParameter {
            route: "testroute".to_string(),
            param: "test".to_string(),
        })
    );

    let err = router
        .build("testroute", &params(&[("test", "hello"), ("name", "1234")]))
        .unwrap_err();
    assert!(matches!(
        err.as_build(),
        Some(BuildError::ParameterMismatch { param, pattern, .. })
            if param == "name" && pattern == "[a-z]+"
    ));

    let err = router.build("anonroute", &PathParams::new()).unwrap_err();
    assert!(matches!(
        err.as_build(),
        Some(BuildError::AnonymousWildcard { route }) if route == "anonroute"
    ));
}

#[test]
fn build_output_matches_back() {
    let router = Router::new()
        .named_route("post", "/posts/:year#[0-9]{4}#/:slug", "post")
        .unwrap();
    let p = params(&[("year", "2024"), ("slug", "hello-world")]);
    let url = router.build("post", &p).unwrap();
    assert_eq!(url, "/posts/2024/hello-world");
    assert_eq!(resolve(&router, &url), Some(("post", p)));
}

#[test]
fn build_ignores_extra_params() {
    let router = Router::new().named_route("u", "/u/:id", ()).unwrap();
    let url = router
        .build("u", &params(&[("id", "1"), ("unused", "x")]))
        .unwrap();
    assert_eq!(url, "/u/1");
}

#[test]
fn build_escaped_colon_literal() {
    let router = Router::new().named_route("c", "/::a/:b", ()).unwrap();
    assert_eq!(router.build("c", &params(&[("b", "x")])).unwrap(), "/:a/x");
}

#[test]
fn static_fast_path_keeps_order() {
    let router = Router::new()
        .route("/:any", "dynamic")
        .unwrap()
        .route("/static", "static")
        .unwrap();
    assert!(router.routes().nth(1).unwrap().compiled.is_static());
    assert_eq!(resolve(&router, "/static").unwrap().0, "dynamic");
}

#[test]
fn router_from_json_table() {
    let table: RouteTable<String> = RouteTable::from_json(
        r#"{"routes": [
            {"pattern": "/static", "target": "static"},
            {"pattern": "/:test/:name#[a-z]+#/", "target": "handler", "name": "testroute"}
        ]}"#,
    )
    .unwrap();
    let router = Router::from_table(table).unwrap();

    assert_eq!(
        resolve(&router, "/x/y/"),
        Some(("handler".to_string(), params(&[("test", "x"), ("name", "y")])))
    );
    assert_eq!(
        router
            .build("testroute", &params(&[("test", "a"), ("name", "b")]))
            .unwrap(),
        "/a/b/"
    );
}

#[test]
fn concurrent_match_and_build() {
    let mut router = Router::new();
    for i in 0..50 {
        router
            .add(&format!("/r{i}/:id#[0-9]+#"), i, Some(&format!("r{i}")))
            .unwrap();
    }
    let router = &router;

    std::thread::scope(|s| {
        for t in 0..8 {
            s.spawn(move || {
                for i in (t..50).step_by(8) {
                    let path = format!("/r{i}/{t}");
                    let m = router.match_path(&path).unwrap();
                    assert_eq!(*m.target, i);
                    assert_eq!(router.build(&format!("r{i}"), &m.params).unwrap(), path);
                }
            });
        }
    });
}
