#![allow(dead_code)]

use oxide_wildroute::{PathParams, Router, Token};
use tracing::Level;

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(false)
        .without_time()
        .with_test_writer()
        .try_init();
}

pub fn lit(text: &str) -> Token {
    Token::literal(text)
}

pub fn wild(name: Option<&str>, pattern: Option<&str>) -> Token {
    Token::wildcard(name, pattern)
}

pub fn params(pairs: &[(&str, &str)]) -> PathParams {
    pairs.iter().copied().collect()
}

/// Matches `path` and returns `(target, params)`, or `None` on no match.
pub fn resolve<T: Clone>(router: &Router<T>, path: &str) -> Option<(T, PathParams)> {
    router.match_path(path).map(|m| {
        let (target, params) = m.into_parts();
        (target.clone(), params)
    })
}
