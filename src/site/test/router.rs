use super::*;

/// Tests that a registered path selects the matched view.
///
/// Expected: Content::Matched with the bound view
#[test]
fn selects_matched_view() {
    let router = Router::new(Arc::new(home_registry()), "NotFoundView");

    assert_eq!(router.select("/"), Content::Matched(&"HomeView"));
}

/// Tests that an unregistered path selects the fallback view.
///
/// Expected: Content::Fallback with the fallback view
#[test]
fn selects_fallback_for_missing_path() {
    let router = Router::new(Arc::new(home_registry()), "NotFoundView");

    let content = router.select("/missing");

    assert!(content.is_fallback());
    assert_eq!(content.view(), &"NotFoundView");
}

/// Tests that empty and malformed paths select the fallback instead of failing.
///
/// Expected: Content::Fallback for each path
#[test]
fn malformed_paths_select_fallback() {
    let router = Router::new(Arc::new(home_registry()), "NotFoundView");

    for path in ["", "home", "/ ", "/?"] {
        assert_eq!(router.select(path), Content::Fallback(&"NotFoundView"));
    }
}

/// Tests selecting from a full location with query string and fragment.
///
/// Expected: query and fragment ignored, Matched for the path component
#[test]
fn select_location_ignores_query_and_fragment() {
    let router = Router::new(Arc::new(home_registry()), "NotFoundView");

    assert_eq!(router.select_location("/?ref=mail#top"), Content::Matched(&"HomeView"));
    assert_eq!(router.select_location("/missing?x=1"), Content::Fallback(&"NotFoundView"));
    assert_eq!(router.select_location("?x=1"), Content::Fallback(&"NotFoundView"));
}

/// Tests that routers built from the same shared registry agree.
///
/// Expected: both routers resolve the same path to the same view
#[test]
fn routers_share_registry() {
    let registry = Arc::new(home_registry());
    let first = Router::new(Arc::clone(&registry), "A");
    let second = Router::new(registry, "B");

    assert_eq!(first.select("/"), second.select("/"));
    assert_eq!(first.registry().len(), 1);
    assert_eq!(first.select("/nope"), Content::Fallback(&"A"));
    assert_eq!(second.select("/nope"), Content::Fallback(&"B"));
}
