#[test]
fn version_matches_the_package_manifest() {
    assert_eq!(strata::VERSION, env!("CARGO_PKG_VERSION"));
}
