//! Architecture contract tests.

mod support;

use support::architecture::find_lines_containing;

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "axum::",
            "diesel::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn ports_do_not_depend_on_adapters() {
    let hits = find_lines_containing(
        "src/port",
        &["crate::adapter", "crate::infrastructure", "diesel::", "axum::"],
    );

    assert!(
        hits.is_empty(),
        "found adapter imports in ports: {hits:#?}"
    );
}

#[test]
fn application_is_transport_agnostic() {
    let hits = find_lines_containing(
        "src/application",
        &["axum::", "tower_http::", "crate::adapter::inbound"],
    );

    assert!(
        hits.is_empty(),
        "found HTTP imports in application services: {hits:#?}"
    );
}

#[test]
fn http_adapter_never_queries_the_database() {
    let hits = find_lines_containing("src/adapter/inbound", &["diesel::"]);

    assert!(
        hits.is_empty(),
        "found direct persistence access in inbound adapters: {hits:#?}"
    );
}
