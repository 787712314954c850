use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use pwhe_core::{convert, convert_document, segment, BridgeSettings};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn read_fixture(path: &str) -> String {
    fs::read_to_string(fixture(path)).expect("fixture should be readable")
}

#[test]
fn converts_metro_sample_to_reference_output() {
    let input = read_fixture("fixtures/metro_sample.cfg");
    let expected = read_fixture("fixtures/metro_sample_10239.txt");

    let output = convert(&input, "10239").expect("conversion should succeed");
    assert_eq!(output, expected.trim_end());
}

#[test]
fn metro_sample_keeps_output_policy_verbatim() {
    let input = read_fixture("fixtures/metro_sample.cfg");
    let output = convert(&input, "10239").expect("conversion should succeed");

    let lines: Vec<&str> = output.lines().collect();
    assert!(lines.contains(&"interface PW-Ether 10239.049"));
    assert!(lines.contains(&"encapsulation dot1q 49"));
    assert!(lines.contains(&"service-policy output 512K_SHAPE_PARENT"));
    assert!(!output.contains("no service-policy"));
}

#[test]
fn l2transport_sample_handles_pop_and_reserved_tags() {
    let input = read_fixture("fixtures/l2transport_sample.cfg");
    let conversion = convert_document(&input, "10239", &BridgeSettings::default())
        .expect("conversion should succeed");

    assert_eq!(conversion.blocks.len(), 3);

    let first = &conversion.blocks[0];
    assert_eq!(first.lines[0], "interface PW-Ether 10239.200 l2transport");
    assert!(first.lines.contains(&"encapsulation dot1q 200".to_string()));
    assert!(first
        .lines
        .contains(&"rewrite ingress tag pop 1 symmetric".to_string()));

    let reserved = &conversion.blocks[1];
    assert_eq!(reserved.lines[0], "interface PW-Ether 10239.502 l2transport");
    assert!(!reserved.lines.iter().any(|l| l.contains("rewrite ingress")));
    assert_eq!(reserved.lines.iter().filter(|l| *l == "shutdown").count(), 1);
    assert!(!reserved.shutdown_inserted);

    let passthrough = &conversion.blocks[2];
    assert_eq!(passthrough.lines[0], "interface Bundle-Ether20.300");
    assert!(!passthrough.header_converted);

    assert_eq!(
        conversion.report.new_interfaces,
        [
            "interface PW-Ether 10239.200 l2transport",
            "interface PW-Ether 10239.502 l2transport",
        ]
    );
    assert_eq!(conversion.report.old_interfaces.len(), 3);
    assert_eq!(
        conversion.report.old_interfaces[2],
        "interface Bundle-Ether20.300"
    );

    let bridge = conversion.bridge_config.expect("bridge config for tag 502");
    assert!(bridge.contains("  bridge-domain ME_DNET_502"));
    assert!(bridge.contains("   interface PW-Ether 10239.502"));
    assert!(!bridge.contains("ME_DNET_504"));
}

#[test]
fn preamble_lines_are_not_a_block() {
    let input = read_fixture("fixtures/l2transport_sample.cfg");
    let blocks = segment(&input);
    assert!(blocks
        .iter()
        .all(|block| block.header().starts_with("interface ")));
}
