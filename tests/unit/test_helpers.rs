//! Unit tests for the stateless helpers
//!
//! Tests cover the helpers working together the way the CLI combines them.

use std::time::Duration;

use utilkit::error_ext::ErrorChainExt;
use utilkit::parse::{parse_bool, parse_or, ParseExt};
use utilkit::stream_ext::{read_lines, to_reader};
use utilkit::subnet::{is_in_same_subnet, mask_from_prefix, Ipv4Subnet};
use utilkit::text_box::{BoxStyle, TextBox};
use utilkit::time_fmt::{format_duration, parse_duration};
use utilkit::type_info::short_type_name;
use utilkit::{BoundedRingQueue, UtilError};

#[test]
fn test_subnet_membership_of_parsed_lines() {
    let input = "10.1.0.4\n10.1.255.1\r\n10.2.0.1\n";
    let subnet: Ipv4Subnet = "10.1.0.0/16".parse().unwrap();
    let inside: Vec<String> = read_lines(to_reader(input))
        .unwrap()
        .into_iter()
        .filter(|l| subnet.contains(l.parse().unwrap()))
        .collect();
    assert_eq!(inside, vec!["10.1.0.4", "10.1.255.1"]);
}

#[test]
fn test_same_subnet_with_prefix_mask() {
    let mask = mask_from_prefix(24).unwrap();
    assert!(is_in_same_subnet(
        "192.168.7.1".parse().unwrap(),
        "192.168.7.200".parse().unwrap(),
        mask
    ));
}

#[test]
fn test_duration_round_trip_through_text() {
    let d = parse_duration("2m5s").unwrap();
    assert_eq!(d, Duration::from_secs(125));
    assert_eq!(format_duration(d), "2m 05s");
}

#[test]
fn test_parse_helpers() {
    assert_eq!(parse_or("12", 0u32), 12);
    assert_eq!(parse_bool("Yes"), Ok(true));
    assert_eq!(" 3 ".parse_value::<i8>(), Ok(3));
}

#[test]
fn test_error_chain_of_util_error() {
    let err: UtilError = "300.1.1.1/8".parse::<Ipv4Subnet>().unwrap_err().into();
    let messages = err.chain_messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("Subnet error: "));
    assert_eq!(
        err.root_cause_message(),
        "Malformed subnet '300.1.1.1/8', expected a.b.c.d/prefix"
    );
}

#[test]
fn test_type_names_in_messages() {
    assert_eq!(
        short_type_name::<BoundedRingQueue<Vec<u8>>>(),
        "BoundedRingQueue<Vec<u8>>"
    );
}

#[test]
fn test_boxed_queue_window() {
    let q = BoundedRingQueue::new(2).unwrap();
    q.extend(["one", "two", "three"]);
    let body = q.to_vec().join("\n");
    let rendered = TextBox::new().style(BoxStyle::Ascii).title("last").render(&body);
    assert_eq!(rendered, "+- last -+\n| two    |\n| three  |\n+--------+");
}
