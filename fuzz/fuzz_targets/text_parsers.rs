#![no_main]

use libfuzzer_sys::fuzz_target;
use utilkit::subnet::Ipv4Subnet;
use utilkit::text_box::TextBox;
use utilkit::time_fmt::parse_duration;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_duration(s);
        if let Ok(subnet) = s.parse::<Ipv4Subnet>() {
            let _ = subnet.host_range();
            let _ = subnet.host_count();
        }
        let _ = TextBox::new().title(s).render(s);
    }
});
