use aliasdns_domain::RecordType;
use aliasdns_infrastructure::dns::decoder::{Ipv4Decoder, Ipv6Decoder, TxtDecoder};
use aliasdns_infrastructure::dns::{decoder_for, RecordDecoder};

// ── A ──────────────────────────────────────────────────────────────────────

#[test]
fn test_ipv4_dotted_decimal() {
    assert_eq!(
        Ipv4Decoder.decode(&[192, 168, 1, 254]),
        Some("192.168.1.254".to_string())
    );
}

#[test]
fn test_ipv4_ignores_trailing_bytes() {
    assert_eq!(
        Ipv4Decoder.decode(&[10, 0, 0, 1, 99]),
        Some("10.0.0.1".to_string())
    );
}

#[test]
fn test_ipv4_too_short() {
    assert_eq!(Ipv4Decoder.decode(&[]), None);
    assert_eq!(Ipv4Decoder.decode(&[1, 2, 3]), None);
}

// ── AAAA ───────────────────────────────────────────────────────────────────

#[test]
fn test_ipv6_renders_first_eight_octets() {
    let rdata = [
        0x20, 0x01, 0x0d, 0xb8, 0x00, 0x00, 0x00, 0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff,
    ];
    assert_eq!(
        Ipv6Decoder.decode(&rdata),
        Some("32:1:13:184:0:0:0:1".to_string())
    );
}

#[test]
fn test_ipv6_too_short() {
    assert_eq!(Ipv6Decoder.decode(&[1, 2, 3, 4, 5, 6, 7]), None);
}

// ── TXT ────────────────────────────────────────────────────────────────────

#[test]
fn test_txt_strips_length_byte() {
    assert_eq!(
        TxtDecoder.decode(b"\x05hello"),
        Some("hello".to_string())
    );
}

#[test]
fn test_txt_single_byte_is_empty_string() {
    assert_eq!(TxtDecoder.decode(&[0]), Some(String::new()));
}

#[test]
fn test_txt_empty() {
    assert_eq!(TxtDecoder.decode(&[]), None);
}

// ── dispatch ───────────────────────────────────────────────────────────────

#[test]
fn test_decoder_for_dispatch() {
    let rdata = [1, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(
        decoder_for(RecordType::A).decode(&rdata),
        Some("1.2.3.4".to_string())
    );
    assert_eq!(
        decoder_for(RecordType::AAAA).decode(&rdata),
        Some("1:2:3:4:5:6:7:8".to_string())
    );
    assert_eq!(
        decoder_for(RecordType::TXT).decode(b"\x02ok"),
        Some("ok".to_string())
    );
}
