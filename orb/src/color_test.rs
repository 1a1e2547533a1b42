use super::*;

#[test]
fn parse_hex_supports_short_and_long_forms() {
    assert_eq!(Rgb::parse_hex("#ABC"), Some(Rgb::new(170, 187, 204)));
    assert_eq!(Rgb::parse_hex("  #22c55e "), Some(Rgb::new(0x22, 0xc5, 0x5e)));
}

#[test]
fn parse_hex_rejects_invalid_inputs() {
    assert_eq!(Rgb::parse_hex("22c55e"), None);
    assert_eq!(Rgb::parse_hex("#12"), None);
    assert_eq!(Rgb::parse_hex("#abcd"), None);
    assert_eq!(Rgb::parse_hex("#12GG34"), None);
    assert_eq!(Rgb::parse_hex("#+1+2+3"), None);
    assert_eq!(Rgb::parse_hex("#ééé"), None);
}

#[test]
fn parse_or_fallback_uses_slate() {
    assert_eq!(Rgb::parse_or_fallback("blue"), Rgb::FALLBACK);
    assert_eq!(Rgb::default(), Rgb::FALLBACK);
}

#[test]
fn rgba_formats_with_three_decimals() {
    assert_eq!(Rgb::new(59, 130, 246).rgba(0.5), "rgba(59, 130, 246, 0.500)");
}

#[test]
fn rgba_clamps_alpha() {
    let c = Rgb::new(1, 2, 3);
    assert_eq!(c.rgba(1.7), "rgba(1, 2, 3, 1.000)");
    assert_eq!(c.rgba(-0.2), "rgba(1, 2, 3, 0.000)");
    assert_eq!(c.rgba(f64::NAN), "rgba(1, 2, 3, 0.000)");
}
