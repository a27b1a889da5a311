use crate::normalize::normalize;

#[test]
fn test_multiplication_glyphs() {
    assert_eq!(normalize("2 × 3"), "2 * 3");
    assert_eq!(normalize("2 x 3"), "2 * 3");
    assert_eq!(normalize("2X3"), "2*3");
}

#[test]
fn test_division_glyph() {
    assert_eq!(normalize("10 ÷ 2"), "10 / 2");
}

#[test]
fn test_double_star_power() {
    assert_eq!(normalize("2 ** 3"), "2 ^ 3");
    assert_eq!(normalize("2**3**4"), "2^3^4");
}

#[test]
fn test_caret_passes_through() {
    assert_eq!(normalize("2 ^ 3"), "2 ^ 3");
}

#[test]
fn test_trims_and_lowercases() {
    assert_eq!(normalize("  2 + 2  "), "2 + 2");
    assert_eq!(normalize("3 X 4"), "3 * 4");
}

#[test]
fn test_numeric_literals_untouched() {
    assert_eq!(normalize("3.14 + 0.5"), "3.14 + 0.5");
    assert_eq!(normalize("100 - 0.001"), "100 - 0.001");
}

#[test]
fn test_idempotent() {
    let inputs = [
        "2 × 3 ÷ 4",
        "2 ** 3",
        "××",
        "  5 X 6 ** 2  ",
        "(1 + 2) * 3",
        "not arithmetic at all",
        "",
    ];
    for input in inputs {
        let once = normalize(input);
        let twice = normalize(&once);
        assert_eq!(once, twice, "normalize not idempotent for '{}'", input);
    }
}

#[test]
fn test_empty_and_whitespace() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
}
