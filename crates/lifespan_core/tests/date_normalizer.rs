use lifespan_core::parse_date_token;

#[test]
fn valid_tokens_keep_their_literal_fields() {
    for (token, expected) in [
        ("1879-03-14", (1879, 3, 14)),
        ("2000-02-29", (2000, 2, 29)),
        ("1678-12-31", (1678, 12, 31)),
        ("0476-09-04", (476, 9, 4)),
    ] {
        let date = parse_date_token(token).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), expected, "token {token}");
        assert_eq!(date.to_string(), token);
    }
}

#[test]
fn zero_month_and_day_normalize_to_one() {
    let date = parse_date_token("1440-00-00").unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (1440, 1, 1));

    let date = parse_date_token("1700-05-00").unwrap();
    assert_eq!(date.to_string(), "1700-05-01");

    let date = parse_date_token("1750-00-17").unwrap();
    assert_eq!(date.to_string(), "1750-01-17");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let date = parse_date_token("  1912-06-23\n").unwrap();
    assert_eq!(date.to_string(), "1912-06-23");
}

#[test]
fn malformed_tokens_are_unparsable() {
    for token in [
        "",
        "   ",
        "bad",
        "Present",
        "abcd-01-01",
        "1999-02-30",
        "1900-02-29",
        "1999-13-01",
        "1999-01-32",
        "1999-xx-01",
        "1879-03-14T00:00:00Z",
        "-0069-00-00",
    ] {
        let err = parse_date_token(token).unwrap_err();
        assert_eq!(err.token, token);
    }
}

#[test]
fn month_only_token_defaults_day() {
    let date = parse_date_token("1879-03").unwrap();
    assert_eq!(date.to_string(), "1879-03-01");
}

#[test]
fn dates_order_chronologically() {
    let earlier = parse_date_token("1815-12-10").unwrap();
    let later = parse_date_token("1852-11-27").unwrap();
    assert!(earlier < later);
    assert!(earlier.fractional_year() < later.fractional_year());
}
