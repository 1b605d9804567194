use chrono::{NaiveDate, NaiveTime};
use datebook_core::codec::{decode, encode, normalize, sanitize_time};
use datebook_core::models::date_slot::DateSlot;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

#[test]
fn canonical_token_shape() {
    let slot = DateSlot::new(date(2026, 1, 24), "01:20");
    let token = encode(&slot);

    assert_eq!(token, "2026-01-24T01:20:00+05:30");
    assert_eq!(token.len(), 25);
}

#[rstest]
#[case(2025, 11, 20, "00:00")]
#[case(2026, 1, 24, "01:20")]
#[case(2028, 2, 29, "23:59")]
#[case(2026, 12, 31, "09:05")]
fn encode_decode_round_trip(
    #[case] y: i32,
    #[case] m: u32,
    #[case] d: u32,
    #[case] hm: &str,
) {
    let slot = DateSlot::new(date(y, m, d), hm);
    let decoded = decode(&encode(&slot));

    assert_eq!(decoded, slot);
}

#[rstest]
#[case("2025-11-20", 2025, 11, 20, 0, 0)]
#[case("2025-11-20T09:15:00Z", 2025, 11, 20, 9, 15)]
#[case("2025-11-20T09:15:00+05:30", 2025, 11, 20, 9, 15)]
#[case("2025-11-20T09:15:00+0530", 2025, 11, 20, 9, 15)]
#[case("2025-11-20T09:15:00", 2025, 11, 20, 9, 15)]
#[case("2025-11-20T09:15:00-05:00", 2025, 11, 20, 9, 15)]
fn decode_accepts_every_stored_shape(
    #[case] token: &str,
    #[case] y: i32,
    #[case] m: u32,
    #[case] d: u32,
    #[case] hour: u32,
    #[case] minute: u32,
) {
    let slot = decode(token);

    assert_eq!(slot.date, date(y, m, d));
    assert_eq!(slot.start_time, time(hour, minute));
}

#[test]
fn garbage_decodes_without_failing() {
    let slot = decode("garbage");

    // Best-effort defaults rather than an error
    assert_eq!(slot.date, NaiveDate::default());
    assert_eq!(slot.start_time, NaiveTime::MIN);
}

#[rstest]
#[case("", 0, 0)]
#[case("09:15", 9, 15)]
#[case("09:15:45", 9, 15)]
#[case("9:5", 9, 5)]
#[case("banana", 0, 0)]
#[case("25:00", 0, 0)]
#[case("10", 0, 0)]
fn sanitize_time_reduces_to_minute_precision(
    #[case] raw: &str,
    #[case] hour: u32,
    #[case] minute: u32,
) {
    assert_eq!(sanitize_time(raw), time(hour, minute));
}

#[test]
fn normalize_rewrites_legacy_shapes_to_canonical() {
    assert_eq!(normalize("2025-11-20"), "2025-11-20T00:00:00+05:30");
    assert_eq!(normalize("2025-11-20T09:15:00Z"), "2025-11-20T09:15:00+05:30");
    assert_eq!(
        normalize("2025-11-20T09:15:00+05:30"),
        "2025-11-20T09:15:00+05:30"
    );
}

#[test]
fn decode_ignores_surrounding_whitespace() {
    let slot = decode("  2025-11-20T09:15:00+05:30 ");

    assert_eq!(slot.date, date(2025, 11, 20));
    assert_eq!(slot.start_time, time(9, 15));
}
