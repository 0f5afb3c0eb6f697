mod common;

use common::parse;
use jakarta_timeutils::{
    day_diff, day_index, day_index_local, expiration_till_end_of_day, floor_day, hour_index,
    hour_index_local, plus_hours, utc_day_index,
};
use rstest::rstest;

#[rstest]
#[case("1970-01-01T00:00:00+07:00", 0)]
#[case("1970-01-01T00:00:01+07:00", 0)]
#[case("1970-01-01T23:59:59+07:00", 0)]
#[case("1970-01-02T00:00:00+07:00", 1)]
#[case("1970-01-02T00:00:01+07:00", 1)]
#[case("1970-01-02T23:59:59+07:00", 1)]
#[case("1970-01-03T00:00:00+07:00", 2)]
#[case("1970-01-03T00:00:01+07:00", 2)]
#[case("2023-03-28T00:00:00+07:00", 19444)]
#[case("2023-03-28T23:59:59+07:00", 19444)]
fn test_day_index(#[case] input: &str, #[case] expected: i64) {
    let t = parse(input);
    assert_eq!(day_index(&t), expected);
    assert_eq!(day_index_local(&t), expected);
}

#[rstest]
#[case("1970-01-01T00:00:00+07:00", 0)]
#[case("1970-01-01T00:00:01+07:00", 0)]
#[case("1970-01-01T00:59:59+07:00", 0)]
#[case("1970-01-01T01:00:00+07:00", 1)]
#[case("1970-01-01T01:59:59+07:00", 1)]
#[case("1970-01-02T00:00:00+07:00", 24)]
#[case("1970-01-02T00:59:59+07:00", 24)]
#[case("1970-01-02T01:00:00+07:00", 25)]
#[case("1970-01-02T01:59:59+07:00", 25)]
fn test_hour_index(#[case] input: &str, #[case] expected: i64) {
    let t = parse(input);
    assert_eq!(hour_index(&t), expected);
    assert_eq!(hour_index_local(&t), expected);
}

#[test]
fn test_index_does_not_depend_on_input_offset() {
    let jakarta = parse("2023-03-28T06:59:59+07:00");
    let utc = parse("2023-03-27T23:59:59Z");
    assert_eq!(jakarta, utc);
    assert_eq!(day_index(&jakarta), day_index(&utc));
    assert_eq!(utc_day_index(&utc) + 1, day_index(&utc));
}

#[rstest]
#[case("2023-03-28T00:00:00+07:00", "2023-03-27T23:59:59+07:00", -1)]
#[case("2023-03-28T00:00:00+07:00", "2023-03-28T00:00:00+07:00", 0)]
#[case("2023-03-28T00:00:00+07:00", "2023-03-28T23:59:59+07:00", 0)]
#[case("2023-03-28T00:00:00+07:00", "2023-03-29T00:00:00+07:00", 1)]
#[case("2023-04-04T23:59:59+07:00", "2023-04-07T23:59:59+07:00", 3)]
#[case("2023-04-04T23:59:59+07:00", "2023-04-07T00:00:00+07:00", 3)]
#[case("2023-04-04T23:59:59+07:00", "2023-04-05T00:00:00+07:00", 1)]
#[case("2023-04-04T23:59:59+07:00", "2023-04-04T00:00:00+07:00", 0)]
#[case("2023-04-04T23:59:59+07:00", "2023-04-03T00:00:00+07:00", -1)]
#[case("2023-04-04T23:59:59+07:00", "2023-03-31T23:59:59+07:00", -4)]
#[case("2023-04-04T23:59:59+07:00", "2023-03-31T00:00:00+07:00", -4)]
fn test_day_diff(#[case] t1: &str, #[case] t2: &str, #[case] expected: i64) {
    assert_eq!(day_diff(&parse(t1), &parse(t2)), expected);
}

#[rstest]
#[case("2023-03-28T00:00:00+07:00", 0, "2023-03-28T00:00:00+07:00")]
#[case("2023-03-28T23:59:59+07:00", 0, "2023-03-28T00:00:00+07:00")]
#[case("2023-03-28T23:59:59+07:00", 4, "2023-04-01T00:00:00+07:00")]
#[case("2023-03-28T23:59:59+07:00", -2, "2023-03-26T00:00:00+07:00")]
#[case("2023-04-02T23:59:59+07:00", -5, "2023-03-28T00:00:00+07:00")]
fn test_floor_day(#[case] input: &str, #[case] d_range: i64, #[case] expected: &str) {
    let actual = floor_day(&parse(input), d_range).unwrap();
    assert_eq!(actual.timestamp(), parse(expected).timestamp());
}

#[rstest]
#[case("1970-01-01T00:00:00+07:00", 86_400)]
#[case("1970-01-01T20:00:00+07:00", 14_400)]
#[case("1970-01-01T23:59:59+07:00", 1)]
#[case("1970-01-02T23:59:50+07:00", 10)]
fn test_expiration_till_end_of_day(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(expiration_till_end_of_day(&parse(input)), expected);
}

#[rstest]
#[case("1970-01-01T00:00:00+07:00", 1, "1970-01-01T01:00:00+07:00")]
#[case("2020-03-19T00:59:59+07:00", 1, "2020-03-19T01:00:00+07:00")]
#[case("2020-03-19T00:59:59+07:00", 2, "2020-03-19T02:00:00+07:00")]
#[case("2020-03-19T00:59:59+07:00", -1, "2020-03-18T23:00:00+07:00")]
#[case("2020-03-19T00:00:00+07:00", -1, "2020-03-18T23:00:00+07:00")]
fn test_plus_hours(#[case] input: &str, #[case] n: i64, #[case] expected: &str) {
    let actual = plus_hours(&parse(input), n).unwrap();
    assert_eq!(actual.timestamp(), parse(expected).timestamp());
    assert_eq!(actual.timestamp() % 3600, 0);
}
