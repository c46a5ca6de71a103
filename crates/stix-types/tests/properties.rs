use chrono::{DateTime, Utc};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stix_types::{normalize, Identifier, Precision, Timestamp};

fn is_canonical(ts: &str, digits: usize) -> bool {
    // YYYY-MM-DDTHH:MM:SS.<digits>Z
    let Some(body) = ts.strip_suffix('Z') else {
        return false;
    };
    let Some((seconds, fraction)) = body.split_once('.') else {
        return false;
    };
    seconds.len() == 19
        && seconds.as_bytes()[10] == b'T'
        && fraction.len() == digits
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

proptest! {
    #[test]
    fn milli_output_has_three_digits(secs in 0i64..4_102_444_800, nanos in 0u32..1_000_000_000) {
        let dt = DateTime::<Utc>::from_timestamp(secs, nanos).unwrap();
        let ts = Timestamp::from_datetime(dt, Precision::Milli);
        prop_assert!(is_canonical(ts.as_str(), 3), "{}", ts);
    }

    #[test]
    fn micro_output_has_six_digits(secs in 0i64..4_102_444_800, nanos in 0u32..1_000_000_000) {
        let dt = DateTime::<Utc>::from_timestamp(secs, nanos).unwrap();
        let ts = Timestamp::from_datetime(dt, Precision::Micro);
        prop_assert!(is_canonical(ts.as_str(), 6), "{}", ts);
    }

    #[test]
    fn normalizing_canonical_output_is_stable(secs in 0i64..4_102_444_800, nanos in 0u32..1_000_000_000) {
        let dt = DateTime::<Utc>::from_timestamp(secs, nanos).unwrap();
        let once = Timestamp::from_datetime(dt, Precision::Micro);
        let twice = normalize(once.as_str(), Precision::Micro).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn generated_ids_match_wire_format(object_type in "[a-z][a-z0-9]{0,12}(-[a-z0-9]{1,8}){0,2}", seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let id = Identifier::generate(&object_type, &mut rng);
        prop_assert_eq!(id.object_type(), object_type.as_str());
        let parsed = Identifier::parse(id.as_str());
        prop_assert!(parsed.is_ok(), "{}", id);
    }
}
