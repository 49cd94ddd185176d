//! Property-based tests for integers, decimals and rank keys.

use lexorank::prelude::*;
use proptest::prelude::*;
use std::sync::LazyLock;

// =============================================================================
// Test helpers
// =============================================================================

fn base36_integer() -> impl Strategy<Value = Integer> {
    "-?[0-9a-z]{1,40}".prop_map(|text| Integer::parse(&text, &BASE36).unwrap())
}

/// Canonical rendering of an integer numeral: no leading zeros, no "-0".
fn canonical_integer(text: &str) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        "0".to_string()
    } else {
        format!("{}{}", sign, digits)
    }
}

fn rank_text() -> impl Strategy<Value = String> {
    ("[0-9a-z]{6}", "[0-9a-z]{0,8}")
        .prop_map(|(whole, fraction)| format!("0|{}:{}", whole, fraction))
}

static LETTERS: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::new("abcdefghij").unwrap());

/// Radices and formattings every rank property runs under.
fn rank_configs() -> Vec<RankConfig> {
    vec![
        RankConfig::base10(),
        RankConfig::base36(),
        RankConfig::base64(),
        RankConfig::new(&*LETTERS)
            .with_point('.')
            .with_separator('#')
            .with_whole_width(4),
    ]
}

fn render_digits(config: &RankConfig, digits: &[u32]) -> String {
    digits
        .iter()
        .map(|digit| config.base.digit_char(*digit).unwrap())
        .collect()
}

/// Bucket-0 key text valid under `config`.
fn rank_key(config: RankConfig) -> impl Strategy<Value = String> {
    let radix = config.base.radix();
    (
        prop::collection::vec(0..radix, config.whole_width),
        prop::collection::vec(0..radix, 0..8),
    )
        .prop_map(move |(whole, fraction)| {
            format!(
                "0{}{}{}{}",
                config.separator,
                render_digits(&config, &whole),
                config.point,
                render_digits(&config, &fraction)
            )
        })
}

/// A configuration and two key texts valid under it.
fn configured_keys() -> impl Strategy<Value = (RankConfig, String, String)> {
    prop::sample::select(rank_configs())
        .prop_flat_map(|config| (Just(config), rank_key(config), rank_key(config)))
}

// =============================================================================
// Integer properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn integer_string_round_trip(text in "-?[0-9a-z]{1,40}") {
        let parsed = Integer::parse(&text, &BASE36).unwrap();
        prop_assert_eq!(parsed.to_string(), canonical_integer(&text));
    }

    #[test]
    fn add_then_sub_is_identity(a in base36_integer(), b in base36_integer()) {
        let sum = &a + &b;
        prop_assert_eq!(&sum - &b, a);
    }

    #[test]
    fn add_is_commutative(a in base36_integer(), b in base36_integer()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn mul_follows_sign_rule(a in base36_integer(), b in base36_integer()) {
        let product = &a * &b;
        if a.is_zero() || b.is_zero() {
            prop_assert!(product.is_zero());
        } else {
            prop_assert_eq!(product.is_negative(), a.is_negative() != b.is_negative());
        }
    }

    #[test]
    fn mul_matches_native(a in any::<i64>(), b in any::<i64>()) {
        let product = &Integer::from_i64(a, &BASE36) * &Integer::from_i64(b, &BASE36);
        prop_assert_eq!(product.to_i128().unwrap(), a as i128 * b as i128);
    }

    #[test]
    fn shift_round_trip(a in base36_integer(), k in 0usize..40) {
        prop_assert_eq!(&(&a << k) >> k, a);
    }

    #[test]
    fn ordering_matches_native(a in any::<i64>(), b in any::<i64>()) {
        let x = Integer::from_i64(a, &BASE64);
        let y = Integer::from_i64(b, &BASE64);
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }
}

// =============================================================================
// Decimal properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn decimal_ordering_matches_float(
        a in -1_000_000i64..1_000_000,
        ea in -6i64..3,
        b in -1_000_000i64..1_000_000,
        eb in -6i64..3,
    ) {
        let x = Decimal::new(Integer::from_i64(a, &BASE10), ea);
        let y = Decimal::new(Integer::from_i64(b, &BASE10), eb);
        let (fx, fy) = (x.to_f64(), y.to_f64());
        prop_assume!(fx != fy || x == y);
        prop_assert_eq!(Some(x.cmp(&y)), fx.partial_cmp(&fy));
    }

    #[test]
    fn decimal_string_round_trip(whole in "[0-9]{1,8}", fraction in "[0-9]{0,8}") {
        let text = format!("{}:{}", whole, fraction);
        let parsed = Decimal::parse(&text, &BASE10, ':').unwrap();
        let reparsed = Decimal::parse(&parsed.to_string(), &BASE10, ':').unwrap();
        prop_assert_eq!(&reparsed, &parsed);
        prop_assert_eq!(reparsed.to_string(), parsed.to_string());
    }

    #[test]
    fn decimal_add_sub_identity(
        a in any::<i32>(), ea in -8i64..8,
        b in any::<i32>(), eb in -8i64..8,
    ) {
        let x = Decimal::new(Integer::from_i64(a as i64, &BASE36), ea);
        let y = Decimal::new(Integer::from_i64(b as i64, &BASE36), eb);
        prop_assert_eq!(&(&x + &y) - &y, x);
    }
}

// =============================================================================
// Rank properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rank_string_round_trip(whole in "[0-9a-z]{6}", fraction in "[0-9a-z]{0,8}") {
        let rank = LexoRank::parse(&format!("1|{}:{}", whole, fraction)).unwrap();
        let rendered = rank.to_string();
        prop_assert_eq!(
            &rendered,
            &format!("1|{}:{}", whole, fraction.trim_end_matches('0'))
        );
        prop_assert_eq!(LexoRank::parse(&rendered).unwrap(), rank);
    }

    #[test]
    fn between_is_strictly_inside(a in rank_text(), b in rank_text()) {
        let a = LexoRank::parse(&a).unwrap();
        let b = LexoRank::parse(&b).unwrap();
        prop_assume!(a != b);

        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let mid = LexoRank::between(Some(&low), Some(&high)).unwrap();

        prop_assert!(low < mid && mid < high);
        prop_assert!(low.to_string() < mid.to_string());
        prop_assert!(mid.to_string() < high.to_string());
    }

    #[test]
    fn string_order_matches_value_order(a in rank_text(), b in rank_text()) {
        let x = LexoRank::parse(&a).unwrap();
        let y = LexoRank::parse(&b).unwrap();
        prop_assert_eq!(x.cmp(&y), x.to_string().cmp(&y.to_string()));
    }

    #[test]
    fn open_ended_between(text in rank_text()) {
        let rank = LexoRank::parse(&text).unwrap();

        let after = LexoRank::between(Some(&rank), None).unwrap();
        prop_assert!(after > rank);
        prop_assert!(after.to_string() > rank.to_string());

        match LexoRank::between(None, Some(&rank)) {
            Ok(before) => {
                prop_assert!(before < rank);
                prop_assert!(before.to_string() < rank.to_string());
            }
            Err(err) => {
                prop_assert_eq!(err, RankError::OutOfRange);
                prop_assert!(rank.rank().is_zero());
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rank_round_trip_any_radix((config, text, _other) in configured_keys()) {
        let rank = LexoRank::parse_with(&text, &config).unwrap();
        let zero = config.base.digit_char(0).unwrap();
        let (head, fraction) = text.split_once(config.point).unwrap();

        let rendered = rank.to_string();
        prop_assert_eq!(
            &rendered,
            &format!("{}{}{}", head, config.point, fraction.trim_end_matches(zero))
        );
        prop_assert_eq!(LexoRank::parse_with(&rendered, &config).unwrap(), rank);
    }

    #[test]
    fn string_order_matches_value_order_any_radix((config, a, b) in configured_keys()) {
        let x = LexoRank::parse_with(&a, &config).unwrap();
        let y = LexoRank::parse_with(&b, &config).unwrap();
        prop_assert_eq!(x.cmp(&y), x.to_string().cmp(&y.to_string()));
    }

    #[test]
    fn between_is_strictly_inside_any_radix((config, a, b) in configured_keys()) {
        let a = LexoRank::parse_with(&a, &config).unwrap();
        let b = LexoRank::parse_with(&b, &config).unwrap();
        prop_assume!(a != b);

        let mid = LexoRank::between(Some(&a), Some(&b)).unwrap();
        let (low, high) = if a < b { (a, b) } else { (b, a) };

        prop_assert!(low < mid && mid < high);
        prop_assert!(low.to_string() < mid.to_string());
        prop_assert!(mid.to_string() < high.to_string());
        prop_assert_eq!(LexoRank::parse_with(&mid.to_string(), &config).unwrap(), mid);
    }
}

// =============================================================================
// QuickCheck properties
// =============================================================================

quickcheck::quickcheck! {
    fn qc_add_matches_native(a: i64, b: i64) -> bool {
        let sum = &Integer::from_i64(a, &BASE10) + &Integer::from_i64(b, &BASE10);
        sum.to_i128() == Ok(a as i128 + b as i128)
    }

    fn qc_sub_matches_native(a: i64, b: i64) -> bool {
        let diff = &Integer::from_i64(a, &BASE64) - &Integer::from_i64(b, &BASE64);
        diff.to_i128() == Ok(a as i128 - b as i128)
    }

    fn qc_native_round_trip(value: i64) -> bool {
        Integer::from_i64(value, &BASE36).to_i128() == Ok(value as i128)
    }

    fn qc_repeated_between_stays_ordered(steps: u8) -> bool {
        let ranker = Ranker::default();
        let low = ranker.middle(Bucket::Bucket0);
        let mut high = ranker.next(&low).unwrap();
        for _ in 0..(steps % 64) {
            let mid = match ranker.between(Some(&low), Some(&high)) {
                Ok(mid) => mid,
                Err(_) => return false,
            };
            if !(low < mid && mid < high && low.to_string() < mid.to_string()) {
                return false;
            }
            high = mid;
        }
        true
    }
}
