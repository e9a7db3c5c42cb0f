//! Property-based tests for password generation.
//!
//! For any valid request the output has the requested length, draws only
//! from the enabled classes, and is reproducible under a fixed seed.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use passgen::services::password_generator::{build_pool, generate_with_rng, MAX_LENGTH};
use passgen::types::errors::GenerationError;
use passgen::types::generation::{CharacterClass, GenerationRequest};

fn arb_request() -> impl Strategy<Value = GenerationRequest> {
    (1i64..=256, any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(len, u, n, s)| GenerationRequest::new(len, u, n, s))
}

proptest! {
    #[test]
    fn output_has_requested_length(request in arb_request(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pw = generate_with_rng(&request, &mut rng).unwrap();
        prop_assert_eq!(pw.len() as i64, request.length);
    }

    #[test]
    fn output_only_uses_enabled_classes(request in arb_request(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pw = generate_with_rng(&request, &mut rng).unwrap();
        let enabled = request.enabled_classes();
        for c in pw.as_str().chars() {
            prop_assert!(enabled.iter().any(|class| class.contains(c)), "{:?} not in enabled classes", c);
        }
        if !request.include_uppercase {
            prop_assert!(!pw.as_str().chars().any(|c| CharacterClass::Uppercase.contains(c)));
        }
        if !request.include_numbers {
            prop_assert!(!pw.as_str().chars().any(|c| CharacterClass::Digits.contains(c)));
        }
        if !request.include_symbols {
            prop_assert!(!pw.as_str().chars().any(|c| CharacterClass::Symbols.contains(c)));
        }
    }

    #[test]
    fn enabling_a_class_only_grows_the_pool(request in arb_request()) {
        let pool = build_pool(&request);
        let widened = [
            GenerationRequest { include_uppercase: true, ..request.clone() },
            GenerationRequest { include_numbers: true, ..request.clone() },
            GenerationRequest { include_symbols: true, ..request.clone() },
        ];
        for wider in &widened {
            let wider_pool = build_pool(wider);
            prop_assert!(pool.iter().all(|c| wider_pool.contains(c)));
            prop_assert!(wider_pool.len() >= pool.len());
        }
    }

    #[test]
    fn over_maximum_length_always_rejected(length in (MAX_LENGTH + 1)..=i64::MAX, u in any::<bool>(), n in any::<bool>(), s in any::<bool>()) {
        let request = GenerationRequest::new(length, u, n, s);
        let mut rng = StdRng::seed_from_u64(0);
        prop_assert_eq!(generate_with_rng(&request, &mut rng).unwrap_err(), GenerationError::TooLong(length));
    }

    #[test]
    fn same_seed_same_password(request in arb_request(), seed in any::<u64>()) {
        let a = generate_with_rng(&request, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = generate_with_rng(&request, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn non_positive_length_always_rejected(length in i64::MIN..=0, u in any::<bool>(), n in any::<bool>(), s in any::<bool>()) {
        let request = GenerationRequest::new(length, u, n, s);
        let mut rng = StdRng::seed_from_u64(0);
        prop_assert_eq!(generate_with_rng(&request, &mut rng).unwrap_err(), GenerationError::InvalidLength(length));
    }
}
