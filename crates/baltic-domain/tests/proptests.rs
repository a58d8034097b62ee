use baltic_domain::services::generator::PairGenerator;
use baltic_domain::value_objects::role::Role;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn counterparty_ids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z]{3}-[0-9]{1,4}", 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn generated_pairs_hold_their_invariants(
        seed in any::<u64>(),
        buyer_side in any::<bool>(),
        counterparties in counterparty_ids(),
    ) {
        let role = if buyer_side { Role::Buyer } else { Role::Seller };
        let generator = PairGenerator::new(
            role,
            "OWN-COMPANY".to_string(),
            counterparties.clone(),
        )
        .expect("non-empty counterparty list");

        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..16 {
            let (trade, cargo) = generator.next_pair(&mut rng);

            prop_assert_eq!(&trade.vakt_id, &cargo.vakt_id);
            let vakt: u32 = trade.vakt_id.parse().expect("numeric vakt id");
            prop_assert!(vakt <= 10_000);

            prop_assert!((1.0..=6_000.0).contains(&trade.price));
            prop_assert!((1..=1_000_000).contains(&trade.quantity));

            let (own, other) = match role {
                Role::Buyer => (&trade.buyer, &trade.seller),
                Role::Seller => (&trade.seller, &trade.buyer),
            };
            prop_assert_eq!(own, "OWN-COMPANY");
            prop_assert!(counterparties.iter().any(|id| id == other));
        }
    }
}
