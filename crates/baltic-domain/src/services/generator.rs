use crate::value_objects::cargo::{CargoRecord, Parcel};
use crate::value_objects::period::DatePeriod;
use crate::value_objects::role::Role;
use crate::value_objects::trade::{PaymentTerms, TradeRecord};
use rand::Rng;

/// Source-system tag stamped on every record.
pub const SOURCE_SYSTEM: &str = "VAKT";

/// Produces trade/cargo pairs from fixed templates, mutating the
/// randomized fields on each draw. The pair shares one vakt id.
#[derive(Debug)]
pub struct PairGenerator {
    role: Role,
    company_id: String,
    counterparty_ids: Vec<String>,
}

impl PairGenerator {
    pub fn new(
        role: Role,
        company_id: String,
        counterparty_ids: Vec<String>,
    ) -> Result<Self, String> {
        if counterparty_ids.is_empty() {
            return Err("counterparty id list must not be empty".to_string());
        }
        Ok(Self {
            role,
            company_id,
            counterparty_ids,
        })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn next_pair<R: Rng>(&self, rng: &mut R) -> (TradeRecord, CargoRecord) {
        let vakt_id = rng.gen_range(0..=10_000u32).to_string();
        let counterparty =
            self.counterparty_ids[rng.gen_range(0..self.counterparty_ids.len())].clone();
        let (buyer, seller) = match self.role {
            Role::Buyer => (self.company_id.clone(), counterparty),
            Role::Seller => (counterparty, self.company_id.clone()),
        };

        let mut trade = base_trade();
        trade.vakt_id = vakt_id.clone();
        trade.buyer_etrm_id = format!("trade {vakt_id}");
        trade.seller_etrm_id = format!("trade {vakt_id}");
        trade.buyer = buyer;
        trade.seller = seller;
        trade.deal_date = random_deal_date(rng);
        trade.price = random_price(rng);
        trade.quantity = random_quantity(rng);

        let mut cargo = base_cargo();
        cargo.vakt_id = vakt_id.clone();
        cargo.cargo_id = format!("cargo {vakt_id}");
        cargo.parcels[0].id = format!("{vakt_id}-1");

        (trade, cargo)
    }
}

/// Uniform in [1, 6000]; drawn as integer cents so the value never
/// carries more than 2 decimal digits.
pub fn random_price<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(100..=600_000u32) as f64 / 100.0
}

pub fn random_quantity<R: Rng>(rng: &mut R) -> u64 {
    rng.gen_range(1..=1_000_000)
}

/// Year, month and day are drawn independently; the day is not clamped
/// to the month's length. The remote service owns calendar validation.
pub fn random_deal_date<R: Rng>(rng: &mut R) -> String {
    let year = rng.gen_range(2000..=2025u32);
    let month = rng.gen_range(1..=12u32);
    let day = rng.gen_range(1..=31u32);
    format!("{year:04}-{month:02}-{day:02}")
}

pub fn base_trade() -> TradeRecord {
    TradeRecord {
        source: SOURCE_SYSTEM.to_string(),
        vakt_id: String::new(),
        buyer_etrm_id: String::new(),
        seller_etrm_id: String::new(),
        buyer: String::new(),
        seller: String::new(),
        deal_date: "2020-01-31".to_string(),
        delivery_period: DatePeriod::new("2020-02-10", "2020-02-28"),
        payment_terms: PaymentTerms {
            event_base: "BL".to_string(),
            when: "AFTER".to_string(),
            time: 30,
            time_unit: "DAYS".to_string(),
            day_type: "CALENDAR".to_string(),
        },
        price: 70.02,
        currency: "USD".to_string(),
        price_unit: "BBL".to_string(),
        quantity: 600_000,
        delivery_terms: "FOB".to_string(),
        min_tolerance: 1.25,
        max_tolerance: 1.25,
        invoice_quantity: "LOAD".to_string(),
        general_terms_and_conditions: "suko90".to_string(),
        laytime: "as per GT&Cs".to_string(),
        demurrage_terms: "as per GT&Cs".to_string(),
        law: "English Law".to_string(),
        required_documents: vec!["Q88".to_string()],
        credit_requirement: "OPEN_CREDIT".to_string(),
    }
}

pub fn base_cargo() -> CargoRecord {
    CargoRecord {
        source: SOURCE_SYSTEM.to_string(),
        vakt_id: String::new(),
        cargo_id: String::new(),
        grade: "BRENT".to_string(),
        parcels: vec![Parcel {
            id: String::new(),
            laycan_period: DatePeriod::new("2020-02-10", "2020-02-14"),
            mode_of_transport: "VESSEL".to_string(),
            vessel_imo: 9_747_974,
            vessel_name: "Andrej".to_string(),
            loading_port: "Sullom Voe".to_string(),
            discharge_area: "Rotterdam".to_string(),
            inspector: "INTERTEK".to_string(),
            deemed_bl_date: "2020-02-14".to_string(),
            quantity: 600_000,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::{random_deal_date, random_price, random_quantity, PairGenerator};
    use crate::value_objects::role::Role;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator(role: Role) -> PairGenerator {
        PairGenerator::new(
            role,
            "OWN-1".to_string(),
            vec!["CP-1".to_string(), "CP-2".to_string()],
        )
        .expect("generator")
    }

    #[test]
    fn rejects_empty_counterparty_list() {
        let err = PairGenerator::new(Role::Buyer, "OWN-1".to_string(), Vec::new())
            .expect_err("expected constructor to fail");
        assert!(err.contains("must not be empty"));
    }

    #[test]
    fn price_stays_in_range_with_two_decimals() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..5_000 {
            let price = random_price(&mut rng);
            assert!((1.0..=6_000.0).contains(&price), "price {price} out of range");
            let cents = price * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9, "price {price} has sub-cent digits");
        }
    }

    #[test]
    fn quantity_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..5_000 {
            let quantity = random_quantity(&mut rng);
            assert!((1..=1_000_000).contains(&quantity));
        }
    }

    #[test]
    fn deal_date_components_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..5_000 {
            let date = random_deal_date(&mut rng);
            let parts: Vec<u32> = date
                .split('-')
                .map(|part| part.parse().expect("numeric date part"))
                .collect();
            assert_eq!(parts.len(), 3);
            assert!((2000..=2025).contains(&parts[0]));
            assert!((1..=12).contains(&parts[1]));
            assert!((1..=31).contains(&parts[2]));
        }
    }

    #[test]
    fn pair_shares_vakt_id_and_derived_ids() {
        let mut rng = StdRng::seed_from_u64(4);
        let generator = generator(Role::Buyer);
        for _ in 0..200 {
            let (trade, cargo) = generator.next_pair(&mut rng);
            assert_eq!(trade.vakt_id, cargo.vakt_id);
            assert_eq!(trade.buyer_etrm_id, format!("trade {}", trade.vakt_id));
            assert_eq!(trade.seller_etrm_id, trade.buyer_etrm_id);
            assert_eq!(cargo.cargo_id, format!("cargo {}", cargo.vakt_id));
            assert_eq!(cargo.parcels[0].id, format!("{}-1", cargo.vakt_id));

            let vakt: u32 = trade.vakt_id.parse().expect("numeric vakt id");
            assert!(vakt <= 10_000);
        }
    }

    #[test]
    fn buyer_role_assigns_own_company_to_buyer_side() {
        let mut rng = StdRng::seed_from_u64(5);
        let generator = generator(Role::Buyer);
        for _ in 0..200 {
            let (trade, _) = generator.next_pair(&mut rng);
            assert_eq!(trade.buyer, "OWN-1");
            assert!(["CP-1", "CP-2"].contains(&trade.seller.as_str()));
        }
    }

    #[test]
    fn seller_role_assigns_own_company_to_seller_side() {
        let mut rng = StdRng::seed_from_u64(6);
        let generator = generator(Role::Seller);
        for _ in 0..200 {
            let (trade, _) = generator.next_pair(&mut rng);
            assert_eq!(trade.seller, "OWN-1");
            assert!(["CP-1", "CP-2"].contains(&trade.buyer.as_str()));
        }
    }
}
