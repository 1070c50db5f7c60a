//! Randomized market and shop fixtures for seeding the storefront database
//!
//! Every market owns 10 to 15 shops. Shop ids run across the whole document,
//! so a flattened list of shops is already in id order.

mod data;

pub use data::{CLOTHING_CATEGORIES, INDIAN_CITIES};

use crate::error::{Error, Result};
use data::{LATITUDE_RANGE, LONGITUDE_RANGE};
use fake::Fake;
use fake::faker::company::en::{CatchPhrase, CompanyName};
use fake::faker::lorem::en::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// A shop inside a market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    /// Globally unique, increasing across all markets
    pub id: u32,
    /// Shop name
    pub name: String,
    /// One of [`CLOTHING_CATEGORIES`]
    pub category: String,
    /// Marketing blurb
    pub description: String,
    /// `"<market name>, <city>"`
    pub location: String,
    /// Phone number
    pub contact: String,
}

/// A market and the shops it contains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    /// Sequential id starting at 1
    pub id: u32,
    /// `"<Word> Market"`
    pub name: String,
    /// One of [`INDIAN_CITIES`]
    pub city: String,
    /// Always `India`
    pub country: String,
    /// `[latitude, longitude]`
    pub position: [f64; 2],
    /// Marketing blurb
    pub description: String,
    /// Shops owned by this market
    pub shops: Vec<Shop>,
}

/// Generates markets with nested shops
#[derive(Debug, Clone)]
pub struct MarketGenerator {
    market_count: u32,
    min_shops: u32,
    max_shops: u32,
}

impl MarketGenerator {
    /// Number of markets in a default document
    pub const DEFAULT_MARKETS: u32 = 150;
    /// Fewest shops per market
    pub const DEFAULT_MIN_SHOPS: u32 = 10;
    /// Most shops per market
    pub const DEFAULT_MAX_SHOPS: u32 = 15;

    /// Generator with the default sizes
    pub fn new() -> Self {
        Self {
            market_count: Self::DEFAULT_MARKETS,
            min_shops: Self::DEFAULT_MIN_SHOPS,
            max_shops: Self::DEFAULT_MAX_SHOPS,
        }
    }

    /// Override the number of markets
    pub fn market_count(mut self, count: u32) -> Self {
        self.market_count = count;
        self
    }

    /// Override the per-market shop range (inclusive)
    pub fn shops_per_market(mut self, min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(Error::Config(format!(
                "shop range {min}..={max} is empty"
            )));
        }
        self.min_shops = min;
        self.max_shops = max;
        Ok(self)
    }

    /// Generate the whole document.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Market> {
        let mut markets = Vec::with_capacity(self.market_count as usize);
        let mut next_shop_id = 1;

        for id in 1..=self.market_count {
            let city = pick(INDIAN_CITIES, rng);
            let name = format!("{} Market", capitalize(&Word().fake_with_rng::<String, _>(rng)));
            let location = format!("{name}, {city}");

            let shop_count = rng.random_range(self.min_shops..=self.max_shops);
            let mut shops = Vec::with_capacity(shop_count as usize);
            for _ in 0..shop_count {
                shops.push(Shop {
                    id: next_shop_id,
                    name: CompanyName().fake_with_rng(rng),
                    category: pick(CLOTHING_CATEGORIES, rng).to_string(),
                    description: CatchPhrase().fake_with_rng(rng),
                    location: location.clone(),
                    contact: phone_number(rng),
                });
                next_shop_id += 1;
            }

            markets.push(Market {
                id,
                name,
                city: city.to_string(),
                country: "India".to_string(),
                position: [
                    coordinate(LATITUDE_RANGE, rng),
                    coordinate(LONGITUDE_RANGE, rng),
                ],
                description: format!(
                    "A bustling market in {city} known for its vibrant atmosphere and diverse range of shops."
                ),
                shops,
            });
        }

        tracing::debug!(
            markets = markets.len(),
            shops = next_shop_id - 1,
            "Generated market fixtures"
        );
        markets
    }
}

impl Default for MarketGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize markets as JSON, indented with two spaces unless `compact`.
pub fn to_json(markets: &[Market], compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(markets)?
    } else {
        serde_json::to_string_pretty(markets)?
    };
    Ok(json)
}

fn pick<R: Rng + ?Sized>(choices: &'static [&'static str], rng: &mut R) -> &'static str {
    choices.choose(rng).copied().unwrap_or_default()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Indian mobile number, `+91 9XXXX XXXXX`
fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let lead: u32 = rng.random_range(6..=9);
    let head: u32 = rng.random_range(0..10_000);
    let tail: u32 = rng.random_range(0..100_000);
    format!("+91 {lead}{head:04} {tail:05}")
}

/// Uniform coordinate rounded to six decimal places
fn coordinate<R: Rng + ?Sized>((min, max): (f64, f64), rng: &mut R) -> f64 {
    let raw: f64 = rng.random_range(min..=max);
    (raw * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn markets(seed: u64) -> Vec<Market> {
        MarketGenerator::new().generate(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn market_ids_are_sequential() {
        let markets = markets(7);
        assert_eq!(markets.len(), 150);
        for (i, market) in markets.iter().enumerate() {
            assert_eq!(market.id as usize, i + 1);
        }
    }

    #[test]
    fn shop_ids_strictly_increase_across_markets() {
        let ids: Vec<u32> = markets(11)
            .iter()
            .flat_map(|m| m.shops.iter().map(|s| s.id))
            .collect();

        assert_eq!(ids.first(), Some(&1));
        assert!(ids.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn shops_point_back_at_their_market() {
        for market in markets(3) {
            assert!((10..=15).contains(&market.shops.len()));
            assert!(market.name.ends_with(" Market"));
            assert!(INDIAN_CITIES.contains(&market.city.as_str()));
            for shop in &market.shops {
                assert!(shop.location.contains(&market.name));
                assert!(shop.location.contains(&market.city));
                assert!(CLOTHING_CATEGORIES.contains(&shop.category.as_str()));
            }
        }
    }

    #[test]
    fn positions_fall_inside_india() {
        for market in markets(5) {
            let [lat, lon] = market.position;
            assert!((LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&lat));
            assert!((LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&lon));
        }
    }

    #[test]
    fn same_seed_same_document() {
        assert_eq!(markets(42), markets(42));
    }

    #[test]
    fn serializes_expected_fields() {
        let market = &MarketGenerator::new()
            .market_count(1)
            .generate(&mut StdRng::seed_from_u64(1))[0];
        let value = serde_json::to_value(market).unwrap();

        assert_eq!(value["country"], "India");
        assert_eq!(value["position"].as_array().map(Vec::len), Some(2));
        assert!(value["shops"][0]["contact"].as_str().unwrap().starts_with("+91 "));
    }

    #[test]
    fn pretty_json_uses_two_space_indent() {
        let markets = MarketGenerator::new()
            .market_count(2)
            .generate(&mut StdRng::seed_from_u64(9));

        let pretty = to_json(&markets, false).unwrap();
        assert!(pretty.starts_with("[\n  {\n    \"id\": 1,"));

        let compact = to_json(&markets, true).unwrap();
        assert!(!compact.contains('\n'));
        let reparsed: Vec<Market> = serde_json::from_str(&compact).unwrap();
        assert_eq!(reparsed.len(), 2);
    }

    #[test]
    fn rejects_empty_shop_range() {
        assert!(MarketGenerator::new().shops_per_market(5, 2).is_err());
    }

    #[test]
    fn capitalizes_words() {
        assert_eq!(capitalize("bazaar"), "Bazaar");
        assert_eq!(capitalize(""), "");
    }
}
