//! Seed catalog loaded on every process start.

use crate::country::{Country, CountryCode};

const SEED: [(&str, &str, &str); 4] = [
    ("FR", "France", "Europe"),
    ("US", "United States", "North America"),
    ("JP", "Japan", "Asia"),
    ("BR", "Brazil", "South America"),
];

/// The initial country list.
///
/// Seed entries bypass create-time validation; uniqueness is only enforced for
/// countries added later.
pub fn countries() -> Vec<Country> {
    SEED.iter()
        .map(|(code, name, region)| {
            Country::new(CountryCode::from_trusted(code), *name, *region)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_four_entries() {
        let all = countries();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].alpha2_code().as_str(), "FR");
        assert_eq!(all[0].name(), "France");
        assert_eq!(all[0].region(), "Europe");
    }

    #[test]
    fn seed_codes_are_upper_case() {
        for c in countries() {
            let code = c.alpha2_code().as_str();
            assert_eq!(code, code.to_ascii_uppercase());
            assert_eq!(code.chars().count(), 2);
        }
    }
}
