//! Proptest generators for property-based testing.

use proptest::prelude::*;

use contactbook_core::{CountryCode, Record};

/// Generate a supported country code.
pub fn country_code() -> impl Strategy<Value = CountryCode> {
    prop::sample::select(CountryCode::ALL.to_vec())
}

/// Generate a name-like field.
pub fn name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,11}".prop_map(String::from)
}

/// Generate an email address.
pub fn email() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9.]{0,11}", "[a-z]{2,10}\\.(com|org|net)")
        .prop_map(|(local, domain)| format!("{local}@{domain}"))
}

/// Generate a phone number of 7 to 12 digits.
pub fn phone_number() -> impl Strategy<Value = String> {
    "[0-9]{7,12}".prop_map(String::from)
}

/// Generate a free-text address, including characters that need escaping.
pub fn address() -> impl Strategy<Value = String> {
    "[0-9]{1,4} [A-Za-z \"',.-]{1,40}".prop_map(String::from)
}

/// Generate a random record.
pub fn record() -> impl Strategy<Value = Record> {
    (name(), name(), country_code(), phone_number(), email(), address()).prop_map(
        |(first, last, country, phone, email, address)| {
            Record::new(first, last, country.as_str(), phone, email, address)
        },
    )
}

/// Generate up to `max` records with pairwise-distinct emails and
/// pairwise-distinct (country code, phone number) pairs.
pub fn distinct_records(max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record(), 0..=max).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(i, mut r)| {
                // A fixed-width positional suffix keeps both keys unique.
                let (local, domain) = r.email.split_once('@').unwrap_or(("user", "example.com"));
                r.email = format!("{local}+{i:04}@{domain}");
                r.phone_number = format!("{}{i:04}", r.phone_number);
                r
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn test_distinct_records_are_distinct(records in distinct_records(30)) {
            let emails: HashSet<_> = records.iter().map(|r| r.email.clone()).collect();
            let phones: HashSet<_> = records
                .iter()
                .map(|r| (r.country_code.clone(), r.phone_number.clone()))
                .collect();

            prop_assert_eq!(emails.len(), records.len());
            prop_assert_eq!(phones.len(), records.len());
        }

        #[test]
        fn test_records_use_supported_codes(r in record()) {
            prop_assert!(r.country().is_some());
        }
    }
}
