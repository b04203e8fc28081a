//! The contact record.

use serde::{Deserialize, Serialize};

use crate::country::CountryCode;

/// One user's contact data.
///
/// All fields are required, non-empty strings by the time a record reaches
/// the store; shape validation happens upstream in the form layer. The wire
/// names are the camelCase field names, and decoding rejects any object
/// carrying extra or missing fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    /// A code from the fixed [`CountryCode`] set, kept as text on the wire.
    pub country_code: String,
    /// Digits only, format validated upstream.
    pub phone_number: String,
    pub email: String,
    pub address: String,
}

/// The fields of a record that must be unique across a collection.
///
/// Borrowed from the record it describes; two identities are compared key by
/// key, never as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordIdentity<'a> {
    pub email: &'a str,
    pub country_code: &'a str,
    pub phone_number: &'a str,
}

impl Record {
    /// Create a new record.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        country_code: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            country_code: country_code.into(),
            phone_number: phone_number.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// The uniqueness keys of this record.
    pub fn identity(&self) -> RecordIdentity<'_> {
        RecordIdentity {
            email: &self.email,
            country_code: &self.country_code,
            phone_number: &self.phone_number,
        }
    }

    /// Parse the country code, if it is one of the supported set.
    pub fn country(&self) -> Option<CountryCode> {
        self.country_code.parse().ok()
    }

    /// Full display name, "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl RecordIdentity<'_> {
    /// Case-sensitive exact email match.
    pub fn same_email(&self, other: &RecordIdentity<'_>) -> bool {
        self.email == other.email
    }

    /// Same phone number under the same country code.
    pub fn same_phone(&self, other: &RecordIdentity<'_>) -> bool {
        self.country_code == other.country_code && self.phone_number == other.phone_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Record {
        Record::new(
            "Ada",
            "Lovelace",
            "GB",
            "2071234567",
            "ada@example.com",
            "12 St James's Square, London",
        )
    }

    #[test]
    fn test_identity_borrows_fields() {
        let record = ada();
        let identity = record.identity();
        assert_eq!(identity.email, "ada@example.com");
        assert_eq!(identity.country_code, "GB");
        assert_eq!(identity.phone_number, "2071234567");
    }

    #[test]
    fn test_same_email_is_case_sensitive() {
        let a = ada();
        let mut b = ada();
        b.email = "ADA@example.com".to_string();
        assert!(!a.identity().same_email(&b.identity()));
    }

    #[test]
    fn test_same_phone_requires_matching_country() {
        let a = ada();
        let mut b = ada();
        b.country_code = "US".to_string();
        assert!(!a.identity().same_phone(&b.identity()));

        b.country_code = "GB".to_string();
        assert!(a.identity().same_phone(&b.identity()));
    }

    #[test]
    fn test_country_parses_known_code() {
        assert_eq!(ada().country(), Some(CountryCode::GB));

        let mut unknown = ada();
        unknown.country_code = "ZZ".to_string();
        assert_eq!(unknown.country(), None);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(ada()).unwrap();
        let object = json.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "address",
                "countryCode",
                "email",
                "firstName",
                "lastName",
                "phoneNumber"
            ]
        );
    }

    #[test]
    fn test_full_name() {
        assert_eq!(ada().full_name(), "Ada Lovelace");
    }
}
