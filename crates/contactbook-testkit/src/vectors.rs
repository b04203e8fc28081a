//! Golden vectors for the persisted document format.
//!
//! Each vector pairs a collection with the exact compact text it must encode
//! to. Any change to field names, field order, or escaping shows up here.

use serde::{Deserialize, Serialize};

use contactbook_core::{decode_collection, encode_collection, Record};

/// A single golden vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenVector {
    pub name: String,
    pub description: String,
    pub records: Vec<Record>,
    pub encoded: String,
}

fn vector(name: &str, description: &str, records: Vec<Record>, encoded: &str) -> GoldenVector {
    GoldenVector {
        name: name.to_string(),
        description: description.to_string(),
        records,
        encoded: encoded.to_string(),
    }
}

/// All golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        vector("empty", "Empty collection encodes to an empty array", vec![], "[]"),
        vector(
            "single",
            "One record, fields in declaration order",
            vec![Record::new(
                "Ada",
                "Lovelace",
                "GB",
                "2071234567",
                "ada@example.com",
                "London",
            )],
            r#"[{"firstName":"Ada","lastName":"Lovelace","countryCode":"GB","phoneNumber":"2071234567","email":"ada@example.com","address":"London"}]"#,
        ),
        vector(
            "ordered_pair",
            "Insertion order is preserved",
            vec![
                Record::new("Grace", "Hopper", "US", "2025550143", "grace@example.com", "Arlington"),
                Record::new("Alan", "Turing", "GB", "1619730000", "alan@example.com", "Wilmslow"),
            ],
            r#"[{"firstName":"Grace","lastName":"Hopper","countryCode":"US","phoneNumber":"2025550143","email":"grace@example.com","address":"Arlington"},{"firstName":"Alan","lastName":"Turing","countryCode":"GB","phoneNumber":"1619730000","email":"alan@example.com","address":"Wilmslow"}]"#,
        ),
        vector(
            "escaping",
            "Quotes and backslashes are escaped, non-ASCII is kept verbatim",
            vec![Record::new(
                "José",
                "Núñez",
                "MX",
                "5512345678",
                "jose@example.com",
                "Calle \"Sol\" 4\\B",
            )],
            r#"[{"firstName":"José","lastName":"Núñez","countryCode":"MX","phoneNumber":"5512345678","email":"jose@example.com","address":"Calle \"Sol\" 4\\B"}]"#,
        ),
    ]
}

/// Check every vector encodes to its text and decodes back to its records.
///
/// Returns the names of failing vectors.
pub fn verify_all_vectors() -> Vec<String> {
    all_vectors()
        .into_iter()
        .filter(|v| {
            let encodes = encode_collection(&v.records).ok().as_deref() == Some(v.encoded.as_str());
            let decodes = decode_collection(&v.encoded).ok().as_ref() == Some(&v.records);
            !(encodes && decodes)
        })
        .map(|v| v.name)
        .collect()
}
