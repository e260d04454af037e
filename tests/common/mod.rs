#![allow(dead_code)]

use imovel_scout::{PropertyRecord, PropertyStatus};

pub fn property(id: &str, title: &str, location: &str) -> PropertyRecord {
    PropertyRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        location: location.to_string(),
        address: None,
        property_type: "Casa".to_string(),
        price: 100_000.0,
        bedrooms: 2,
        bathrooms: 1,
        features: Vec::new(),
        amenities: Vec::new(),
        status: PropertyStatus::Available,
        featured: false,
        image: None,
        created_at: None,
    }
}

pub fn ids(records: &[&PropertyRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}
