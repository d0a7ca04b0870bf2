//! Shared test utilities.

#![allow(dead_code)]

use tablescout::catalog::{Catalog, Restaurant, RestaurantId};

/// Build a restaurant with `image_count` placeholder images.
pub fn restaurant(
    id: RestaurantId,
    name: &str,
    category: &str,
    image_count: usize,
) -> Restaurant {
    Restaurant {
        id,
        name: name.to_string(),
        description: format!("{} serves excellent food", name),
        rating: 4.5,
        review_count: 100,
        images: (0..image_count)
            .map(|i| format!("https://example.com/{}/{}.jpg", id, i))
            .collect(),
        location: "TOKYO".to_string(),
        category: category.to_string(),
        price: "10,000-20,000 won".to_string(),
        recommended_tag: None,
    }
}

/// The two-restaurant catalog used by the filtering scenarios:
/// a Tempura place and a Sushi place with distinct locations.
pub fn two_restaurant_catalog() -> Catalog {
    let mut tempura = restaurant(1, "Tempura House", "Tempura", 3);
    tempura.location = "YOKOHAMA".to_string();
    tempura.description = "Crispy seasonal tempura".to_string();

    let mut sushi = restaurant(2, "Sushi Bar", "Sushi", 2);
    sushi.location = "SAPPORO".to_string();
    sushi.description = "Fresh seafood over rice".to_string();

    Catalog {
        restaurants: vec![tempura, sushi],
    }
}
