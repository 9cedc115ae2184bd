use super::product::Product;

/// The fixed demo catalogue inserted by seeding.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            title: "Classic Salted Potato Chips".to_string(),
            description: Some("Crispy, thin-cut potatoes with a perfect salty crunch.".to_string()),
            price: 2.99,
            category: "potato".to_string(),
            in_stock: true,
            image_url: Some("https://images.unsplash.com/photo-1541592106381-b31e9677c0e5?w=800".to_string()),
            rating: Some(4.6),
            brand: Some("CrunchCraft".to_string()),
            weight_grams: Some(150),
        },
        Product {
            title: "Spicy Tortilla Chips".to_string(),
            description: Some("Stone-ground corn chips dusted with fiery chili and lime.".to_string()),
            price: 3.49,
            category: "tortilla".to_string(),
            in_stock: true,
            image_url: Some("https://images.unsplash.com/photo-1604908176997-4316c288032e?w=800".to_string()),
            rating: Some(4.7),
            brand: Some("FuegoBite".to_string()),
            weight_grams: Some(170),
        },
        Product {
            title: "Cheddar Ridges".to_string(),
            description: Some("Ridged chips blasted with bold cheddar cheese flavor.".to_string()),
            price: 3.19,
            category: "potato".to_string(),
            in_stock: true,
            image_url: Some("https://images.unsplash.com/photo-1613478223719-3c84c68ffd4a?w=800".to_string()),
            rating: Some(4.4),
            brand: Some("RidgeRush".to_string()),
            weight_grams: Some(160),
        },
        Product {
            title: "Sea Salt Kettle Chips".to_string(),
            description: Some("Thick-cut kettle chips cooked in small batches for extra crunch.".to_string()),
            price: 3.99,
            category: "kettle".to_string(),
            in_stock: true,
            image_url: Some("https://images.unsplash.com/photo-1585238342028-4bbc3e2f5b42?w=800".to_string()),
            rating: Some(4.8),
            brand: Some("KettleCo".to_string()),
            weight_grams: Some(200),
        },
    ]
}
