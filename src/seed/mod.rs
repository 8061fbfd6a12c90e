use crate::models::Product;

/// The fixed demo catalog inserted by the seed endpoint when the store holds
/// no products yet.
pub fn demo_products() -> Vec<Product> {
    vec![
        demo(
            "Classic Tee - Black",
            "Premium cotton. Tailored fit.",
            29.0,
            "tops",
            "https://images.unsplash.com/photo-1520975922131-c0f3c0b1c1a9?q=80&w=800&auto=format&fit=crop",
        ),
        demo(
            "Oversized Hoodie - Cream",
            "Heavyweight fleece with embroidered logo.",
            69.0,
            "hoodies",
            "https://images.unsplash.com/photo-1520975922131-1b2e?crop=faces&fit=crop&w=800&q=80",
        ),
        demo(
            "Relaxed Fit Jeans",
            "Vintage wash, straight leg.",
            59.0,
            "bottoms",
            "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=800&auto=format&fit=crop",
        ),
        demo(
            "Utility Jacket - Olive",
            "Water-repellent with multi pockets.",
            119.0,
            "outerwear",
            "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?q=80&w=800&auto=format&fit=crop",
        ),
    ]
}

fn demo(title: &str, description: &str, price: f64, category: &str, image: &str) -> Product {
    Product {
        id: None,
        title: title.to_string(),
        description: Some(description.to_string()),
        price,
        category: category.to_string(),
        in_stock: true,
        image: Some(image.to_string()),
    }
}
