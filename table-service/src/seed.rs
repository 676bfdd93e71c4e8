//! Demo data
//!
//! Fixed starter dataset written on first launch. The restaurant key
//! doubles as the "already seeded" marker: when it is present nothing is
//! written, even if its contents no longer parse.

use rust_decimal::Decimal;
use shared::models::{MenuCategory, MenuItem, Restaurant, SocialLinks};

use crate::context::default_image_for;
use crate::repository::{Repositories, Repository};
use crate::storage::StorageResult;

fn demo_restaurant() -> Restaurant {
    Restaurant {
        id: "1".into(),
        name: "Bella Cucina".into(),
        description: "Authentic Italian cuisine prepared with the freshest ingredients. \
            Our chefs bring the flavors of Italy to your table with traditional recipes \
            and modern creativity."
            .into(),
        logo_url: Some("/placeholder.svg".into()),
        social_links: SocialLinks {
            website: Some("https://example.com".into()),
            instagram: Some("https://instagram.com".into()),
            facebook: Some("https://facebook.com".into()),
            twitter: None,
            google: Some("https://google.com/maps".into()),
        },
    }
}

const DEMO_CATEGORIES: &[(&str, &str, &str)] = &[
    ("appetizers", "Appetizers", "Start your meal with these delicious appetizers"),
    ("pasta", "Pasta", "Handmade pasta dishes with authentic Italian sauces"),
    ("pizza", "Pizza", "Wood-fired pizzas with a variety of toppings"),
    ("main-courses", "Main Courses", "Hearty main dishes featuring the finest ingredients"),
    ("desserts", "Desserts", "Sweet treats to end your meal"),
    ("drinks", "Drinks", "Beverages and cocktails"),
];

/// (id, name, price in cents, description, category)
const DEMO_ITEMS: &[(&str, &str, i64, &str, &str)] = &[
    (
        "1",
        "Bruschetta",
        899,
        "Grilled bread rubbed with garlic and topped with diced tomatoes, fresh basil, and olive oil",
        "appetizers",
    ),
    (
        "2",
        "Caprese Salad",
        1099,
        "Fresh mozzarella, tomatoes, and sweet basil, seasoned with salt and olive oil",
        "appetizers",
    ),
    (
        "3",
        "Spaghetti Carbonara",
        1599,
        "Spaghetti with a creamy sauce of eggs, cheese, pancetta, and black pepper",
        "pasta",
    ),
    (
        "4",
        "Fettuccine Alfredo",
        1499,
        "Fettuccine tossed with butter and Parmesan cheese",
        "pasta",
    ),
    ("5", "Margherita Pizza", 1299, "Tomato sauce, mozzarella, and basil", "pizza"),
    ("6", "Pepperoni Pizza", 1399, "Tomato sauce, mozzarella, and pepperoni", "pizza"),
    (
        "7",
        "Chicken Parmesan",
        1799,
        "Breaded chicken breast topped with tomato sauce and mozzarella",
        "main-courses",
    ),
    (
        "8",
        "Tiramisu",
        899,
        "Coffee-flavored Italian dessert made of ladyfingers dipped in coffee, layered with a \
         whipped mixture of eggs, sugar, and mascarpone cheese",
        "desserts",
    ),
    ("9", "House Red Wine", 799, "Glass of our house red wine", "drinks"),
    ("10", "Espresso", 399, "Single shot of espresso", "drinks"),
];

fn demo_categories() -> Vec<MenuCategory> {
    DEMO_CATEGORIES
        .iter()
        .zip(1..)
        .map(|(&(id, name, description), order)| MenuCategory {
            id: id.into(),
            name: name.into(),
            description: Some(description.into()),
            sort_order: Some(order),
        })
        .collect()
}

fn demo_items() -> Vec<MenuItem> {
    DEMO_ITEMS
        .iter()
        .map(|&(id, name, cents, description, category)| MenuItem {
            id: id.into(),
            name: name.into(),
            price: Decimal::new(cents, 2),
            description: description.into(),
            category: category.into(),
            image: Some(default_image_for(category).into()),
            available: true,
        })
        .collect()
}

/// Write the demo dataset unless a restaurant profile already exists
///
/// Returns `Ok(true)` when data was written, `Ok(false)` when skipped.
pub fn initialize_demo_data(repos: &Repositories) -> StorageResult<bool> {
    if repos.restaurant.is_stored()? {
        tracing::debug!("Restaurant profile present, skipping demo data");
        return Ok(false);
    }

    let categories = demo_categories();
    let items = demo_items();

    for category in &categories {
        repos.categories.save(category)?;
    }
    for item in &items {
        repos.menu_items.save(item)?;
    }
    // last, so a partial seed is retried on next launch
    repos.restaurant.save(&demo_restaurant())?;

    tracing::info!(
        categories = categories.len(),
        menu_items = items.len(),
        "Demo data initialized"
    );
    Ok(true)
}
