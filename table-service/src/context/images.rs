//! Default menu images by category

/// Used when a category has no dedicated image
pub const FALLBACK_IMAGE: &str = "/images/menu/default.jpg";

const CATEGORY_IMAGES: &[(&str, &str)] = &[
    ("appetizers", "/images/menu/appetizers.jpg"),
    ("pasta", "/images/menu/pasta.jpg"),
    ("pizza", "/images/menu/pizza.jpg"),
    ("main-courses", "/images/menu/main-courses.jpg"),
    ("desserts", "/images/menu/desserts.jpg"),
    ("drinks", "/images/menu/drinks.jpg"),
];

/// Image assigned to a new item that arrives without one
pub fn default_image_for(category_id: &str) -> &'static str {
    CATEGORY_IMAGES
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, image)| *image)
        .unwrap_or(FALLBACK_IMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_categories() {
        assert_eq!(default_image_for("desserts"), "/images/menu/desserts.jpg");
        assert_eq!(default_image_for("brunch"), FALLBACK_IMAGE);
    }
}
