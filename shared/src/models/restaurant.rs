//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant profile (singleton)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub logo_url: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

/// Social links shown on the customer landing page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google: Option<String>,
}

impl SocialLinks {
    /// Links that are actually set, as `(platform, url)` pairs
    pub fn present(&self) -> Vec<(&'static str, &str)> {
        [
            ("website", &self.website),
            ("instagram", &self.instagram),
            ("facebook", &self.facebook),
            ("twitter", &self.twitter),
            ("google", &self.google),
        ]
        .into_iter()
        .filter_map(|(platform, url)| url.as_deref().map(|u| (platform, u)))
        .collect()
    }
}

/// Update restaurant payload (merged into the stored profile)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub social_links: Option<SocialLinks>,
}

impl Restaurant {
    /// Merge the provided fields into this profile
    pub fn apply(&mut self, data: RestaurantUpdate) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(logo_url) = data.logo_url {
            self.logo_url = Some(logo_url);
        }
        if let Some(social_links) = data.social_links {
            self.social_links = social_links;
        }
    }
}
