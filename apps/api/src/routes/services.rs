use axum::Json;
use serde::Serialize;

/// An entry in the landing-page service menu.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceLink {
    pub href: &'static str,
    pub text: &'static str,
}

pub const SERVICES: &[ServiceLink] = &[
    ServiceLink {
        href: "/company-data",
        text: "Company Data",
    },
    ServiceLink {
        href: "/recipe-finder",
        text: "Recipe Finder",
    },
    ServiceLink {
        href: "/weather-recommender",
        text: "Weather Recommender",
    },
];

/// GET /api/v1/services
pub async fn services_handler() -> Json<&'static [ServiceLink]> {
    Json(SERVICES)
}
