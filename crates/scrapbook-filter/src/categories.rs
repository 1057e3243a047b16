//! Gallery filter categories

use serde::{Deserialize, Serialize};

/// One facet of the gallery filter: an id, a display label and its options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCategory {
    pub id: String,
    pub label: String,
    pub options: Vec<String>,
}

impl FilterCategory {
    pub fn new<I, S>(id: &str, label: &str, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// The built-in gallery facets
pub fn gallery_categories() -> Vec<FilterCategory> {
    vec![
        FilterCategory::new(
            "theme",
            "Theme",
            [
                "sustainability",
                "circular-economy",
                "urban-farming",
                "waste-to-value",
                "food-systems",
                "biodiversity",
                "climate-education",
                "innovation",
            ],
        ),
        FilterCategory::new(
            "subject",
            "Subject",
            [
                "insects",
                "larvae-trays",
                "compost",
                "feedstock",
                "plants",
                "greenhouse",
                "terrarium",
                "exhibits",
                "signage",
                "architecture",
                "tools-equipment",
                "workshop-artifacts",
            ],
        ),
        FilterCategory::new(
            "activity",
            "Activity",
            [
                "site-visit",
                "lab-demo",
                "sampling",
                "observation",
                "tour",
                "experiment",
                "workshop",
                "showcase",
                "presentation",
                "team-photo",
            ],
        ),
        FilterCategory::new(
            "media-type",
            "Media Type",
            ["photo", "video", "poster", "infographic", "close-up", "wide-shot"],
        ),
        FilterCategory::new(
            "setting",
            "Setting",
            ["indoor", "outdoor", "lab", "classroom", "farm", "exhibit-hall"],
        ),
        FilterCategory::new("people", "People", ["solo", "group", "speaker", "visitors"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_category_ids() {
        let ids: Vec<String> = gallery_categories().into_iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec!["theme", "subject", "activity", "media-type", "setting", "people"]
        );
    }

    #[test]
    fn test_has_option() {
        let categories = gallery_categories();
        assert!(categories[4].has_option("lab"));
        assert!(!categories[4].has_option("lab-demo"));
    }
}
