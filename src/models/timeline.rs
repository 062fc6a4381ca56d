use serde::Deserialize;

/// One chapter of the couple's story, rendered as a timeline card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimelineMilestone {
    pub year: String,
    pub title: String,
    pub date_label: String,
    pub description: String,
    pub image: String,
}
