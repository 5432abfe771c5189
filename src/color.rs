use eframe::egui::Color32;

use crate::data::model::Category;

// ---------------------------------------------------------------------------
// Fixed category colors
// ---------------------------------------------------------------------------

/// The color mapping is fixed: success is always green, failure always red.
pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::Success => Color32::from_rgb(0x1e, 0xa0, 0x3c),
        Category::Failure => Color32::from_rgb(0xd0, 0x2f, 0x2f),
    }
}

/// Semi-transparent variant for the histogram overlays, so overlapping bars
/// stay readable.
pub fn category_fill(category: Category) -> Color32 {
    category_color(category).gamma_multiply(0.7)
}

/// The threshold marker color shared by the ratio and histogram charts.
pub fn marker_color() -> Color32 {
    Color32::from_rgb(0x2e, 0x6f, 0xdf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_have_distinct_colors() {
        assert_ne!(
            category_color(Category::Success),
            category_color(Category::Failure)
        );
    }
}
