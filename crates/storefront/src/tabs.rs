//! Tab panel: which of the four tabs is showing, and what it shows.

use core::fmt;

use storefront_products::ShippingCost;
use storefront_reviews::Review;

use crate::details::DetailsList;

/// The four tabs, in display order. Any tab can be selected from any other.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Reviews,
    MakeAReview,
    Shipping,
    Details,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Reviews, Tab::MakeAReview, Tab::Shipping, Tab::Details];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Reviews => "Reviews",
            Tab::MakeAReview => "Make a Review",
            Tab::Shipping => "Shipping",
            Tab::Details => "Details",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabPanel {
    selected: Tab,
}

impl TabPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Tab {
        self.selected
    }

    pub fn select_tab(&mut self, tab: Tab) {
        tracing::debug!(%tab, "tab selected");
        self.selected = tab;
    }

    /// Content of the selected tab, built from the props handed down by the card.
    pub fn content(&self, reviews: Vec<Review>, shipping: ShippingCost, details: DetailsList) -> TabContent {
        match self.selected {
            Tab::Reviews => TabContent::Reviews(reviews),
            Tab::MakeAReview => TabContent::ReviewForm,
            Tab::Shipping => TabContent::Shipping(shipping),
            Tab::Details => TabContent::Details(details),
        }
    }
}

/// What the selected tab displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent {
    Reviews(Vec<Review>),
    /// The review form; its state lives in the form itself.
    ReviewForm,
    Shipping(ShippingCost),
    Details(DetailsList),
}

impl TabContent {
    /// Plain-text rendering. The review form has no text rendering.
    pub fn lines(&self) -> Vec<String> {
        match self {
            TabContent::Reviews(reviews) if reviews.is_empty() => {
                vec!["There are no reviews yet.".to_string()]
            }
            TabContent::Reviews(reviews) => reviews
                .iter()
                .flat_map(|r| {
                    [
                        r.name().to_string(),
                        format!("Rating: {}", r.rating()),
                        r.text().to_string(),
                        format!("Recommend: {}", r.recommend()),
                    ]
                })
                .collect(),
            TabContent::ReviewForm => Vec::new(),
            TabContent::Shipping(cost) => vec![format!("Shipping: {cost}")],
            TabContent::Details(list) => list.lines(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_on(tab: Tab) -> TabPanel {
        let mut panel = TabPanel::new();
        panel.select_tab(tab);
        panel
    }

    fn details() -> DetailsList {
        DetailsList::new(vec!["wool".to_string()])
    }

    #[test]
    fn starts_on_reviews() {
        assert_eq!(TabPanel::new().selected(), Tab::Reviews);
    }

    #[test]
    fn any_tab_reachable_from_any_tab() {
        for from in Tab::ALL {
            for to in Tab::ALL {
                let mut panel = panel_on(from);
                panel.select_tab(to);
                assert_eq!(panel.selected(), to);
            }
        }
    }

    #[test]
    fn labels_in_display_order() {
        let labels: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Reviews", "Make a Review", "Shipping", "Details"]);
    }

    #[test]
    fn empty_review_tab_says_so() {
        let content = TabPanel::new().content(vec![], ShippingCost::Free, details());
        assert_eq!(content.lines(), vec!["There are no reviews yet."]);
    }

    #[test]
    fn shipping_tab_shows_cost() {
        let content = panel_on(Tab::Shipping).content(vec![], ShippingCost::Standard, details());
        assert_eq!(content, TabContent::Shipping(ShippingCost::Standard));
        assert_eq!(content.lines(), vec!["Shipping: $2.99"]);
    }

    #[test]
    fn details_and_form_tabs() {
        let content = panel_on(Tab::Details).content(vec![], ShippingCost::Free, details());
        assert_eq!(content.lines(), vec!["- wool"]);

        let content = panel_on(Tab::MakeAReview).content(vec![], ShippingCost::Free, details());
        assert_eq!(content, TabContent::ReviewForm);
        assert!(content.lines().is_empty());
    }
}
