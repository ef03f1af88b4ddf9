//! Display state published by a [`CatalogPage`](super::CatalogPage).

use serde::Serialize;

use crate::catalog::RankedView;
use crate::model::Product;

/// One named, ordered product sequence ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedList {
    pub view: RankedView,
    pub products: Vec<Product>,
}

/// What the presentation layer should show.
///
/// A page starts in `Loading`, and every activation passes through `Loading` again before
/// settling on `Error` or `Populated`. There is no partial success.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageState {
    #[default]
    Loading,
    Error { message: String },
    Populated { lists: Vec<RankedList> },
}

impl PageState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            PageState::Error { message } => Some(message),
            _ => None,
        }
    }

    /// All ranked lists; empty unless the page is populated.
    pub fn lists(&self) -> &[RankedList] {
        match self {
            PageState::Populated { lists } => lists,
            _ => &[],
        }
    }

    /// Products of a single view, if the page is populated and derives that view.
    pub fn list(&self, view: RankedView) -> Option<&[Product]> {
        self.lists()
            .iter()
            .find(|l| l.view == view)
            .map(|l| l.products.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_state_has_no_lists() {
        let state = PageState::Error {
            message: "Failed".into(),
        };
        assert_eq!(state.error_message(), Some("Failed"));
        assert!(state.lists().is_empty());
        assert!(state.list(RankedView::BestSellers).is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_populated_lookup_by_view() {
        let state = PageState::Populated {
            lists: vec![RankedList {
                view: RankedView::NewArrivals,
                products: vec![Product::new(1, "p", 1.0)],
            }],
        };
        assert_eq!(state.list(RankedView::NewArrivals).map(<[Product]>::len), Some(1));
        assert!(state.list(RankedView::Recommended).is_none());
        assert_eq!(state.error_message(), None);
    }
}
