//! Render selection for the listing page
//!
//! Pure functions of `{loading, animals, filter}`; evaluated every frame.

use crate::animals::{Animal, AnimalFilter, PageContext};

/// Everything the page view is derived from
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    pub loading: bool,
    pub animals: Vec<Animal>,
    pub filter: Option<AnimalFilter>,
}

/// Exactly one of these is shown at any time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingView<'a> {
    /// Request in flight; hides any stale list
    Loading,
    /// One card per animal, keyed by id, in server order
    Populated(&'a [Animal]),
    /// Nothing to show for this page
    Empty(PageContext),
}

/// Which filter buttons the title bar shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterAffordances {
    /// "Filtrar" (opens the dialog)
    pub filter: bool,
    /// "Limpar filtros"
    pub clear: bool,
}

impl ListingState {
    pub fn view(&self) -> ListingView<'_> {
        if self.loading {
            ListingView::Loading
        } else if !self.animals.is_empty() {
            ListingView::Populated(&self.animals)
        } else {
            ListingView::Empty(PageContext::AnimalsAvailableToAdopt)
        }
    }

    /// Hidden only when the list is empty and no filter is set
    pub fn affordances(&self) -> FilterAffordances {
        let filter_active = self.filter.is_some();
        if self.animals.is_empty() && !filter_active {
            return FilterAffordances::default();
        }
        FilterAffordances {
            filter: true,
            clear: filter_active,
        }
    }
}
