//! The paginated resource list shown on the home page.
//!
//! The list is absent until the first page has been fetched. Every
//! transition except [`ResourceListState::set_list`] and
//! [`ResourceListState::set_loading`] is a logged no-op while it is absent.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use contract::{Page, Resource};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceListState {
    list: Option<Page<Resource>>,
    loading: bool,
}

impl ResourceListState {
    #[must_use]
    pub fn list(&self) -> Option<&Page<Resource>> {
        self.list.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace items and pagination metadata with a freshly fetched page.
    pub fn set_list(&mut self, page: Page<Resource>) {
        self.list = Some(page);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Prepend a newly created resource.
    ///
    /// An empty list reports at least one page afterwards; otherwise the
    /// pagination metadata is left alone.
    pub fn insert_at_head(&mut self, resource: Resource) -> bool {
        let Some(list) = self.list.as_mut() else {
            log::debug!("resources: insert of {} ignored, no list loaded", resource.id());
            return false;
        };
        if list.data.is_empty() {
            list.total_pages = list.total_pages.max(1);
        }
        list.data.insert(0, resource);
        true
    }

    /// Drop the entry with `id`, keeping the others in order.
    ///
    /// `page` and `total_pages` are not recomputed; callers that need exact
    /// pagination re-fetch the page.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let Some(list) = self.list.as_mut() else {
            log::debug!("resources: removal of {id} ignored, no list loaded");
            return false;
        };
        let before = list.data.len();
        list.data.retain(|r| r.id() != id);
        list.data.len() != before
    }

    /// Swap in a fresher copy of an entry already on the page.
    pub fn replace(&mut self, resource: Resource) -> bool {
        let Some(list) = self.list.as_mut() else {
            log::debug!("resources: replace of {} ignored, no list loaded", resource.id());
            return false;
        };
        match list.data.iter_mut().find(|r| r.id() == resource.id()) {
            Some(slot) => {
                *slot = resource;
                true
            }
            None => false,
        }
    }
}
