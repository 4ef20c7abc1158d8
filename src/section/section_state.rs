use crate::api::{ApiError, SectionPage};
use crate::scroll::ScrollState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionView {
    Loading,
    Loaded(SectionPage),
    NotFound,
    Unavailable,
}

/// One opened section and the request that fills it
#[derive(Debug)]
pub struct SectionState {
    id: String,
    view: SectionView,
    request_id: u64,
    pub scroll: ScrollState,
}

impl SectionState {
    pub fn loading(id: impl Into<String>, request_id: u64) -> Self {
        Self {
            id: id.into(),
            view: SectionView::Loading,
            request_id,
            scroll: ScrollState::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn view(&self) -> &SectionView {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.view == SectionView::Loading
    }

    /// Apply the page answer; answers for other requests are ignored.
    pub fn finish(
        &mut self,
        request_id: u64,
        result: Result<Option<SectionPage>, ApiError>,
    ) -> bool {
        if request_id != self.request_id {
            log::debug!(
                "Dropping stale section response {} (waiting for {})",
                request_id,
                self.request_id
            );
            return false;
        }

        self.view = match result {
            Ok(Some(page)) => SectionView::Loaded(page),
            Ok(None) => SectionView::NotFound,
            Err(_) => SectionView::Unavailable,
        };
        self.scroll.reset();
        true
    }
}
