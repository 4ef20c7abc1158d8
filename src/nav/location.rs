use reqwest::Url;

/// A place the user can navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Landing view with the popular categories
    Home,
    /// Results for a submitted query (`/?q=<query>`)
    Search { query: String },
    /// A single section (`/section/<id>`)
    Section { id: String },
}

impl Location {
    /// Absolute address of this location under `base`.
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);

        match self {
            Location::Home => {}
            Location::Search { query } => {
                url.query_pairs_mut().append_pair("q", query);
            }
            Location::Section { id } => {
                if let Ok(mut path) = url.path_segments_mut() {
                    path.pop_if_empty().push("section").push(id);
                }
            }
        }
        url
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            Location::Search { query } => Some(query),
            _ => None,
        }
    }
}
