use serde::{Deserialize, Serialize};

/// Hypermedia link attached to an envelope or to an error detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: Option<String>,
    pub href: String,
    pub method: String,
    pub rel: String,
}

impl Link {
    /// Link with the default method (`POST`) and relation (`self`)
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            title: None,
            href: href.into(),
            method: DEFAULT_METHOD.to_string(),
            rel: HypermediaRelation::REL_SELF.to_string(),
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = rel.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

pub const DEFAULT_METHOD: &str = "POST";

/// Build a link echoing every argument as-is.
///
/// Neither `href` nor `method` is checked, and `rel` is not restricted to the
/// [`HypermediaRelation`] vocabulary.
pub fn make_link(href: &str, method: &str, rel: &str, title: Option<&str>) -> Link {
    Link {
        title: title.map(str::to_string),
        href: href.to_string(),
        method: method.to_string(),
        rel: rel.to_string(),
    }
}

/// Link relation types understood by API consumers
pub struct HypermediaRelation;

impl HypermediaRelation {
    /// Identifier for the link's context, usually the resource itself.
    pub const REL_SELF: &'static str = "self";

    /// A link that can be used to create a new resource.
    pub const REL_CREATE: &'static str = "create";

    /// Partial update of the linked representation (PATCH).
    pub const REL_EDIT: &'static str = "edit";

    /// Deletion of the linked resource (DELETE).
    pub const REL_DELETE: &'static str = "delete";

    /// Full replacement of the linked representation (PUT).
    pub const REL_REPLACE: &'static str = "replace";

    /// First page of a result list.
    pub const REL_FIRST: &'static str = "first";

    /// Last page of a result list.
    pub const REL_LAST: &'static str = "last";

    /// Next page of a result list.
    pub const REL_NEXT: &'static str = "next";

    /// Previous page of a result list.
    pub const REL_PREVIOUS: &'static str = "prev";

    /// A collection resource, e.g. `/v1/users`.
    pub const REL_COLLECTION: &'static str = "collection";

    /// A resource holding the latest version.
    pub const REL_LATEST_VERSION: &'static str = "latest-version";

    /// A resource to search through the link's context.
    pub const REL_SEARCH: &'static str = "search";

    /// Parent resource in a hierarchy.
    pub const REL_UP: &'static str = "up";

    pub const ALL: [&'static str; 13] = [
        Self::REL_SELF,
        Self::REL_CREATE,
        Self::REL_EDIT,
        Self::REL_DELETE,
        Self::REL_REPLACE,
        Self::REL_FIRST,
        Self::REL_LAST,
        Self::REL_NEXT,
        Self::REL_PREVIOUS,
        Self::REL_COLLECTION,
        Self::REL_LATEST_VERSION,
        Self::REL_SEARCH,
        Self::REL_UP,
    ];

    /// Whether `rel` belongs to the known vocabulary
    pub fn is_known(rel: &str) -> bool {
        Self::ALL.contains(&rel)
    }
}
