use std::collections::BTreeMap;

/// One entry of a child route module, e.g. `:id/edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRoute {
    pub path: String,
    pub view: String,
    pub default_sort: Option<String>,
    pub authenticated: bool,
}

impl ChildRoute {
    pub fn new(path: &str, view: &str) -> Self {
        Self {
            path: path.to_string(),
            view: view.to_string(),
            default_sort: None,
            authenticated: false,
        }
    }

    pub fn default_sort(mut self, sort: &str) -> Self {
        self.default_sort = Some(sort.to_string());
        self
    }

    pub fn authenticated(mut self) -> Self {
        self.authenticated = true;
        self
    }

    /// Matches `rest` segment by segment; `:name` segments capture a parameter.
    fn matches(&self, rest: &[&str]) -> Option<BTreeMap<String, String>> {
        let pattern: Vec<&str> = split_segments(&self.path);
        if pattern.len() != rest.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (expected, actual) in pattern.iter().zip(rest) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    params.insert(name.to_string(), actual.to_string());
                }
                None if expected == actual => {}
                None => return None,
            }
        }

        Some(params)
    }
}

/// The routes a lazily loaded entity module contributes below its table entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteModule {
    routes: Vec<ChildRoute>,
}

impl RouteModule {
    pub fn new(routes: Vec<ChildRoute>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[ChildRoute] {
        &self.routes
    }

    /// First child route, in declaration order, matching `rest`.
    pub fn match_path(&self, rest: &str) -> Option<(&ChildRoute, BTreeMap<String, String>)> {
        let segments = split_segments(rest);
        self.routes
            .iter()
            .find_map(|route| route.matches(&segments).map(|params| (route, params)))
    }
}

pub(crate) fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
