// src/mock/routes.rs

/// An endpoint shape of the catalog service: its path and the query keys
/// it accepts. An empty key list means the endpoint takes no parameters.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub keys: &'static [&'static str],
}

pub const ROUTES: &[Route] = &[
    Route { path: "/", keys: &[] },
    Route { path: "/info/", keys: &["id"] },
    Route { path: "/track/", keys: &["id"] },
    Route { path: "/recommendations/", keys: &["id"] },
    Route { path: "/search/", keys: &["s", "a"] },
    Route { path: "/album/", keys: &["id"] },
    Route { path: "/album/similar/", keys: &["id"] },
    Route { path: "/artist/", keys: &["id", "f"] },
    Route { path: "/artist/similar/", keys: &["id"] },
    Route { path: "/cover/", keys: &["id", "q"] },
    Route { path: "/lyrics/", keys: &["id"] },
    Route { path: "/topvideos/", keys: &[] },
    Route { path: "/playlist/", keys: &["id"] },
    Route { path: "/mix/", keys: &["id"] },
    Route { path: "/video/", keys: &["id"] },
];

#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Found,
    MissingParam(&'static [&'static str]),
    NotFound,
}

pub fn resolve(path: &str, query: &[(String, String)]) -> Verdict {
    let Some(route) = ROUTES.iter().find(|r| r.path == path) else {
        return Verdict::NotFound;
    };

    let satisfied = route.keys.is_empty()
        || query
            .iter()
            .any(|(key, value)| !value.is_empty() && route.keys.contains(&key.as_str()));

    if satisfied {
        Verdict::Found
    } else {
        Verdict::MissingParam(route.keys)
    }
}
