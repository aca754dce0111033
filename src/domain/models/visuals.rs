#[cfg(test)]
#[path = "visuals_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

pub const ARCHITECTURE_TITLE: &str = "Architecture diagram";
pub const FLOWCHART_TITLE: &str = "Process flowchart";
pub const VISUALIZATION_TITLE: &str = "Visualization";

/// Diagram metadata attached to an assistant reply. Decoded once at the HTTP
/// boundary; the flags are trusted as given by the service and never derived
/// from URL presence.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visuals {
    pub visualization_url: Option<String>,
    pub architecture_url: Option<String>,
    pub flowchart_url: Option<String>,
    #[serde(default)]
    pub has_architecture: bool,
    #[serde(default)]
    pub has_flowchart: bool,
    #[serde(default)]
    pub has_both_diagrams: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualLink {
    pub title: &'static str,
    pub url: Option<String>,
}

impl VisualLink {
    fn new(title: &'static str, url: Option<String>) -> VisualLink {
        return VisualLink { title, url };
    }

    pub fn display(&self) -> String {
        if let Some(url) = &self.url {
            return format!("{}: {url}", self.title);
        }

        return format!("{}: URL not available", self.title);
    }
}

fn resolve(base_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }

    return format!("{base_url}{url}");
}

impl Visuals {
    /// Decides which diagram references accompany a reply. The flags are
    /// checked in a strict order and the first match wins. When both diagrams
    /// are promised, a slot missing its URL is kept as a placeholder rather
    /// than dropped so the other slot still lines up.
    pub fn links(&self, base_url: &str) -> Vec<VisualLink> {
        if self.has_both_diagrams {
            return vec![
                VisualLink::new(
                    ARCHITECTURE_TITLE,
                    self.architecture_url.as_deref().map(|url| {
                        return resolve(base_url, url);
                    }),
                ),
                VisualLink::new(
                    FLOWCHART_TITLE,
                    self.flowchart_url.as_deref().map(|url| {
                        return resolve(base_url, url);
                    }),
                ),
            ];
        }

        if self.has_architecture {
            if let Some(url) = &self.architecture_url {
                return vec![VisualLink::new(
                    ARCHITECTURE_TITLE,
                    Some(resolve(base_url, url)),
                )];
            }
            return vec![];
        }

        if self.has_flowchart {
            if let Some(url) = &self.flowchart_url {
                return vec![VisualLink::new(
                    FLOWCHART_TITLE,
                    Some(resolve(base_url, url)),
                )];
            }
            return vec![];
        }

        // Older service versions returned a single visualization_url.
        if let Some(url) = &self.visualization_url {
            return vec![VisualLink::new(
                VISUALIZATION_TITLE,
                Some(resolve(base_url, url)),
            )];
        }

        return vec![];
    }
}
