use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Names that lead the icon list, in display order.
pub const DEFAULT_PRIORITY: [&str; 8] = [
    "Typescript",
    "React",
    "Expo",
    "Javascript",
    "Nextjs",
    "Svelte",
    "SQL",
    "Python",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Icons", inline)]
#[serde(default)]
/// Icon discovery and ordering options.
pub struct IconOptions {
    /// Icon names shown first, in this order. Names with no matching icon
    /// are skipped.
    #[schemars(title = "Priority")]
    pub priority: Vec<String>,
    /// File extension scanned for when loading icons from a directory.
    #[schemars(skip)]
    pub extension: String,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            priority: DEFAULT_PRIORITY.iter().map(|&s| s.to_owned()).collect(),
            extension: "svg".to_owned(),
        }
    }
}
