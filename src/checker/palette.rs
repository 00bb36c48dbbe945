use indexmap::IndexMap;

/// Catppuccin Mocha RGB triples expected in script color definitions.
const DEFAULT_COLORS: [(&str, &str); 7] = [
    ("RED", "243;139;168"),
    ("GREEN", "166;227;161"),
    ("YELLOW", "249;226;175"),
    ("BLUE", "137;180;250"),
    ("MAUVE", "203;166;247"),
    ("SAPPHIRE", "116;199;236"),
    ("TEXT", "205;214;244"),
];

/// Reference table of color variable names and their expected codes.
///
/// Built once before analysis and shared read-only across worker threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: IndexMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS
                .iter()
                .map(|(name, code)| ((*name).to_string(), (*code).to_string()))
                .collect(),
        }
    }
}

impl Palette {
    /// Palette from an explicit table; an empty table means the default.
    #[must_use]
    pub fn from_map(colors: &IndexMap<String, String>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self {
            colors: colors.clone(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn expected(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
