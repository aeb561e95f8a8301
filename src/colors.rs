//! Static language → gradient color lookup.

use phf::phf_map;

/// Gradient endpoints for one language bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub primary: &'static str,
    pub secondary: &'static str,
}

impl ColorPair {
    /// Used for any language missing from the table.
    pub const DEFAULT: ColorPair = ColorPair {
        primary: "#58a6ff",
        secondary: "#1f6feb",
    };
}

static COLORS: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "Python" => ("#3776ab", "#ffd43b"),
    "JavaScript" => ("#f7df1e", "#323330"),
    "TypeScript" => ("#3178c6", "#ffffff"),
    "Julia" => ("#9558b2", "#389826"),
    "Fortran" => ("#4d41b1", "#734f96"),
    "C++" => ("#00599c", "#004482"),
    "Java" => ("#ed8b00", "#5382a1"),
    "C" => ("#a8b9cc", "#283593"),
    "C#" => ("#178600", "#68217a"),
    "HTML" => ("#e34f26", "#f06529"),
    "CSS" => ("#1572b6", "#33a9dc"),
    "Shell" => ("#89e051", "#4eaa25"),
    "Go" => ("#00add8", "#7fd3ed"),
    "Rust" => ("#dea584", "#ce422b"),
    "PHP" => ("#777bb4", "#8892bf"),
    "Ruby" => ("#cc342d", "#701516"),
    "Swift" => ("#fa7343", "#ffac45"),
    "Kotlin" => ("#7f52ff", "#a97bff"),
    "Dart" => ("#00b4ab", "#01579b"),
    "Jupyter Notebook" => ("#da5b0b", "#f37626"),
    "Lua" => ("#000080", "#2c2d72"),
    "Vue" => ("#41b883", "#35495e"),
    "Haskell" => ("#5e5086", "#8f4e8b"),
    "Scala" => ("#c22d40", "#dc322f"),
    "R" => ("#198ce7", "#276dc3"),
    "Dockerfile" => ("#384d54", "#2496ed"),
    "Makefile" => ("#427819", "#6d8f3c"),
    "CMake" => ("#da3434", "#064f8c"),
};

/// Looks up the color pair for `lang` (exact, case-sensitive match).
pub fn get_colors(lang: &str) -> Option<ColorPair> {
    COLORS.get(lang).map(|&(primary, secondary)| ColorPair { primary, secondary })
}

/// Like [`get_colors`], falling back to [`ColorPair::DEFAULT`].
pub fn colors_or_default(lang: &str) -> ColorPair {
    get_colors(lang).unwrap_or(ColorPair::DEFAULT)
}

/// Number of languages with a dedicated color pair.
pub fn count_languages() -> usize {
    COLORS.len()
}
