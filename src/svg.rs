//! Rendering of ranked languages into the animated SVG card.
//!
//! The layout is fixed: a 400px wide canvas that grows by one 40px row per
//! language. Static chrome lives in `lang-stats.svg`; this module fills in the
//! dimensions, one gradient per language and one bar row per language.

use crate::colors::{colors_or_default, ColorPair};
use crate::encode::{create_encoder, Encoder, ImageFormat};
use crate::errors::Result;
use crate::stats::RankedLanguage;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 400;
/// Canvas height with no language rows.
pub const BASE_HEIGHT: u32 = 120;
/// Vertical pitch of one language row.
pub const ROW_HEIGHT: u32 = 40;
/// Width of a bar at 100%.
pub const BAR_MAX_WIDTH: u32 = 300;

const BARS_X: u32 = 30;
const BARS_Y: u32 = 60;
const PERCENT_X: u32 = 340;

/// Canvas height for `rows` languages.
pub fn canvas_height(rows: usize) -> u32 {
    let rows = u32::try_from(rows).unwrap_or(u32::MAX);
    BASE_HEIGHT.saturating_add(ROW_HEIGHT.saturating_mul(rows))
}

/// Filled bar width for a percentage, rounded and clamped to [`BAR_MAX_WIDTH`].
pub fn bar_width(percentage: f64) -> u32 {
    if !percentage.is_finite() {
        return 0;
    }
    (percentage.clamp(0.0, 100.0) / 100.0 * f64::from(BAR_MAX_WIDTH)).round() as u32
}

/// Gradient element id for a language, derived from its lowercase name.
///
/// Characters that are not valid in an id are replaced, so distinct names
/// can map to the same id (`Go` and `GO`). [`gradient_ids`] resolves that.
pub fn gradient_id(lang: &str) -> String {
    let mut id = String::with_capacity(lang.len() + 4);
    for c in lang.chars().flat_map(char::to_lowercase) {
        match c {
            'a'..='z' | '0'..='9' | '_' | '-' => id.push(c),
            '+' => id.push('p'),
            '#' => id.push_str("sharp"),
            _ => id.push('-'),
        }
    }

    if !id.starts_with(|c: char| c.is_ascii_lowercase()) {
        id.insert_str(0, "lang-");
    }
    id.push_str("Grad");
    id
}

/// One gradient id per row, unique within the document.
///
/// The first row with a given base id keeps it; later rows that collide get
/// `-2`, `-3`, ... appended in row order.
pub fn gradient_ids(languages: &[RankedLanguage]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    languages
        .iter()
        .map(|lang| {
            let base = gradient_id(&lang.name);
            let count = seen.entry(base.clone()).or_insert(0);
            *count += 1;
            if *count == 1 {
                base
            } else {
                format!("{}-{}", base, count)
            }
        })
        .collect()
}

/// Escapes text for use in element content and attribute values.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn gradient_def(id: &str, colors: ColorPair) -> String {
    format!(
        r#"
    <linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" stop-color="{primary}"/>
      <stop offset="100%" stop-color="{secondary}"/>
    </linearGradient>"#,
        id = id,
        primary = colors.primary,
        secondary = colors.secondary,
    )
}

fn bar_row(index: usize, lang: &RankedLanguage, gradient: &str) -> String {
    let y_offset = index as u64 * u64::from(ROW_HEIGHT);
    let grow_delay = 0.5 + index as f64 * 0.5;
    let breathing_delay = 2.5 + index as f64 * 0.5;

    format!(
        r##"
    <g transform="translate(0, {y_offset})">
      <text x="0" y="15" font-family="'Segoe UI', sans-serif" font-size="12" fill="#c9d1d9">{name}</text>
      <text x="{percent_x}" y="15" font-family="'Segoe UI', sans-serif" font-size="12" fill="#8b949e">{percentage:.1}%</text>
      <rect x="0" y="20" width="{max_width}" height="8" fill="#21262d" rx="4"/>
      <rect x="0" y="20" width="0" height="8" fill="url(#{gradient})" rx="4">
        <animate attributeName="width" values="0;{width}" dur="2s" begin="{grow_delay:.1}s" fill="freeze"/>
        <animate attributeName="opacity" values="0.6;1;0.6" dur="3s" begin="{breathing_delay:.1}s" repeatCount="indefinite"/>
      </rect>
    </g>"##,
        y_offset = y_offset,
        name = escape_xml(&lang.name),
        percent_x = PERCENT_X,
        percentage = lang.percentage,
        max_width = BAR_MAX_WIDTH,
        gradient = gradient,
        width = bar_width(lang.percentage),
        grow_delay = grow_delay,
        breathing_delay = breathing_delay,
    )
}

/// Renders the full SVG document for `languages`, in the given order.
#[instrument(skip(languages), fields(rows = languages.len()))]
pub fn render(languages: &[RankedLanguage]) -> String {
    let template = include_str!("../lang-stats.svg");
    let height = canvas_height(languages.len());
    let ids = gradient_ids(languages);

    let gradients: String = languages
        .iter()
        .zip(&ids)
        .map(|(lang, id)| gradient_def(id, colors_or_default(&lang.name)))
        .collect();

    let bars: String = languages
        .iter()
        .zip(&ids)
        .enumerate()
        .map(|(index, (lang, id))| bar_row(index, lang, id))
        .collect();

    template
        .replace("{{width}}", &CANVAS_WIDTH.to_string())
        .replace("{{height}}", &height.to_string())
        .replace("{{frame_width}}", &(CANVAS_WIDTH - 4).to_string())
        .replace("{{frame_height}}", &height.saturating_sub(4).to_string())
        .replace("{{center_x}}", &(CANVAS_WIDTH / 2).to_string())
        .replace("{{footer_y}}", &height.saturating_sub(20).to_string())
        .replace("{{bars_x}}", &BARS_X.to_string())
        .replace("{{bars_y}}", &BARS_Y.to_string())
        .replace("{{gradients}}", &gradients)
        .replace("{{bars}}", &bars)
}

/// Writes a rendered document to `path`, creating missing parent directories.
///
/// A `.png` extension rasterizes the document; anything else is written as
/// SVG text. Returns the format that was written.
///
/// # Errors
///
/// Returns an error if directories or the file cannot be created, or if
/// rasterization fails. An existing file is left untouched when encoding fails.
#[instrument(skip(svg))]
pub fn write_document(svg: &str, path: &Path) -> Result<ImageFormat> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(crate::raster::parse_extension)
        .unwrap_or(ImageFormat::Svg);

    // Encode fully before touching the file so a failed render keeps the old card
    let mut buffer: Vec<u8> = Vec::new();
    create_encoder(format).encode(svg, &mut buffer)?;
    fs::write(path, &buffer)?;

    debug!(format = format.extension(), "Document written");
    Ok(format)
}
