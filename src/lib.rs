//! chart_palette
//!
//! Presentation helpers for topic-explorer charts. Pairs with the
//! `chart-palette` CLI.
//!
//! ### Features
//! - Deterministic country colors: fixed colors for known countries, a hashed
//!   fallback palette for everything else
//! - Black/white text choice from the background's relative luminance
//! - Chart configuration (labels, icons, per-theme colors) and tooltip lookups
//! - Export of topic-modelled documents to the static JSON the charts load
//! - SVG swatch sheets, CSV/JSON swatch tables
//!
//! ### Example
//! ```
//! use chart_palette::{country_color, text_color_for_bg};
//!
//! let bg = country_color(Some("Benin"));
//! assert_eq!(bg, "#22c55e");
//! assert_eq!(text_color_for_bg(bg), "#ffffff");
//! assert_eq!(text_color_for_bg("#fff"), "#000000");
//! ```

pub mod chart;
pub mod contrast;
pub mod hash;
pub mod models;
pub mod palette;
pub mod storage;
pub mod topics;
pub mod viz;

pub use chart::{ChartConfig, ChartContext, ItemConfig, TooltipPayload};
pub use contrast::{Rgb8, text_color_for_bg};
pub use palette::{Swatch, country_color};
