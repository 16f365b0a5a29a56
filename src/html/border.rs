//! Cell border composition.
//!
//! Each side becomes `border-<side> :<n>px solid <color>`; the four sides are
//! joined with `;` in top, left, right, bottom order.
use crate::common::unit::{BORDER_UNITS_PER_PX, write_px};
use crate::document::{BorderSide, CellBorders};

/// Color used when a side has no explicit color.
pub const DEFAULT_BORDER_COLOR: &str = "black";

/// CSS property name for one side.
#[inline]
pub fn css_property(side: BorderSide) -> &'static str {
    match side {
        BorderSide::Top => "border-top",
        BorderSide::Left => "border-left",
        BorderSide::Right => "border-right",
        BorderSide::Bottom => "border-bottom",
    }
}

/// Append `<n>px solid <color>` for one side.
pub fn write_side(out: &mut String, size: u32, color: Option<&str>) {
    write_px(out, size, BORDER_UNITS_PER_PX);
    out.push_str("px solid ");
    match color.map(|c| c.trim_start_matches('#')) {
        None | Some("") | Some("auto") => out.push_str(DEFAULT_BORDER_COLOR),
        Some(hex) => {
            out.push('#');
            out.push_str(&super::writer::escape_html(hex));
        },
    }
}

/// One side as a standalone value, e.g. `1.5px solid #FF0000`.
pub fn side_value(size: u32, color: Option<&str>) -> String {
    let mut out = String::with_capacity(24);
    write_side(&mut out, size, color);
    out
}

/// Append all four side declarations, or nothing when borders are disabled.
pub fn write_borders(out: &mut String, borders: &CellBorders, enabled: bool) {
    if !enabled {
        return;
    }
    for (i, side) in BorderSide::ALL.into_iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(css_property(side));
        out.push_str(" :");
        write_side(out, borders.size(side), borders.color(side));
    }
}
