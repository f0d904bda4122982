use serde::Serialize;

use crate::tabular::address::CellAddress;

const HEADER_FONT: &str = "FFFFFF";
const HEADER_FILL: &str = "366092";
const HEADER_BORDER: &str = "000000";
const DATA_BORDER: &str = "CCCCCC";
const ZEBRA_FILL: &str = "F8F9FA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Center,
}

/// Thin border on all four sides in one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Border {
    pub color: &'static str,
}

/// Presentation of one cell. Never stored; always derived from the cell's
/// position by [`style_for`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellStyle {
    pub bold: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<&'static str>,
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
    pub wrap_text: bool,
    pub border: Border,
}

/// Style of the cell at `address`; row 0 is the header row.
///
/// Data rows alternate, starting with the shaded one.
pub fn style_for(address: CellAddress) -> CellStyle {
    if address.row == 0 {
        return CellStyle {
            bold: true,
            font_color: Some(HEADER_FONT),
            fill: Some(HEADER_FILL),
            horizontal: HorizontalAlign::Center,
            vertical: VerticalAlign::Center,
            wrap_text: false,
            border: Border {
                color: HEADER_BORDER,
            },
        };
    }

    let data_index = address.row - 1;
    CellStyle {
        bold: false,
        font_color: None,
        fill: (data_index % 2 == 0).then_some(ZEBRA_FILL),
        horizontal: HorizontalAlign::Left,
        vertical: VerticalAlign::Top,
        wrap_text: true,
        border: Border { color: DATA_BORDER },
    }
}
