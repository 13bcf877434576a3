//! JSON schema types for print jobs.

use std::path::PathBuf;

use serde::Deserialize;

use crate::protocol::barcode::{BarcodeType, Position};
use crate::protocol::commands::DrawerPin;
use crate::protocol::graphics::RasterMode;
use crate::protocol::text::{CodeTable, Color, Font, Justification, TextMode, Underline};
use crate::raster::Dithering;

fn default_barcode_height() -> u8 {
    80
}

fn default_barcode_width() -> u8 {
    2
}

/// Top-level JSON job.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    /// Encoding for text instructions that do not name one.
    #[serde(default)]
    pub encoding: Option<String>,
    /// Instructions, replayed in order.
    pub instructions: Vec<Instruction>,
    /// Directory image paths are relative to (set when loaded from a file).
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// One printer operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    Init,
    Feed {
        lines: u8,
    },
    Bold {
        on: bool,
    },
    Inverse {
        on: bool,
    },
    Underline {
        mode: Underline,
    },
    Justify {
        mode: Justification,
    },
    Font {
        font: Font,
    },
    Cut {
        #[serde(default)]
        partial: bool,
    },
    OpenDrawer {
        #[serde(default)]
        pin: DrawerPin,
    },
    Color {
        color: Color,
    },
    CodeTable {
        table: CodeTable,
    },
    TextMode {
        mode: TextMode,
    },
    /// `null` or missing spacing restores the default.
    LineSpacing {
        #[serde(default)]
        spacing: Option<u8>,
    },
    Text {
        value: String,
        #[serde(default)]
        encoding: Option<String>,
    },
    Line {
        value: String,
        #[serde(default)]
        encoding: Option<String>,
    },
    Barcode {
        code: String,
        #[serde(rename = "type")]
        barcode_type: BarcodeType,
        #[serde(default = "default_barcode_height")]
        height: u8,
        #[serde(default = "default_barcode_width")]
        width: u8,
        #[serde(default)]
        font: Font,
        #[serde(default)]
        position: Position,
    },
    Image {
        path: PathBuf,
        #[serde(default)]
        mode: RasterMode,
        #[serde(default)]
        dithering: Dithering,
    },
    ResetToDefault,
}
