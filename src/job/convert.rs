//! Replaying a job against a [`Printer`].

use std::path::Path;

use log::debug;

use super::schema::{Instruction, Job};
use crate::error::EscposError;
use crate::printer::{Printer, PrinterProfile};
use crate::raster::ImageRaster;
use crate::transport::Sink;

impl Job {
    /// Parse a job from JSON text.
    pub fn from_json(json: &str) -> Result<Self, EscposError> {
        serde_json::from_str(json).map_err(|e| EscposError::Job(e.to_string()))
    }

    /// Read and parse a job file. Image paths resolve against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EscposError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let mut job: Self = serde_json::from_str(&json)
            .map_err(|e| EscposError::Job(format!("{}: {}", path.display(), e)))?;
        job.base_dir = path.parent().map(Path::to_path_buf);
        Ok(job)
    }

    /// Queue every instruction on `printer`.
    ///
    /// Stops at the first failing instruction; bytes queued by earlier
    /// instructions stay in the printer's buffer.
    pub fn apply<S: Sink + ?Sized>(
        &self,
        printer: &mut Printer<S>,
        profile: &PrinterProfile,
    ) -> Result<(), EscposError> {
        for instruction in &self.instructions {
            self.apply_one(printer, profile, instruction)?;
        }
        debug!(
            "queued {} instructions ({} bytes)",
            self.instructions.len(),
            printer.pending().len()
        );
        Ok(())
    }

    fn text_encoding<'a>(&'a self, explicit: &'a Option<String>) -> Option<&'a str> {
        explicit.as_deref().or(self.encoding.as_deref())
    }

    fn apply_one<S: Sink + ?Sized>(
        &self,
        printer: &mut Printer<S>,
        profile: &PrinterProfile,
        instruction: &Instruction,
    ) -> Result<(), EscposError> {
        match instruction {
            Instruction::Init => {
                printer.init();
            }
            Instruction::Feed { lines } => {
                printer.feed(*lines);
            }
            Instruction::Bold { on } => {
                printer.set_bold(*on);
            }
            Instruction::Inverse { on } => {
                printer.set_inverse(*on);
            }
            Instruction::Underline { mode } => {
                printer.set_underline(*mode);
            }
            Instruction::Justify { mode } => {
                printer.set_justification(*mode);
            }
            Instruction::Font { font } => {
                printer.set_font(*font);
            }
            Instruction::Cut { partial } => {
                printer.cut(*partial);
            }
            Instruction::OpenDrawer { pin } => {
                printer.open_drawer(*pin);
            }
            Instruction::Color { color } => {
                printer.set_color(*color);
            }
            Instruction::CodeTable { table } => {
                printer.set_code_table(*table);
            }
            Instruction::TextMode { mode } => {
                printer.set_text_mode(*mode);
            }
            Instruction::LineSpacing { spacing } => {
                printer.set_line_spacing(*spacing);
            }
            Instruction::Text { value, encoding: enc } => {
                printer.text(value, self.text_encoding(enc))?;
            }
            Instruction::Line { value, encoding: enc } => {
                printer.write_line(value, self.text_encoding(enc))?;
            }
            Instruction::Barcode {
                code,
                barcode_type,
                height,
                width,
                font,
                position,
            } => {
                printer.barcode(code, *barcode_type, *height, *width, *font, *position)?;
            }
            Instruction::Image {
                path,
                mode,
                dithering,
            } => {
                let path = match &self.base_dir {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path.clone(),
                };
                let image = ImageRaster::open(&path)?
                    .dithering(*dithering)
                    .max_width(profile.width_dots as u32);
                printer.raster(&image, *mode)?;
            }
            Instruction::ResetToDefault => {
                printer.reset_to_default();
            }
        }
        Ok(())
    }
}
