//! printpdf backend: replays a laid-out [`Document`] into a PDF file.
//!
//! The engine works in top-down millimeter coordinates; this module flips y
//! to PDF's bottom-up axis and maps draw commands onto printpdf primitives.
//! No layout decisions happen here.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use printpdf::image_crate::codecs::jpeg::JpegDecoder as PrintPdfJpegDecoder;
use printpdf::image_crate::codecs::png::PngDecoder as PrintPdfPngDecoder;
use printpdf::image_crate::{guess_format, ImageFormat};
use printpdf::path::PaintMode;
use printpdf::*;
use std::io::Cursor;
use std::{fs::File, io::BufWriter};

use crate::assemble::Document;
use crate::blocks::{DrawCommand, FontStyle};

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
        }
    }
}

/// Renders the document and writes it to `pdf_path`.
pub fn render_to_file(document: &Document, pdf_path: &str) -> Result<()> {
    debug!("Starting PDF rendering");
    let width = document.config.page_width;
    let height = document.config.page_height;
    let (doc, page1, layer1) = PdfDocument::new("Resume", Mm(width), Mm(height), "Layer 1");

    debug!("Adding built-in fonts");
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
    };

    debug!("Rendering {} page(s)", document.pages.len());
    for (index, page) in document.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(page1).get_layer(layer1)
        } else {
            let (page_ref, layer_ref) = doc.add_page(Mm(width), Mm(height), "Layer 1");
            doc.get_page(page_ref).get_layer(layer_ref)
        };
        for command in page {
            draw_command(&layer, command, &fonts, height);
        }
    }

    debug!("Saving PDF to {}", pdf_path);
    doc.save(&mut BufWriter::new(File::create(pdf_path)?))
        .with_context(|| format!("Failed to save PDF file: {}", pdf_path))?;

    let pdf_size = std::fs::metadata(pdf_path)?.len();
    info!("PDF saved successfully. File size: {} bytes", pdf_size);

    Ok(())
}

fn pdf_color(color: crate::blocks::Color) -> Color {
    Color::Rgb(Rgb::new(color.r, color.g, color.b, None))
}

fn draw_command(layer: &PdfLayerReference, command: &DrawCommand, fonts: &Fonts, page_height: f32) {
    match command {
        DrawCommand::Text {
            text,
            x,
            y,
            size,
            style,
            color,
        } => {
            layer.set_fill_color(pdf_color(*color));
            layer.use_text(text.clone(), *size, Mm(*x), Mm(page_height - y), fonts.get(*style));
        }
        DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        } => {
            layer.set_outline_color(pdf_color(*color));
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(*x1), Mm(page_height - y1)), false),
                    (Point::new(Mm(*x2), Mm(page_height - y2)), false),
                ],
                is_closed: false,
            });
        }
        DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        } => {
            layer.set_fill_color(pdf_color(*color));
            let rect = Rect::new(
                Mm(*x),
                Mm(page_height - y - height),
                Mm(x + width),
                Mm(page_height - y),
            )
            .with_mode(PaintMode::Fill);
            layer.add_rect(rect);
        }
        DrawCommand::Image {
            data,
            x,
            y,
            width,
            height,
        } => {
            // A broken photo must not abort the whole document.
            if let Err(e) = draw_image(layer, data, *x, *y, *width, *height, page_height) {
                warn!("Skipping photo: {:?}", e);
            }
        }
    }
}

/// Embeds the photo scaled to fit the target box, aspect ratio preserved.
fn draw_image(
    layer: &PdfLayerReference,
    data: &[u8],
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    page_height: f32,
) -> Result<()> {
    let mut reader = Cursor::new(data);

    let image = match guess_format(data)? {
        ImageFormat::Png => Image::try_from(PrintPdfPngDecoder::new(&mut reader)?)
            .context("Failed to convert PNG photo for embedding")?,
        ImageFormat::Jpeg => Image::try_from(PrintPdfJpegDecoder::new(&mut reader)?)
            .context("Failed to convert JPEG photo for embedding")?,
        other => return Err(anyhow::anyhow!("Unsupported photo format: {:?}", other)),
    };

    let native_width = Mm::from(image.image.width.into_pt(300.0)).0;
    let native_height = Mm::from(image.image.height.into_pt(300.0)).0;
    if native_width <= 0.0 || native_height <= 0.0 {
        return Err(anyhow::anyhow!("Photo has no printable size"));
    }

    let scale = (width / native_width).min(height / native_height);
    let scaled_width = native_width * scale;
    let scaled_height = native_height * scale;
    debug!("Photo scale factor: {}", scale);

    // Center inside the reserved square; printpdf anchors at the lower left.
    let offset_x = x + (width - scaled_width) / 2.0;
    let offset_y = page_height - y - scaled_height;

    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(offset_x)),
            translate_y: Some(Mm(offset_y)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(300.0),
            ..Default::default()
        },
    );

    Ok(())
}
