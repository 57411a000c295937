//! PDF backend: translates laid-out draw commands into PDF bytes through
//! printpdf's builtin Helvetica faces.

use std::io::BufWriter;

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;

use crate::error::ExportError;
use crate::layout::text_width_mm;
use crate::ops::{Align, Document, DrawOp, FontFace, Rgb8};
use crate::styles::ReportStyles;

/// DPI under which embedded images are registered before scaling to their
/// target box.
const IMAGE_DPI: f32 = 300.0;

pub fn document_to_pdf(
    document: &Document,
    title: &str,
    styles: &ReportStyles,
) -> Result<Vec<u8>, ExportError> {
    let (pdf, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(styles.page_width),
        Mm(styles.page_height),
        "contenido",
    );
    let regular = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = pdf
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut handles = vec![(first_page, first_layer)];
    for _ in 1..document.pages.len() {
        handles.push(pdf.add_page(Mm(styles.page_width), Mm(styles.page_height), "contenido"));
    }

    for (page, (page_index, layer_index)) in document.pages.iter().zip(handles) {
        let layer = pdf.get_page(page_index).get_layer(layer_index);
        for op in &page.ops {
            paint(&layer, op, &regular, &bold, styles)?;
        }
    }

    let mut writer = BufWriter::new(Vec::new());
    pdf.save(&mut writer)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

fn paint(
    layer: &PdfLayerReference,
    op: &DrawOp,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
    styles: &ReportStyles,
) -> Result<(), ExportError> {
    let page_height = styles.page_height;
    match op {
        DrawOp::Rect { x, y, w, h, color } => {
            layer.set_fill_color(fill(*color));
            let shape = Rect::new(
                Mm(*x),
                Mm(page_height - y - h),
                Mm(x + w),
                Mm(page_height - y),
            )
            .with_mode(PaintMode::Fill);
            layer.add_rect(shape);
        }
        DrawOp::Text {
            text,
            x,
            y,
            size,
            face,
            color,
            align,
        } => {
            layer.set_fill_color(fill(*color));
            let x = match align {
                Align::Left => *x,
                Align::Center => x - text_width_mm(text, *size) / 2.0,
                Align::Right => x - text_width_mm(text, *size),
            };
            layer.use_text(
                text.clone(),
                *size,
                Mm(x),
                Mm(page_height - y),
                font_for(*face, regular, bold),
            );
        }
        DrawOp::Lines {
            lines,
            x,
            y,
            size,
            face,
            color,
            leading,
        } => {
            layer.set_fill_color(fill(*color));
            let font = font_for(*face, regular, bold);
            for (i, line) in lines.iter().enumerate() {
                layer.use_text(
                    line.clone(),
                    *size,
                    Mm(*x),
                    Mm(page_height - (y + leading * i as f32)),
                    font,
                );
            }
        }
        DrawOp::Rule {
            x1,
            x2,
            y,
            color,
            thickness,
        } => {
            layer.set_outline_color(fill(*color));
            layer.set_outline_thickness(*thickness);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(*x1), Mm(page_height - y)), false),
                    (Point::new(Mm(*x2), Mm(page_height - y)), false),
                ],
                is_closed: false,
            });
        }
        DrawOp::Disc { cx, cy, r, color } => {
            layer.set_fill_color(fill(*color));
            let ring = utils::calculate_points_for_circle(Mm(*r), Mm(*cx), Mm(page_height - cy));
            layer.add_polygon(Polygon {
                rings: vec![ring],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            });
        }
        DrawOp::Image { png, x, y, w, h } => {
            embed_png(layer, png, *x, *y, *w, *h, page_height)?;
        }
    }
    Ok(())
}

fn embed_png(
    layer: &PdfLayerReference,
    png: &[u8],
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    page_height: f32,
) -> Result<(), ExportError> {
    use printpdf::image_crate::GenericImageView;

    let decoded =
        image_crate::load_from_memory(png).map_err(|e| ExportError::Image(e.to_string()))?;
    let (px_w, px_h) = decoded.dimensions();
    let native_w = px_w as f32 * 25.4 / IMAGE_DPI;
    let native_h = px_h as f32 * 25.4 / IMAGE_DPI;

    let image = Image::from_dynamic_image(&decoded);
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(page_height - y - h)),
            scale_x: Some(w / native_w),
            scale_y: Some(h / native_h),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    );
    Ok(())
}

fn fill(color: Rgb8) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(color.0) / 255.0,
        f32::from(color.1) / 255.0,
        f32::from(color.2) / 255.0,
        None,
    ))
}

fn font_for<'f>(
    face: FontFace,
    regular: &'f IndirectFontRef,
    bold: &'f IndirectFontRef,
) -> &'f IndirectFontRef {
    match face {
        FontFace::Regular => regular,
        FontFace::Bold => bold,
    }
}
