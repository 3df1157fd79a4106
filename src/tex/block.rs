//! Figure markup for one image block
//!
//! All four grid templates go through the same renderer: a template is a
//! list of rows, a row is a list of slot widths. Slots in a row are pushed
//! apart with `\hfill`, rows are separated by a vertical gap.

use crate::config::ReportConfig;
use crate::layout::{Block, Length};

const INDENT: &str = "    ";

/// Render a block as a `figure` environment
pub fn render_block(block: &Block, config: &ReportConfig) -> String {
    let mut images = block.images.iter();
    let rows: Vec<String> = block
        .template
        .rows()
        .iter()
        .map(|widths| {
            let slots: Vec<String> = widths
                .iter()
                .zip(images.by_ref())
                .map(|(width, image)| slot(*width, config.image_height, image))
                .collect();
            slots.join(format!("{}\\hfill\n", INDENT).as_str())
        })
        .collect();

    let mut tex = String::new();
    tex.push_str("\\begin{figure}[H]\n");
    tex.push_str(&format!("{}\\centering\n", INDENT));
    tex.push_str(&rows.join(format!("{}\\vspace{{{}cm}}\n\n", INDENT, config.row_gap.cm()).as_str()));
    tex.push_str(&format!(
        "{}\\caption{{{} {}}}\n",
        INDENT, config.caption_prefix, block.caption
    ));
    tex.push_str("\\end{figure}\n\n");
    tex
}

/// One minipage holding one image
fn slot(width: f64, height: Length, image: &str) -> String {
    format!(
        "{i}\\begin{{minipage}}{{{w}\\textwidth}}\n\
         {i}{i}\\centering\n\
         {i}{i}\\includegraphics[height={h}cm,width=\\textwidth]{{{img}}}\n\
         {i}\\end{{minipage}}\n",
        i = INDENT,
        w = width,
        h = height.cm(),
        img = image,
    )
}
