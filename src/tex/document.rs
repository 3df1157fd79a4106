//! Sections and the full document

use crate::config::ReportConfig;
use crate::layout::CategoryLayout;
use crate::tex::block::render_block;

/// Closing marker of every report
pub const END_DOCUMENT: &str = "\\end{document}";

/// Render a category as a section followed by its blocks
pub fn render_section(layout: &CategoryLayout, config: &ReportConfig) -> String {
    let mut tex = format!("\\section{{{}}}\n", layout.title);
    for block in &layout.blocks {
        tex.push_str(&render_block(block, config));
    }
    tex
}

/// Document preamble through the table of contents
///
/// Sets up the page geometry and Arabic font, a plain page style with the
/// logo in the header, and a title page showing the date between the two
/// cover images.
pub fn preamble(config: &ReportConfig, formatted_date: &str) -> String {
    format!(
        r#"
\documentclass{{article}}
\usepackage[a4paper,margin=2cm,top=2cm]{{geometry}}
\usepackage{{graphicx}}
\usepackage{{float}}
\usepackage{{fancyhdr}}
\usepackage{{fontspec}}
\usepackage{{arabxetex}}
\setmainfont[Script=Arabic]{{{font}}}

\begin{{document}}
\setRL
\renewcommand{{\figurename}}{{{figure}}}

\fancypagestyle{{plain}}{{%
    \fancyhf{{}}
    \fancyhead[L]{{\hspace{{-2cm}}\includegraphics[width=0.25\textwidth]{{{logo}}}}}
    \renewcommand{{\headrulewidth}}{{0pt}}
}}
\pagestyle{{plain}}

\begin{{titlepage}}
    \centering
    \includegraphics[width=1 \textwidth]{{{logo}}}

    \vspace{{1cm}}
    {{\Huge \textbf{{{title}}}}}

    \vspace{{0.5cm}}
    {{\Large {label}}}
    {{\Large {date}}}

    \vspace{{1cm}}
    \includegraphics[width=\textwidth]{{{cover}}}
\end{{titlepage}}
\newpage
\renewcommand{{\contentsname}}{{{contents}}}
\newpage
\tableofcontents
\newpage
"#,
        font = config.font,
        figure = config.figure_name,
        logo = config.logo_image,
        title = config.document_title,
        label = config.date_label,
        date = formatted_date,
        cover = config.cover_image,
        contents = config.contents_title,
    )
}

/// Join the preamble and rendered sections into a complete document
pub fn assemble<I, S>(preamble: &str, sections: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tex = String::from(preamble);
    for section in sections {
        tex.push_str(section.as_ref());
    }
    tex.push_str(END_DOCUMENT);
    tex
}
