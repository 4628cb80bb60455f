use crate::composition::{ColorAssignment, Composition};
use crate::report::ReportData;
use std::fmt::Write;

const STYLE: &str = "
body { font-family: -apple-system, 'Segoe UI', 'Roboto', 'Helvetica Neue', sans-serif; font-size: 80%; }
h2 { padding-left: 10px; }
h4 { margin-bottom: 0; }
.Overview { display: flex; gap: 40px; padding-left: 20px; }
.AlgoDescription { display: block; width: 500px; font-weight: lighter; }
.OverviewImg { height: 250px; }
table { border-collapse: collapse; margin: 20px 0 20px 40px; }
th, td { border-right: 1px solid #dddddd; padding: 4px 8px; text-align: center; font-size: small; }
.Label { text-align: left; }
.Swatch { display: inline-block; width: 10px; height: 10px; margin-right: 6px; }
.Diagonal { font-weight: bold; }
";

/// Renders a complete HTML document for `data`.
pub(super) fn render(data: &ReportData) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail
    let _ = write_document(&mut out, data);
    out
}

fn write_document(out: &mut String, data: &ReportData) -> std::fmt::Result {
    let meta = &data.metadata;
    writeln!(out, "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{}</title>", escape(&meta.model_name))?;
    writeln!(out, "<style>{STYLE}</style>\n</head>\n<body>")?;
    writeln!(out, "<h1>Model Performance</h1>")?;

    writeln!(out, "<div class=\"Header\">")?;
    header_line(out, "Model Name", &meta.model_name)?;
    header_line(out, "Test Date", &data.date)?;
    header_line(out, "Creator", &meta.creator)?;
    if let Some(v) = &meta.dataset_version {
        header_line(out, "Dataset Version", v)?;
    }
    if let Some(id) = &meta.build_id {
        header_line(out, "Build", id)?;
    }
    writeln!(out, "</div>")?;

    writeln!(out, "<h2>Overview</h2>\n<div class=\"Overview\">\n<div>")?;
    writeln!(out, "<h4>ML Principle:</h4>\n<p>{}</p>", escape(&meta.ml_principle))?;
    writeln!(out, "<h4>References:</h4>\n<ul>")?;
    for r in &meta.references {
        writeln!(
            out,
            "<li><a href=\"{}\">{}</a></li>",
            escape(&r.url),
            escape(&r.name)
        )?;
    }
    writeln!(out, "</ul>\n</div>")?;
    writeln!(
        out,
        "<div>\n<h4>Algorithm Description:</h4>\n<span class=\"AlgoDescription\">{}</span>\n</div>",
        escape(&meta.algorithm_description)
    )?;
    if let Some(graphic) = &meta.description_graphic {
        writeln!(
            out,
            "<div>\n<img class=\"OverviewImg\" src=\"{}\" alt=\"Overview Image\">\n<h6>{}</h6>\n</div>",
            escape(&graphic.to_string_lossy()),
            escape(&meta.graphic_description)
        )?;
    }
    writeln!(out, "</div>\n<hr>")?;

    writeln!(out, "<h2>Metrics</h2>")?;
    composition_table(out, "Training Dataset", &data.training, &data.colors)?;
    composition_table(out, "Test Dataset", &data.test, &data.colors)?;
    performance_table(out, data)?;
    confusion_tables(out, data)?;
    split_table(out, data)?;

    writeln!(out, "</body>\n</html>")
}

fn header_line(out: &mut String, title: &str, value: &str) -> std::fmt::Result {
    writeln!(
        out,
        "<div><label class=\"TitleWithText\"><b>{title}:</b></label> <label>{}</label></div>",
        escape(value)
    )
}

fn composition_table(
    out: &mut String,
    title: &str,
    composition: &Composition,
    colors: &ColorAssignment,
) -> std::fmt::Result {
    writeln!(out, "<h4>{title}</h4>")?;
    if composition.is_empty() {
        return writeln!(out, "<p>No samples.</p>");
    }
    writeln!(
        out,
        "<p>Mean over {} split(s).</p>\n<table>\n<tr><th class=\"Label\">Classes</th><th>Number of samples</th><th>Share</th></tr>",
        composition.batches
    )?;
    for class in &composition.classes {
        let color = colors.color_of(&class.label).unwrap_or("#000000");
        writeln!(
            out,
            "<tr><td class=\"Label\"><span class=\"Swatch\" style=\"background:{color}\"></span>{}</td><td>{:.1}</td><td>{:.1}%</td></tr>",
            escape(&class.label),
            class.mean_count,
            class.share
        )?;
    }
    writeln!(out, "</table>")
}

fn performance_table(out: &mut String, data: &ReportData) -> std::fmt::Result {
    let stats = &data.statistics;
    writeln!(out, "<hr>\n<h4>Classification Performance</h4>")?;
    writeln!(
        out,
        "<table>\n<tr><th class=\"Label\">Classes</th><th>Precision</th><th>Recall</th><th>F1 Score</th><th>N</th></tr>"
    )?;
    for (label, s) in stats.iter() {
        writeln!(
            out,
            "<tr><td class=\"Label\">{}</td><td>{:.2}%</td><td>{:.2}%</td><td>{:.2}%</td><td>{}</td></tr>",
            escape(label),
            s.precision * 100.0,
            s.recall * 100.0,
            s.f_score * 100.0,
            s.support
        )?;
    }
    let agg = &stats.aggregate;
    for (name, avg) in [
        ("Macro average", &agg.macro_average),
        ("Weighted average", &agg.weighted_average),
    ] {
        writeln!(
            out,
            "<tr><td class=\"Label\"><b>{name}</b></td><td>{:.2}%</td><td>{:.2}%</td><td>{:.2}%</td><td>{}</td></tr>",
            avg.precision * 100.0,
            avg.recall * 100.0,
            avg.f_score * 100.0,
            data.total_count
        )?;
    }
    writeln!(
        out,
        "<tr><td class=\"Label\"><b>Accuracy</b></td><td></td><td></td><td>{:.2}%</td><td>{}</td></tr>\n</table>",
        agg.accuracy * 100.0,
        data.total_count
    )
}

fn confusion_tables(out: &mut String, data: &ReportData) -> std::fmt::Result {
    let labels = data.confusion_matrix.labels();

    let write_header = |out: &mut String| -> std::fmt::Result {
        write!(out, "<table>\n<tr><th class=\"Label\"></th>")?;
        for l in labels.iter() {
            write!(out, "<th>{} (pred)</th>", escape(l))?;
        }
        writeln!(out, "</tr>")
    };

    writeln!(out, "<h4>Confusion Matrix</h4>")?;
    write_header(out)?;
    for (r, row) in data.confusion_matrix.rows().iter().enumerate() {
        write!(out, "<tr><td class=\"Label\">{} (act)</td>", escape(labels.get(r).unwrap_or("")))?;
        for (c, v) in row.iter().enumerate() {
            cell(out, r == c, &v.to_string())?;
        }
        writeln!(out, "</tr>")?;
    }
    writeln!(out, "</table>")?;

    writeln!(out, "<h4>Confusion Matrix (row-normalized)</h4>")?;
    write_header(out)?;
    for (r, row) in data.normalized_confusion_matrix.iter().enumerate() {
        write!(out, "<tr><td class=\"Label\">{} (act)</td>", escape(labels.get(r).unwrap_or("")))?;
        for (c, v) in row.iter().enumerate() {
            cell(out, r == c, &format!("{v:.1}%"))?;
        }
        writeln!(out, "</tr>")?;
    }
    writeln!(out, "</table>")
}

fn cell(out: &mut String, diagonal: bool, text: &str) -> std::fmt::Result {
    if diagonal {
        write!(out, "<td class=\"Diagonal\">{text}</td>")
    } else {
        write!(out, "<td>{text}</td>")
    }
}

fn split_table(out: &mut String, data: &ReportData) -> std::fmt::Result {
    let stats = &data.statistics;
    writeln!(
        out,
        "<h4>F1 Score across {} split(s)</h4>\n<table>\n<tr><th class=\"Label\">Classes</th><th>Min</th><th>Q1</th><th>Median</th><th>Q3</th><th>Max</th><th>Mean</th><th>Std</th></tr>",
        stats.per_split.accuracy.len()
    )?;
    for (label, summary) in stats.labels.iter().zip(&stats.per_split.f1_summary) {
        let Some(s) = summary else {
            continue;
        };
        writeln!(
            out,
            "<tr><td class=\"Label\">{}</td><td>{:.3}</td><td>{:.3}</td><td>{:.3}</td><td>{:.3}</td><td>{:.3}</td><td>{:.3}</td><td>{:.3}</td></tr>",
            escape(label),
            s.min,
            s.q1,
            s.median,
            s.q3,
            s.max,
            s.mean,
            s.std_dev
        )?;
    }
    writeln!(out, "</table>")
}

pub(super) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
