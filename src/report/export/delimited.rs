use crate::report::ReportData;
use std::borrow::Cow;
use std::io::{Result, Write};

/// Writes the per-class performance table followed by the aggregate rows.
pub(super) fn write_delimited<W: Write>(data: &ReportData, w: &mut W, delimiter: char) -> Result<()> {
    writeln!(
        w,
        "class{d}precision{d}recall{d}f1{d}support",
        d = delimiter
    )?;
    for (label, s) in data.statistics.iter() {
        writeln!(
            w,
            "{}{d}{:.6}{d}{:.6}{d}{:.6}{d}{}",
            field(label, delimiter),
            s.precision,
            s.recall,
            s.f_score,
            s.support,
            d = delimiter
        )?;
    }

    let agg = &data.statistics.aggregate;
    for (name, avg) in [
        ("macro avg", &agg.macro_average),
        ("weighted avg", &agg.weighted_average),
    ] {
        writeln!(
            w,
            "{name}{d}{:.6}{d}{:.6}{d}{:.6}{d}{}",
            avg.precision,
            avg.recall,
            avg.f_score,
            data.total_count,
            d = delimiter
        )?;
    }
    writeln!(
        w,
        "accuracy{d}{d}{d}{:.6}{d}{}",
        agg.accuracy,
        data.total_count,
        d = delimiter
    )?;
    Ok(())
}

fn field(value: &str, delimiter: char) -> Cow<'_, str> {
    if value.contains(delimiter) || value.contains('"') || value.contains('\n') {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
