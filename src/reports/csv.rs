use super::common::escape_csv;
use crate::Result;
use crate::ranking::Ranking;
use crate::series::factor::FactorRow;
use crate::series::time::SeriesPoint;
use core::fmt::Write;

/// Write a trend series as `year,value` rows.
///
/// Values are written at full stored precision; display rounding is the
/// consumer's concern.
pub fn time_series<W: Write>(points: &[SeriesPoint], writer: &mut W) -> Result<()> {
    writeln!(writer, "year,value")?;
    for point in points {
        writeln!(writer, "{},{}", escape_csv(&point.year), point.value)?;
    }
    Ok(())
}

/// Write a ranking as `group,rank,country,value` rows.
pub fn ranking<W: Write>(ranking: &Ranking, writer: &mut W) -> Result<()> {
    writeln!(writer, "group,rank,country,value")?;
    for entry in &ranking.top {
        writeln!(writer, "top,{},{},{}", entry.index + 1, escape_csv(&entry.country), entry.value)?;
    }
    for entry in &ranking.bottom {
        writeln!(writer, "bottom,{},{},{}", entry.index + 1, escape_csv(&entry.country), entry.value)?;
    }
    Ok(())
}

/// Write factor rows as a `factor,<column...>` table.
pub fn factor_rows<W: Write>(columns: &[String], rows: &[FactorRow], writer: &mut W) -> Result<()> {
    write!(writer, "factor")?;
    for column in columns {
        write!(writer, ",{}", escape_csv(column))?;
    }
    writeln!(writer)?;

    for row in rows {
        write!(writer, "{}", escape_csv(row.label))?;
        for value in &row.values {
            write!(writer, ",{value}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
