use serde::Serialize;

/// Severity tag prefixed to operator-facing lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Info,
    Erro,
    Hint,
    Succ,
}

impl Tag {
    fn as_str(&self) -> &'static str {
        match self {
            Tag::Info => "INFO",
            Tag::Erro => "ERRO",
            Tag::Hint => "HINT",
            Tag::Succ => "SUCC",
        }
    }
}

pub fn tagged(tag: Tag, message: &str) -> String {
    format!("[{}] {message}", tag.as_str())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    // Calculate column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    // Print header
    let header_row: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_row.join("  ").trim_end());

    // Print separator
    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep.join("  "));

    // Print rows
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", cell, width = w)
            })
            .collect();
        println!("{}", cells.join("  ").trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_prefixes_level() {
        assert_eq!(tagged(Tag::Succ, "done"), "[SUCC] done");
        assert_eq!(tagged(Tag::Erro, "bad"), "[ERRO] bad");
    }
}
