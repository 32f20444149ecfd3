// View output - framework-neutral table model every embedded view renders to
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewOutput {
    pub heading: String,
    pub accent_color: String,
    pub columns: Vec<&'static str>,
    pub rows: Vec<ViewRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    /// Id of the record this row edits.
    pub key: u32,
    pub cells: Vec<String>,
    pub control: RowControl,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowControl {
    Button { label: String },
    Select { selected: String, options: Vec<String> },
}

impl RowControl {
    fn text(&self) -> String {
        match self {
            RowControl::Button { label } => format!("[{}]", label),
            RowControl::Select { selected, options } => format!("<{}> ({})", selected, options.join("/")),
        }
    }
}

impl ViewOutput {
    pub fn row(&self, key: u32) -> Option<&ViewRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let mut cells = row.cells.clone();
                cells.push(row.control.text());
                cells
            })
            .collect()
    }
}

impl fmt::Display for ViewOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.text_rows();
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for cells in &body {
            for (i, cell) in cells.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }

        writeln!(f, "{}", self.heading)?;
        let header: Vec<String> = self.columns.iter().map(|c| c.to_string()).collect();
        write_line(f, &header, &widths)?;
        for cells in &body {
            write_line(f, cells, &widths)?;
        }
        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    writeln!(f, "{}", padded.join(" | ").trim_end())
}
