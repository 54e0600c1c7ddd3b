//! In-memory table of uploaded records

use crate::error::{Error, Result};

/// A cell is `None` when the CSV field was empty or missing.
pub type Cell = Option<String>;

/// Ordered rows sharing one column set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given header
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; short rows are padded with missing cells
    pub fn push_row(&mut self, mut row: Vec<Cell>) -> Result<()> {
        if row.len() > self.columns.len() {
            return Err(Error::Parse(format!(
                "row {} has {} fields, header has {}",
                self.rows.len() + 1,
                row.len(),
                self.columns.len()
            )));
        }
        row.resize(self.columns.len(), None);
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of a column that must be present
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::missing_column(name))
    }

    /// Cell values of one column in row order
    pub fn column_values(&self, name: &str) -> Result<Vec<Option<&str>>> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(|row| row[idx].as_deref()).collect())
    }

    /// Rewrite every cell of a column in place
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<()>
    where
        F: FnMut(Option<&str>) -> String,
    {
        let idx = self.require_column(name)?;
        for row in &mut self.rows {
            let value = f(row[idx].as_deref());
            row[idx] = Some(value);
        }
        Ok(())
    }

    /// Overwrite a column, or append it when it does not exist yet
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(Error::Shape(format!(
                "column '{}' has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }

        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = Some(value);
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(Some(value));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(["Id", "Review"]);
        table
            .push_row(vec![Some("1".into()), Some("Great!".into())])
            .unwrap();
        table.push_row(vec![Some("2".into())]).unwrap();
        table
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = sample();
        assert_eq!(table.column_values("Review").unwrap(), vec![Some("Great!"), None]);
    }

    #[test]
    fn test_long_row_rejected() {
        let mut table = Table::new(["A"]);
        let result = table.push_row(vec![Some("1".into()), Some("2".into())]);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_missing_column() {
        let table = sample();
        assert!(matches!(
            table.require_column("Text"),
            Err(Error::Schema { column }) if column == "Text"
        ));
    }

    #[test]
    fn test_set_column_appends_then_overwrites() {
        let mut table = sample();
        table
            .set_column("sentiment", vec!["0.5".into(), "0.0".into()])
            .unwrap();
        assert_eq!(table.columns(), &["Id", "Review", "sentiment"]);

        table
            .set_column("sentiment", vec!["-0.5".into(), "0.0".into()])
            .unwrap();
        assert_eq!(table.columns().len(), 3);
        assert_eq!(
            table.column_values("sentiment").unwrap(),
            vec![Some("-0.5"), Some("0.0")]
        );
    }

    #[test]
    fn test_set_column_length_mismatch() {
        let mut table = sample();
        let err = table.set_column("sentiment", vec!["0.5".into()]).unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
        assert!(!err.is_user_facing());
        assert_eq!(table.columns().len(), 2);
    }

    #[test]
    fn test_map_column_fills_missing() {
        let mut table = sample();
        table
            .map_column("Review", |v| v.unwrap_or_default().to_lowercase())
            .unwrap();
        assert_eq!(
            table.column_values("Review").unwrap(),
            vec![Some("great!"), Some("")]
        );
    }
}
