//! Conversion into a polars `DataFrame`, for collaborators that work on
//! dataframes (for example a narrative report generator).

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

use crate::dataset::Dataset;

impl Dataset {
    /// Converts the dataset into string columns; missing cells become nulls.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .columns()
            .iter()
            .map(|column| {
                let values: Vec<Option<&str>> =
                    column.cells().iter().map(Option::as_deref).collect();
                Series::new(column.name().into(), values).into_column()
            })
            .collect();
        DataFrame::new(columns)
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset::{Column, Dataset};

    #[test]
    fn converts_missing_cells_to_nulls() {
        let dataset = Dataset::new(vec![
            Column::new("id", vec![Some("1".to_string()), Some("2".to_string())]),
            Column::new("name", vec![Some("Alice".to_string()), None]),
        ])
        .unwrap();
        let df = dataset.to_dataframe().unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        let name = df.column("name").unwrap();
        assert_eq!(name.null_count(), 1);
    }
}
