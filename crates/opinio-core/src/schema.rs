/// Arrow schema definitions for the review corpus.
pub mod corpus {
    use arrow::datatypes::{DataType, Field, Schema};

    /// Label column name. Always the first field: downstream tooling reads
    /// the corpus positionally.
    pub const SATISFACTION: &str = "satisfaction";
    /// Review text column name.
    pub const TEXT: &str = "text";

    /// Schema for a persisted per-language corpus file.
    pub fn corpus_schema() -> Schema {
        Schema::new(vec![
            Field::new(SATISFACTION, DataType::Int64, false),
            Field::new(TEXT, DataType::Utf8, false),
        ])
    }
}
