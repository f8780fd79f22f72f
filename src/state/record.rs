//! One product row of the report
//!
//! List-valued fields stay as vectors until the row is flattened for CSV.

/// Separator used when list-valued fields are flattened into one cell
pub const LIST_SEPARATOR: &str = ", ";

/// Everything extracted about one product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    /// Label of the category the product was listed under
    pub category: String,

    /// Product name, or "No Name"
    pub name: String,

    /// Last path segment of the product URL
    pub sku: String,

    /// Gallery image URLs, in page order
    pub image_urls: Vec<String>,

    /// Price as displayed, or "No Price"
    pub price: String,

    /// Size swatch values, in page order
    pub sizes: Vec<String>,

    /// Color swatch values, in page order
    pub colors: Vec<String>,
}

impl ProductRecord {
    /// Column names of the CSV report
    pub const HEADER: [&'static str; 7] = [
        "Category",
        "Product Name",
        "SKU",
        "Image URLs",
        "Price",
        "Sizes",
        "Colors",
    ];

    /// Flattens the record into one report row
    pub fn to_row(&self) -> [String; 7] {
        [
            self.category.clone(),
            self.name.clone(),
            self.sku.clone(),
            self.image_urls.join(LIST_SEPARATOR),
            self.price.clone(),
            self.sizes.join(LIST_SEPARATOR),
            self.colors.join(LIST_SEPARATOR),
        ]
    }
}
