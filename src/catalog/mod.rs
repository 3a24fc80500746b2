// Catalog files — the item table and the two reference tables.
//
// Column names are fixed by the upstream export format.

pub mod load;
pub mod table;
pub mod write;

/// Field delimiter shared by every input and the output.
pub const CATALOG_DELIMITER: u8 = b';';

/// Byte-order mark written at the start of the output.
pub const UTF8_BOM: char = '\u{feff}';

/// Item name column (required, carried through unchanged).
pub const ITEM_NAME_COLUMN: &str = "Наименование";
/// Item description column (required, rewritten with its normalized form).
pub const ITEM_DESCRIPTION_COLUMN: &str = "Описание";

pub const CATEGORY_PATH_COLUMN: &str = "Category path";
pub const CATEGORY_ID_COLUMN: &str = "Category id";

/// Label given to the single product-type column on load.
pub const PRODUCT_TYPE_COLUMN: &str = "Product Type";

/// Columns appended to the item table.
pub const OUTPUT_CATEGORY_COLUMN: &str = "Категория";
pub const OUTPUT_CATEGORY_ID_COLUMN: &str = "Категория ID";
pub const OUTPUT_PRODUCT_TYPE_COLUMN: &str = "Тип товара";
