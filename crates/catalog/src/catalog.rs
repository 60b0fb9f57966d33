use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ordermill_core::{ProductId, WorkflowError, WorkflowResult};
use ordermill_journal::Journal;

/// One resolved catalog row: the product's identifier, display name and unit
/// price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

/// Read-only lookup over the tabular product file.
///
/// The first line of the file is a header naming the `id`, `name` and `price`
/// columns; column order is not fixed. Rows are matched in file order and the
/// file is reopened on every call.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    path: PathBuf,
    journal: Journal,
}

impl ProductCatalog {
    pub fn new(path: impl Into<PathBuf>, journal: Journal) -> Self {
        Self {
            path: path.into(),
            journal,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve `product_id` to its catalog row, or report absence.
    ///
    /// A missing catalog file is recoverable: the absence is journaled and
    /// every identifier resolves to `None`. An unmatched identifier journals
    /// an invalid-attempt record. A successful match writes no journal record
    /// at this layer. Malformed rows (missing fields, unparseable id or
    /// price) never match and are skipped.
    ///
    /// Only journal-write failures and a present-but-unreadable catalog file
    /// surface as errors.
    pub fn is_valid_and_lookup(&self, product_id: ProductId) -> WorkflowResult<Option<Product>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.journal
                    .append(&format!("ERROR: {} not found", self.path.display()))?;
                self.journal
                    .append(&format!("Invalid product ID attempt: {product_id}"))?;
                return Ok(None);
            }
            Err(e) => return Err(WorkflowError::catalog(e)),
        };

        if let Some(product) = find_row(&raw, product_id) {
            return Ok(Some(product));
        }

        self.journal
            .append(&format!("Invalid product ID attempt: {product_id}"))?;
        Ok(None)
    }
}

/// Scan the raw file contents for the first row whose `id` column matches.
fn find_row(raw: &str, product_id: ProductId) -> Option<Product> {
    let mut lines = raw.lines();
    let header = columns(lines.next()?);
    let id_col = header.iter().position(|c| *c == "id")?;
    let name_col = header.iter().position(|c| *c == "name")?;
    let price_col = header.iter().position(|c| *c == "price")?;

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = columns(line);
        let (Some(id), Some(name), Some(price)) = (
            fields.get(id_col),
            fields.get(name_col),
            fields.get(price_col),
        ) else {
            continue;
        };
        let Ok(id) = id.parse::<ProductId>() else {
            continue;
        };
        if id != product_id {
            continue;
        }
        let Ok(price) = price.parse::<f64>() else {
            continue;
        };
        return Some(Product {
            id,
            name: (*name).to_string(),
            price,
        });
    }

    None
}

fn columns(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}
