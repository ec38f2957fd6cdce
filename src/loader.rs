//! Load contracts for the prototype, metadata, and case tables.
//!
//! Loads are all-or-nothing: any contract violation rejects the whole table
//! and nothing is partially constructed. Case rows, by contrast, are
//! validated one at a time by the caller via [`CaseRow::bits`].

use std::collections::HashMap;
use std::path::Path;

use log::{info, warn};

use crate::bit::map_to_bit;
use crate::classifier::{BitVector, HammingNetwork, Prototype};
use crate::error::{HamnetError, Result};
use crate::table::{Row, Table};

/// Column carrying the class label in the prototype table (case-insensitive).
pub const CLASS_COLUMN: &str = "Clase";
/// Metadata column naming a feature.
pub const METADATA_FEATURE_COLUMN: &str = "Caracteristica";
/// Metadata column carrying the feature's type tag.
pub const METADATA_TYPE_COLUMN: &str = "Tipo";
/// The only type tag accepted for classifier features.
pub const BINARY_TYPE: &str = "binario";

/// Feature name to lowercased type tag, from the metadata table.
pub type Metadata = HashMap<String, String>;

/// Load the metadata table.
///
/// Requires `Caracteristica` and `Tipo` columns. Entries for features the
/// prototype table does not use are allowed.
pub fn load_metadata(path: &Path) -> Result<Metadata> {
    let table = Table::open(path)?;
    let feature_idx = table.column_index(METADATA_FEATURE_COLUMN).ok_or_else(|| {
        HamnetError::metadata(format!(
            "metadata table must include '{METADATA_FEATURE_COLUMN}' and '{METADATA_TYPE_COLUMN}' columns, found: {:?}",
            table.headers()
        ))
    })?;
    let type_idx = table.column_index(METADATA_TYPE_COLUMN).ok_or_else(|| {
        HamnetError::metadata(format!(
            "metadata table must include '{METADATA_FEATURE_COLUMN}' and '{METADATA_TYPE_COLUMN}' columns, found: {:?}",
            table.headers()
        ))
    })?;

    let mut metadata = Metadata::new();
    for row in table.rows() {
        if row.is_blank() {
            continue;
        }
        let feature = row.get(feature_idx).unwrap_or("").trim();
        let type_tag = row.get(type_idx).unwrap_or("").trim().to_lowercase();
        metadata.insert(feature.to_string(), type_tag);
    }

    info!(
        "loaded {} metadata entries from '{}'",
        metadata.len(),
        path.display()
    );
    Ok(metadata)
}

/// Load the prototype table and build the network.
///
/// Rejects the whole load when the header lacks a `Clase` column, when any
/// feature cell is non-binary, when a label cell is empty, when no feature
/// columns remain, or when no data rows remain after discarding blank rows.
/// With metadata supplied, every feature column must be tagged `binario`.
pub fn load_prototypes(path: &Path, metadata: Option<&Metadata>) -> Result<HammingNetwork> {
    let table = Table::open(path)?;
    let class_idx = table.find_column_ci(CLASS_COLUMN).ok_or_else(|| {
        HamnetError::schema(format!(
            "prototype table must include a '{CLASS_COLUMN}' column, found: {:?}",
            table.headers()
        ))
    })?;

    // Feature set: every non-class column, in header order.
    let feature_columns: Vec<(usize, &String)> = table
        .headers()
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != class_idx)
        .collect();
    if feature_columns.is_empty() {
        return Err(HamnetError::schema(
            "prototype table has no feature columns",
        ));
    }

    if let Some(metadata) = metadata {
        for (_, name) in &feature_columns {
            match metadata.get(*name) {
                None => {
                    return Err(HamnetError::metadata(format!(
                        "prototype column '{name}' is not described by the metadata table"
                    )));
                }
                Some(tag) if tag != BINARY_TYPE => {
                    return Err(HamnetError::metadata(format!(
                        "prototype column '{name}' must be tagged '{BINARY_TYPE}', found '{tag}'"
                    )));
                }
                Some(_) => {}
            }
        }
    }

    let mut prototypes = Vec::new();
    for row in table.rows() {
        if row.is_blank() {
            warn!(
                "blank row in prototype table (line {}), ignored",
                row.line()
            );
            continue;
        }

        let label = row.get(class_idx).unwrap_or("").trim();
        if label.is_empty() {
            return Err(HamnetError::schema(format!(
                "prototype at line {}: empty '{CLASS_COLUMN}' cell",
                row.line()
            )));
        }

        let mut bits = BitVector::new();
        for (idx, name) in &feature_columns {
            let raw = row.get(*idx).unwrap_or("");
            let bit = map_to_bit(raw).ok_or_else(|| {
                HamnetError::schema(format!(
                    "prototype at line {}: non-binary value '{}' in column '{}'",
                    row.line(),
                    raw.trim(),
                    name
                ))
            })?;
            bits.insert((*name).clone(), bit);
        }

        prototypes.push(Prototype {
            label: label.to_string(),
            bits,
        });
    }

    if prototypes.is_empty() {
        return Err(HamnetError::schema("prototype table has no data rows"));
    }

    let features: Vec<String> = feature_columns
        .into_iter()
        .map(|(_, name)| name.clone())
        .collect();
    info!(
        "loaded {} prototypes with {} features from '{}'",
        prototypes.len(),
        features.len(),
        path.display()
    );
    Ok(HammingNetwork::new(prototypes, features))
}

/// An unmappable cell in a case row.
#[derive(Debug, Clone)]
pub struct CellError {
    /// Feature column name.
    pub column: String,
    /// Raw cell value, trimmed.
    pub value: String,
}

impl std::fmt::Display for CellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}='{}'", self.column, self.value)
    }
}

/// The case table with its id column and required feature columns resolved.
#[derive(Debug)]
pub struct CaseTable {
    table: Table,
    id_idx: usize,
    feature_columns: Vec<(usize, String)>,
}

impl CaseTable {
    /// Open the case table and validate its header against the feature set.
    ///
    /// The id column is the named one, or the first column when no name is
    /// given. Feature columns missing from the header are a whole-run
    /// error, detected before any row is read; extra columns are ignored.
    pub fn open(path: &Path, id_column: Option<&str>, features: &[String]) -> Result<CaseTable> {
        let table = Table::open(path)?;

        let id_idx = match id_column {
            Some(name) => table.column_index(name).ok_or_else(|| {
                HamnetError::case(format!(
                    "id column '{}' not found in case table, columns: {:?}",
                    name,
                    table.headers()
                ))
            })?,
            None => 0,
        };

        let mut feature_columns = Vec::new();
        let mut missing = Vec::new();
        for feature in features {
            match table.column_index(feature) {
                Some(idx) => feature_columns.push((idx, feature.clone())),
                None => missing.push(feature.clone()),
            }
        }
        if !missing.is_empty() {
            return Err(HamnetError::case(format!(
                "case table is missing feature columns: {missing:?}"
            )));
        }

        Ok(CaseTable {
            table,
            id_idx,
            feature_columns,
        })
    }

    /// Case rows in file order.
    pub fn rows(&self) -> impl Iterator<Item = CaseRow<'_>> + '_ {
        self.table.rows().iter().map(move |row| CaseRow {
            row,
            id_idx: self.id_idx,
            feature_columns: &self.feature_columns,
        })
    }
}

/// One case row, resolved against the validated header.
pub struct CaseRow<'a> {
    row: &'a Row,
    id_idx: usize,
    feature_columns: &'a [(usize, String)],
}

impl CaseRow<'_> {
    /// 1-based line number in the case table.
    pub fn line(&self) -> u64 {
        self.row.line()
    }

    /// Whether every cell is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.row.is_blank()
    }

    /// Case identifier: the id cell, or `fila_<line>` when it is empty.
    pub fn id(&self) -> String {
        let id = self.row.get(self.id_idx).unwrap_or("").trim();
        if id.is_empty() {
            format!("fila_{}", self.line())
        } else {
            id.to_string()
        }
    }

    /// Extract the case bit vector.
    ///
    /// Every required feature is mapped independently so the error lists
    /// all unmappable cells of the row, not just the first.
    pub fn bits(&self) -> std::result::Result<BitVector, Vec<CellError>> {
        let mut bits = BitVector::new();
        let mut errors = Vec::new();

        for (idx, name) in self.feature_columns {
            let raw = self.row.get(*idx).unwrap_or("");
            match map_to_bit(raw) {
                Some(bit) => {
                    bits.insert(name.clone(), bit);
                }
                None => errors.push(CellError {
                    column: name.clone(),
                    value: raw.trim().to_string(),
                }),
            }
        }

        if errors.is_empty() { Ok(bits) } else { Err(errors) }
    }
}
