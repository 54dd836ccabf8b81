// Naming table: pool id -> human label, in table order.

use std::collections::HashMap;

use crate::error::{CheckError, Table};
use crate::models::NamedEntity;

/// Labels in naming-table order. A repeated id replaces the earlier label in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    entries: Vec<NamedEntity>,
    index: HashMap<String, usize>,
}

impl NameTable {
    pub fn insert(&mut self, entity: NamedEntity) {
        match self.index.get(&entity.id) {
            Some(&pos) => self.entries[pos] = entity,
            None => {
                self.index.insert(entity.id.clone(), self.entries.len());
                self.entries.push(entity);
            }
        }
    }

    /// Ids carrying `label`, in table order.
    pub fn ids_for<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.label == label)
            .map(|e| e.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedEntity> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse `[id, label]` rows; any other arity is an error.
pub fn parse_names<R, S>(rows: &[R]) -> Result<NameTable, CheckError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut names = NameTable::default();
    for (index, row) in rows.iter().enumerate() {
        names.insert(parse_row(index, row.as_ref())?);
    }
    Ok(names)
}

/// Like `parse_names`, but skips bad rows and returns their errors. A row without a label names no item.
pub fn parse_name_rows<R, S>(rows: &[R]) -> (NameTable, Vec<CheckError>)
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut names = NameTable::default();
    let mut errors = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        match parse_row(index, row.as_ref()) {
            Ok(entity) => names.insert(entity),
            Err(e) => errors.push(e),
        }
    }
    (names, errors)
}

fn parse_row<S: AsRef<str>>(index: usize, row: &[S]) -> Result<NamedEntity, CheckError> {
    let [id, label] = row else {
        return Err(CheckError::parse(
            Table::Names,
            index,
            format!("expected 2 fields, got {}", row.len()),
        ));
    };
    Ok(NamedEntity {
        id: id.as_ref().trim().to_string(),
        label: label.as_ref().to_string(),
    })
}
