//! Defines the structure descriptor of a dataset.
use fixedbitset::FixedBitSet;
use serde::{Serialize, Deserialize};

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::constants::{CLASS_COLUMN, NUMERIC_MARKER};
use crate::error::{InductionError, Result};
use super::Row;


/// The values a column may take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    /// An ordered list of categories.
    Categorical(Vec<String>),
    /// A column that is passed through untouched.
    /// Such a column is never split on nor enumerated.
    Numeric,
}


impl Domain {
    /// Build a domain from its values.
    /// The single value `"Numeric"` yields [`Domain::Numeric`].
    pub fn from_values<I, S>(values: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let values = values.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        if values.len() == 1 && values[0] == NUMERIC_MARKER {
            Self::Numeric
        } else {
            Self::Categorical(values)
        }
    }


    /// Returns the categories, or an empty slice for a numeric column.
    #[inline]
    pub fn values(&self) -> &[String] {
        match self {
            Self::Categorical(values) => &values[..],
            Self::Numeric => &[],
        }
    }


    /// Returns `true` for the numeric marker.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric)
    }


    /// Returns the number of categories.
    #[inline]
    pub fn len(&self) -> usize {
        self.values().len()
    }


    /// Returns `true` if there is no category.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}


/// A column of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name:     String,
    position: usize,
    domain:   Domain,
}


impl Column {
    /// Construct a new column.
    pub fn new<S: Into<String>>(name: S, position: usize, domain: Domain)
        -> Self
    {
        Self { name: name.into(), position, domain, }
    }


    /// Construct a categorical column.
    pub fn categorical<S, I, T>(name: S, position: usize, values: I) -> Self
        where S: Into<String>,
              I: IntoIterator<Item = T>,
              T: Into<String>,
    {
        Self::new(name, position, Domain::from_values(values))
    }


    /// Construct a numeric column.
    pub fn numeric<S: Into<String>>(name: S, position: usize) -> Self {
        Self::new(name, position, Domain::Numeric)
    }


    /// Name of this column.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Index of this column in a row.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }


    /// Values of this column.
    #[inline]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }


    /// Returns `true` if this is the target column.
    #[inline]
    pub fn is_class(&self) -> bool {
        self.name == CLASS_COLUMN
    }
}


/// Column name to `{position, domain}` mapping.
/// Columns keep the order in which they were given.
/// Exactly one column is named `class`.
///
/// A structure serializes as its list of columns,
/// and deserializing goes through [`Structure::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct Structure {
    columns: Vec<Column>,
    index:   HashMap<String, usize>,
    class:   usize,
}


impl Structure {
    /// Construct a structure from its columns.
    ///
    /// Fails unless
    /// - column names are unique,
    /// - exactly one column is named `class`
    ///   and its domain is a non-empty list of categories,
    /// - the positions are a permutation of `0..columns.len()`.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_columns = columns.len();

        let mut index = HashMap::with_capacity(n_columns);
        for (k, column) in columns.iter().enumerate() {
            if index.insert(column.name.clone(), k).is_some() {
                return Err(InductionError::InvalidStructure(
                    format!("column `{}` appears twice", column.name)
                ));
            }
        }

        let mut seen = FixedBitSet::with_capacity(n_columns);
        for column in columns.iter() {
            let position = column.position;
            if position >= n_columns || seen.put(position) {
                return Err(InductionError::InvalidStructure(format!(
                    "position {position} of `{}` is not a permutation \
                     of 0..{n_columns}",
                    column.name,
                )));
            }
        }

        let class = *index.get(CLASS_COLUMN)
            .ok_or_else(|| InductionError::InvalidStructure(
                format!("no `{CLASS_COLUMN}` column")
            ))?;
        let domain = &columns[class].domain;
        if domain.is_numeric() || domain.is_empty() {
            return Err(InductionError::InvalidStructure(
                format!("`{CLASS_COLUMN}` needs a non-empty list of values")
            ));
        }

        Ok(Self { columns, index, class, })
    }


    /// Infer a structure from a header and in-memory rows.
    ///
    /// A column whose non-empty cells all parse as numbers is numeric.
    /// Any other column gets its distinct non-empty cells
    /// in order of first appearance.
    /// The `class` column is always categorical.
    pub fn infer<S>(header: &[S], rows: &[Row]) -> Result<Self>
        where S: AsRef<str>
    {
        let n_columns = header.len();
        if let Some(k) = rows.iter().position(|row| row.len() != n_columns) {
            return Err(InductionError::InvalidStructure(format!(
                "row {k} has {} cells, the header has {n_columns}",
                rows[k].len(),
            )));
        }

        let columns = header.iter()
            .enumerate()
            .map(|(position, name)| {
                let name = name.as_ref();
                let cells = rows.iter()
                    .map(|row| row[position].as_str())
                    .filter(|cell| !cell.is_empty());

                let is_numeric = name != CLASS_COLUMN
                    && cells.clone().all(|cell| cell.parse::<f64>().is_ok());
                if is_numeric {
                    return Column::numeric(name, position);
                }

                let mut seen = HashSet::new();
                let values = cells.filter(|cell| seen.insert(*cell))
                    .collect::<Vec<_>>();
                Column::categorical(name, position, values)
            })
            .collect::<Vec<_>>();

        Self::new(columns)
    }


    /// Returns the columns in their original order.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns[..]
    }


    /// Returns the number of columns, `class` included.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }


    /// A structure always holds the `class` column.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }


    /// Returns the column named `name`.
    #[inline]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|&k| &self.columns[k])
    }


    /// Returns the position of the column named `name`.
    #[inline]
    pub fn position(&self, name: &str) -> Result<usize> {
        self.column(name)
            .map(Column::position)
            .ok_or_else(|| InductionError::UnknownColumn(name.to_string()))
    }


    /// Returns the `class` column.
    #[inline]
    pub fn class_column(&self) -> &Column {
        &self.columns[self.class]
    }


    /// Returns the position of the class value in a row.
    #[inline]
    pub fn class_position(&self) -> usize {
        self.class_column().position
    }


    /// Returns the class values.
    #[inline]
    pub fn class_values(&self) -> &[String] {
        self.class_column().domain.values()
    }


    /// Returns every column except `class`, in the original order.
    pub fn features(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter()
            .filter(|column| !column.is_class())
    }


    /// Returns the columns that are neither numeric nor `class`.
    pub fn categorical_features(&self) -> impl Iterator<Item = &Column> + '_ {
        self.features()
            .filter(|column| !column.domain.is_numeric())
    }


    /// Check that every row has one cell per column.
    pub fn check(&self, rows: &[Row]) -> Result<()> {
        let n_columns = self.len();
        match rows.iter().position(|row| row.len() != n_columns) {
            None => Ok(()),
            Some(k) => Err(InductionError::InvalidStructure(format!(
                "row {k} has {} cells, the structure has {n_columns}",
                rows[k].len(),
            ))),
        }
    }


    /// Returns the view used to grow a decision tree.
    /// Numeric columns are excluded from the start.
    pub fn view(&self) -> StructureView<'_> {
        let mut excluded = FixedBitSet::with_capacity(self.len());
        self.columns.iter()
            .enumerate()
            .filter(|(_, column)| column.domain.is_numeric())
            .for_each(|(k, _)| excluded.insert(k));

        StructureView { structure: self, excluded, }
    }
}


impl TryFrom<Vec<Column>> for Structure {
    type Error = InductionError;

    fn try_from(columns: Vec<Column>) -> Result<Self> {
        Self::new(columns)
    }
}


impl From<Structure> for Vec<Column> {
    fn from(structure: Structure) -> Self {
        structure.columns
    }
}


impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in self.columns.iter() {
            let values = match column.domain {
                Domain::Numeric => NUMERIC_MARKER.to_string(),
                Domain::Categorical(ref values) => values.join(", "),
            };
            writeln!(
                f,
                "{name}: {{ position: {position}, values: [{values}] }}",
                name = column.name,
                position = column.position,
            )?;
        }
        Ok(())
    }
}


/// A structure with some columns removed.
/// Removing a column never copies the underlying [`Structure`].
#[derive(Debug, Clone)]
pub struct StructureView<'a> {
    structure: &'a Structure,
    excluded:  FixedBitSet,
}


impl<'a> StructureView<'a> {
    /// Returns the underlying structure.
    #[inline]
    pub fn structure(&self) -> &'a Structure {
        self.structure
    }


    /// Returns a view without the column named `name`.
    pub fn without(&self, name: &str) -> Result<Self> {
        let k = *self.structure.index.get(name)
            .ok_or_else(|| InductionError::UnknownColumn(name.to_string()))?;
        let mut excluded = self.excluded.clone();
        excluded.insert(k);

        Ok(Self { structure: self.structure, excluded, })
    }


    /// Returns the columns that can still be split on,
    /// in the original order.
    pub fn candidates(&self) -> impl Iterator<Item = &'a Column> + '_ {
        let structure = self.structure;
        structure.columns.iter()
            .enumerate()
            .filter(move |&(k, column)| {
                !column.is_class() && !self.excluded.contains(k)
            })
            .map(|(_, column)| column)
    }


    /// Returns the candidate column named `name`.
    pub fn candidate(&self, name: &str) -> Option<&'a Column> {
        self.candidates().find(|column| column.name == name)
    }


    /// Returns `true` if only the `class` column remains.
    #[inline]
    pub fn only_class_left(&self) -> bool {
        self.candidates().next().is_none()
    }
}
