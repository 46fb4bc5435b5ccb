//! Store definitions and per-store row schemas.
//!
//! Every store is described declaratively: an ordered list of fields, each
//! either typed in by the user or generated at submission time. The field
//! order is the column order of the backing file, so row assembly can never
//! drift from the header.

use chrono::Local;

/// One of the three record stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Store {
    Dairy,
    Dispatch,
    FileMovement,
}

/// Where a field's value comes from at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Typed by the user in the entry form.
    UserInput,
    /// Generated from the local clock when the row is built.
    Timestamp,
}

/// A single column of a store, in header order.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub source: FieldSource,
}

impl FieldSpec {
    const fn user(name: &'static str) -> Self {
        Self {
            name,
            source: FieldSource::UserInput,
        }
    }

    const fn generated(name: &'static str) -> Self {
        Self {
            name,
            source: FieldSource::Timestamp,
        }
    }
}

/// The ordered field list for one store.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    fields: &'static [FieldSpec],
}

const DAIRY_FIELDS: &[FieldSpec] = &[
    FieldSpec::user("ID"),
    FieldSpec::generated("Date"),
    FieldSpec::user("From"),
    FieldSpec::user("Subject"),
    FieldSpec::user("Received By"),
    FieldSpec::user("Remarks"),
];

const DISPATCH_FIELDS: &[FieldSpec] = &[
    FieldSpec::user("ID"),
    FieldSpec::generated("Date"),
    FieldSpec::user("To"),
    FieldSpec::user("Subject"),
    FieldSpec::user("Dispatched By"),
    FieldSpec::user("Mode"),
    FieldSpec::user("Remarks"),
];

// The file-movement header keeps Date in the fifth column; the generated
// value is placed there, not at position 1 like the other two stores.
const FILE_MOVEMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::user("File ID"),
    FieldSpec::user("From Section"),
    FieldSpec::user("To Section"),
    FieldSpec::user("Moved By"),
    FieldSpec::generated("Date"),
    FieldSpec::user("Remarks"),
];

impl Store {
    pub const ALL: [Store; 3] = [Store::Dairy, Store::Dispatch, Store::FileMovement];

    /// Backing file name, fixed for compatibility with existing data.
    pub fn file_name(self) -> &'static str {
        match self {
            Store::Dairy => "dairy_entries.csv",
            Store::Dispatch => "dispatch_entries.csv",
            Store::FileMovement => "file_movement.csv",
        }
    }

    /// Human-readable name for window titles and messages.
    pub fn title(self) -> &'static str {
        match self {
            Store::Dairy => "Dairy",
            Store::Dispatch => "Dispatch",
            Store::FileMovement => "File Movement",
        }
    }

    pub fn schema(self) -> Schema {
        let fields = match self {
            Store::Dairy => DAIRY_FIELDS,
            Store::Dispatch => DISPATCH_FIELDS,
            Store::FileMovement => FILE_MOVEMENT_FIELDS,
        };
        Schema { fields }
    }
}

impl Schema {
    /// Column names in file order.
    pub fn header(self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|f| f.name)
    }

    /// Names of the user-entered fields, in order. This is what an entry
    /// form renders; generated fields are skipped.
    pub fn prompts(self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|f| f.source == FieldSource::UserInput)
            .map(|f| f.name)
    }

    pub fn prompt_count(self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.source == FieldSource::UserInput)
            .count()
    }

    /// Assembles a full row from user inputs, injecting the generated
    /// timestamp at its schema position.
    ///
    /// `inputs` must hold one value per prompt, in prompt order. Returns
    /// one user-visible message per empty field; nothing is persisted by
    /// this call.
    pub fn build_row(&self, inputs: &[String]) -> Result<Vec<String>, Vec<String>> {
        debug_assert_eq!(inputs.len(), self.prompt_count());

        let mut errors = Vec::new();
        let mut row = Vec::with_capacity(self.fields.len());
        let mut inputs = inputs.iter();

        for field in self.fields {
            match field.source {
                FieldSource::UserInput => {
                    let value = inputs.next().map(String::as_str).unwrap_or("");
                    if value.is_empty() {
                        errors.push(format!("{} is required.", field.name));
                    }
                    row.push(value.to_string());
                }
                FieldSource::Timestamp => row.push(timestamp()),
            }
        }

        if errors.is_empty() { Ok(row) } else { Err(errors) }
    }
}

/// Current local time in the fixed on-disk format.
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
