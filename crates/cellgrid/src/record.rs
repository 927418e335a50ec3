//! Row access.
//!
//! A table reads each row only through the header keys it was given. Maps
//! keyed by `String` work out of the box; typed rows implement [`Record`]
//! with an enum key so every header names a real field:
//!
//! ```rust
//! use cellgrid::{CellValue, FieldValue, Record};
//!
//! struct Invoice {
//!     customer: String,
//!     delta: i64,
//! }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum InvoiceField {
//!     Customer,
//!     Delta,
//! }
//!
//! impl Record for Invoice {
//!     type Key = InvoiceField;
//!
//!     fn field(&self, key: &InvoiceField) -> FieldValue {
//!         match key {
//!             InvoiceField::Customer => self.customer.as_str().into(),
//!             InvoiceField::Delta => CellValue::change(self.delta).into(),
//!         }
//!     }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;

use crate::cell::FieldValue;

/// One row of caller data.
pub trait Record {
    /// Identifies a field; header keys are of this type.
    type Key: Clone + PartialEq + Debug;

    /// Reads one field. Missing fields read as null.
    fn field(&self, key: &Self::Key) -> FieldValue;
}

impl Record for serde_json::Map<String, serde_json::Value> {
    type Key = String;

    fn field(&self, key: &String) -> FieldValue {
        self.get(key)
            .cloned()
            .map(FieldValue::from_json)
            .unwrap_or(FieldValue::NULL)
    }
}

/// Objects read like maps; any other JSON value has no fields.
impl Record for serde_json::Value {
    type Key = String;

    fn field(&self, key: &String) -> FieldValue {
        match self {
            serde_json::Value::Object(map) => map.field(key),
            _ => FieldValue::NULL,
        }
    }
}

impl Record for BTreeMap<String, FieldValue> {
    type Key = String;

    fn field(&self, key: &String) -> FieldValue {
        self.get(key).cloned().unwrap_or(FieldValue::NULL)
    }
}

impl<S: std::hash::BuildHasher> Record for HashMap<String, FieldValue, S> {
    type Key = String;

    fn field(&self, key: &String) -> FieldValue {
        self.get(key).cloned().unwrap_or(FieldValue::NULL)
    }
}

impl<R: Record + ?Sized> Record for &R {
    type Key = R::Key;

    fn field(&self, key: &Self::Key) -> FieldValue {
        (**self).field(key)
    }
}
