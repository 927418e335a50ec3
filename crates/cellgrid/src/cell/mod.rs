//! Cell values and the normalizer that promotes raw fields into them.
//!
//! Every field a header reads goes through [`normalize`], so the renderer
//! only ever sees a [`CellValue`]:
//!
//! | field                        | cell                        |
//! |------------------------------|-----------------------------|
//! | `CellValue`                  | unchanged                   |
//! | string, number, bool, null   | `Text` with the same value  |
//! | timestamp, structured JSON   | `Text` with the string form |

mod field;
mod value;

pub use field::{normalize, FieldValue, Scalar};
pub use value::{CellValue, RenderFn, TagVariant, TextValue, Trend};
