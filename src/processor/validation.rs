//! Generic field validation over any record that declares its constraints.

use validator::Validate;

/// Returns true when every declared constraint on the record holds
///
/// Works for any type deriving [`Validate`]; which field failed is logged
/// but never reported to the caller.
pub fn is_valid<T: Validate>(record: &T) -> bool {
    match record.validate() {
        Ok(()) => true,
        Err(errors) => {
            let fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect();
            tracing::debug!(?fields, "Record failed field validation");
            false
        }
    }
}
