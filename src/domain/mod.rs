// Domain layer - tenant configuration and the records the embedded views edit
pub mod chart;
pub mod custom_data;
pub mod dashboard;
pub mod invoice;
pub mod property;

use std::sync::Arc;

/// Copy-on-write update of a row list.
///
/// Rows matching `matches` are replaced by `update(row)`; every other row keeps
/// its `Arc`, so unaffected rows stay pointer-equal to the input.
pub(crate) fn replace_rows<T>(
    rows: &[Arc<T>],
    matches: impl Fn(&T) -> bool,
    update: impl Fn(&T) -> T,
) -> Vec<Arc<T>> {
    rows.iter()
        .map(|row| {
            if matches(row) {
                Arc::new(update(row))
            } else {
                Arc::clone(row)
            }
        })
        .collect()
}
