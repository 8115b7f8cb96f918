//! Merging per-record field lists into one schema field list

use std::collections::HashMap;

use super::types::Field;

/// Merge the field lists inferred from each sampled record.
///
/// The result holds each field name once, in the order names were first seen
/// across the samples. A field's type is the union of every type observed for
/// it; its sample value comes from the first record that contained it.
pub fn merge_field_types(samples: &[Vec<Field>]) -> Vec<Field> {
    let mut merged: Vec<Field> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for fields in samples {
        for field in fields {
            match index.get(&field.name) {
                Some(&pos) => merged[pos].field_type.merge(&field.field_type),
                None => {
                    index.insert(field.name.clone(), merged.len());
                    merged.push(field.clone());
                }
            }
        }
    }

    merged
}
