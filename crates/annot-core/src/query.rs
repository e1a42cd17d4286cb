//! Read-oriented lookups over a loaded document.
//!
//! Every method is a linear scan over the stored pages and fields; no index
//! is maintained, so repeated lookups re-scan. That is a deliberate trade for
//! documents with tens to low hundreds of fields. Document order means stored
//! page order, then stored field order within each page. Misses are empty
//! results, never errors.

use crate::model::{Field, FieldGroup, FormAnnotation};

impl FormAnnotation {
    /// Find the first field with the given id, in document order.
    ///
    /// Duplicate ids are representable; later duplicates are unreachable
    /// through this method.
    pub fn field_by_id(&self, field_id: &str) -> Option<&Field> {
        self.pages
            .iter()
            .flat_map(|page| page.fields.iter())
            .find(|field| field.field_id == field_id)
    }

    /// Mutable variant of [`field_by_id`](Self::field_by_id). The returned
    /// reference aliases the owning page's storage: writes through it are
    /// visible to every subsequent lookup on this document.
    pub fn field_by_id_mut(&mut self, field_id: &str) -> Option<&mut Field> {
        self.pages
            .iter_mut()
            .flat_map(|page| page.fields.iter_mut())
            .find(|field| field.field_id == field_id)
    }

    /// All fields whose `field_value` equals the given value, cloned, in
    /// document order. Empty when none match.
    pub fn fields_by_value(&self, field_value: &str) -> Vec<Field> {
        self.pages
            .iter()
            .flat_map(|page| page.fields.iter())
            .filter(|field| field.field_value == field_value)
            .cloned()
            .collect()
    }

    /// The field sequence of the first page whose `page_number` matches, or
    /// an empty slice when no page does. This borrows the page's own
    /// sequence, not a copy.
    pub fn fields_on_page(&self, page_number: u32) -> &[Field] {
        self.pages
            .iter()
            .find(|page| page.page_number == page_number)
            .map_or(&[], |page| page.fields.as_slice())
    }

    /// Mutable variant of [`fields_on_page`](Self::fields_on_page), for
    /// callers that add or remove fields in place. `None` when no page
    /// matches.
    pub fn fields_on_page_mut(&mut self, page_number: u32) -> Option<&mut Vec<Field>> {
        self.pages
            .iter_mut()
            .find(|page| page.page_number == page_number)
            .map(|page| &mut page.fields)
    }

    /// All fields whose `group_id` equals the given id, cloned, in document
    /// order. The reference is not resolved against `field_groups`.
    pub fn fields_by_group(&self, group_id: &str) -> Vec<Field> {
        self.pages
            .iter()
            .flat_map(|page| page.fields.iter())
            .filter(|field| field.group_id.as_deref() == Some(group_id))
            .cloned()
            .collect()
    }

    /// Every field across every page, cloned, concatenated in document order.
    pub fn all_fields(&self) -> Vec<Field> {
        self.pages
            .iter()
            .flat_map(|page| page.fields.iter())
            .cloned()
            .collect()
    }

    /// Find the first group with the given id. Callers resolving a field's
    /// weak `group_id` reference do it through this.
    pub fn group_by_id(&self, group_id: &str) -> Option<&FieldGroup> {
        self.field_groups
            .iter()
            .find(|group| group.group_id == group_id)
    }
}
