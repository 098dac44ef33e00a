//! Expose the `redline_text` crate's functionality to WebAssembly.
use wasm_bindgen::prelude::*;

use crate::{ChangeId, Decision, DecisionStore, FieldReview};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::diff` returning the operations as a JSON
/// string.
///
/// # Panics
///
/// If serialization to JSON fails which should not happen
#[wasm_bindgen(js_name = diffText)]
#[must_use]
pub fn diff_text(before: &str, after: &str) -> String {
    set_panic_hook();

    serde_json::to_string(&crate::diff(before, after)).expect("Failed to serialize operations")
}

/// Merge `before` and `after`, accepting only the changes whose index is in
/// `accepted_changes`. Unknown indexes are ignored.
#[wasm_bindgen(js_name = mergeText)]
#[must_use]
pub fn merge_text(before: &str, after: &str, accepted_changes: &[u32]) -> String {
    set_panic_hook();

    let operations = crate::diff(before, after);
    let mut decisions = DecisionStore::new(crate::change_count(&operations));
    decisions.set_all(Decision::Decline);

    for &index in accepted_changes {
        decisions.set(ChangeId(index as usize), Decision::Accept).ok();
    }

    crate::compile_merge(before, &operations, &decisions).merged
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM wrapper around `FieldReview` for reviewing a single field.
#[wasm_bindgen]
#[derive(Debug)]
pub struct FieldReviewer {
    review: FieldReview,
}

#[wasm_bindgen]
impl FieldReviewer {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(before: &str, after: &str) -> Self {
        set_panic_hook();

        Self {
            review: FieldReview::new(before, after),
        }
    }

    /// Accept (`true`) or decline (`false`) a change and return the merged
    /// text.
    ///
    /// # Errors
    ///
    /// If `change` is not a change of this review.
    pub fn decide(&mut self, change: u32, accept: bool) -> Result<String, JsError> {
        let decision = if accept {
            Decision::Accept
        } else {
            Decision::Decline
        };

        Ok(self
            .review
            .decide(ChangeId(change as usize), decision)?
            .merged
            .clone())
    }

    #[wasm_bindgen(js_name = acceptAll)]
    pub fn accept_all(&mut self) -> String { self.review.accept_all().merged.clone() }

    #[wasm_bindgen(js_name = declineAll)]
    pub fn decline_all(&mut self) -> String { self.review.decline_all().merged.clone() }

    #[wasm_bindgen(js_name = mergedText)]
    #[must_use]
    pub fn merged_text(&self) -> String { self.review.merged_text().to_owned() }

    #[wasm_bindgen(js_name = isResolved)]
    #[must_use]
    pub fn is_resolved(&self) -> bool { self.review.is_resolved() }

    #[wasm_bindgen(js_name = changeCount)]
    #[must_use]
    pub fn change_count(&self) -> usize { self.review.change_count() }

    /// The display fragments as a JSON string.
    ///
    /// # Panics
    ///
    /// If serialization to JSON fails which should not happen
    #[wasm_bindgen(js_name = fragmentsJson)]
    #[must_use]
    pub fn fragments_json(&self) -> String {
        serde_json::to_string(&self.review.fragments()).expect("Failed to serialize fragments")
    }
}
