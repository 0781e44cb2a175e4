//! Route dispatch
//!
//! Pure function of the classification. An unclassified message never
//! dead-ends the flow: anything that is not `Emotional` goes to the
//! logical responder.

use super::state::{Classification, Route};

/// Map the classifier's verdict to a destination. Total over
/// `Option<Classification>`.
pub fn route(classification: Option<Classification>) -> Route {
    match classification {
        Some(Classification::Emotional) => Route::Therapist,
        Some(Classification::Logical) | None => Route::Logical,
    }
}
