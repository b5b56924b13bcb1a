// Bundle building: the filter/round transform, the JSON writer, and
// read-back inspection of a written bundle.

pub mod filter;
pub mod inspect;
pub mod writer;
