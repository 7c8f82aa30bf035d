/// Data layer: core types, type inference, ordering, and vectorization.
///
/// Pipeline position:
/// ```text
///   raw cell text (from a TableSource)
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  classify each cell → Number / Date / Text
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │   order    │  stable sort by parsed date, reindex 1..N
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ vectorize  │  records → 2-D coordinates for clustering
///   └───────────┘
/// ```
pub mod model;
pub mod normalize;
pub mod order;
pub mod vectorize;
