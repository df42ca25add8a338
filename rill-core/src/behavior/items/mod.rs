//! Item behaviour implementations.

mod bucket;

pub use bucket::{Bucket, EmptyBucketBehavior, FilledBucketBehavior, UseOnContext};
