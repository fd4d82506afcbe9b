pub(crate) mod range_set;
pub mod square;

pub use self::square::Square;

use ahash::RandomState;
use linked_hash_set::LinkedHashSet;

/// A hash set iterated in insertion order
pub type LinkedAHashSet<T> = LinkedHashSet<T, RandomState>;
