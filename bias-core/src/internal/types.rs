pub use hashbrown::{hash_map, HashMap};
