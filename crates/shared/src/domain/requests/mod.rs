mod pageable;

pub use self::pageable::{Direction, Pageable, SortOrder};
