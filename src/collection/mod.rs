mod array_list;
#[cfg(feature = "concurrent")]
mod concurrent;

pub use array_list::ArrayList;
#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentArrayList;
