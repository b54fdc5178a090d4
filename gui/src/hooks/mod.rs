mod use_size_observer;

pub use use_size_observer::use_size_observer;
