mod dropdown;

pub use dropdown::LabeledDropdown;
