//! Network descriptors and the two-way network toggle.

pub mod descriptor;
pub mod selector;

pub use descriptor::NetworkDescriptor;
pub use selector::NetworkSelector;
