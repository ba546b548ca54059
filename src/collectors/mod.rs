pub mod mounts;
pub mod usage;
