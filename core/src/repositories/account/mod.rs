pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod cached;
pub mod memory;

#[cfg(test)]
mod tests;

pub use cached::CachedAccountDirectory;
pub use memory::InMemoryAccountDirectory;
pub use r#trait::AccountDirectory;
