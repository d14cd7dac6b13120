use derive_more::{Deref, DerefMut};

#[derive(Deref, DerefMut)]
#[deref(forward)]
#[deref_mut(forward)]
pub struct StorageBox(Box<dyn Storage>);

impl StorageBox {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self(Box::new(storage))
    }
}

/// Durable key-value medium. Every value is read and written whole.
pub trait Storage {
    /// Short human readable description of the backend, used in logs
    fn describe(&self) -> String;

    /// Read the value stored under `key`, `None` when nothing was ever written
    fn get(&self, key: &str) -> eyre::Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> eyre::Result<()>;
}
