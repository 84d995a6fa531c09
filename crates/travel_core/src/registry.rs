use std::collections::BTreeMap;

use crate::driver::Driver;

/// Run-scoped mapping from exact driver name to [`Driver`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    drivers: BTreeMap<String, Driver>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fresh driver under `name`, replacing any previous one and its trips.
    /// Returns true when a driver was replaced.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let driver = Driver::new(name.clone());
        self.drivers.insert(name, driver).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Driver> {
        self.drivers.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Driver> {
        self.drivers.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.drivers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Drivers in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.values()
    }

    pub fn clear(&mut self) {
        self.drivers.clear();
    }
}
