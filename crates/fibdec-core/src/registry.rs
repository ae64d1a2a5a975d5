//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{Calculator, FibError, Strategy};

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<Strategy, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        let strategy: Strategy = name.parse()?;

        if let Some(calc) = self.cache.read().get(&strategy) {
            return Ok(Arc::clone(calc));
        }

        let mut cache = self.cache.write();
        let calc = cache.entry(strategy).or_insert_with(|| {
            let calc: Arc<dyn Calculator> = Arc::new(strategy.calculator());
            calc
        });
        Ok(Arc::clone(calc))
    }

    fn available(&self) -> Vec<&str> {
        Strategy::ALL.into_iter().map(Strategy::as_str).collect()
    }
}
