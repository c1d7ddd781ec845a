use std::cell::RefCell;
use std::rc::Rc;

use implors_core::{ImplementorRegistry, ImplementorSink};

/// The CLI's stand-in for the page's index component: records every delivery
/// it is handed, in arrival order.
struct Collector {
    received: Rc<RefCell<Vec<(String, Vec<String>)>>>,
}

impl ImplementorSink for Collector {
    fn ingest(&mut self, delivery: &[(&str, &[String])]) {
        let mut received = self.received.borrow_mut();
        for (key, descriptors) in delivery {
            received.push((key.to_string(), descriptors.to_vec()));
        }
    }
}

/// Re-run one trait page's load sequence through a fresh registry: submit
/// every entry in load order, then attach a collecting consumer.
///
/// Returns exactly what the consumer observed, in delivery order.
pub fn replay_page(entries: &[(String, Vec<String>)]) -> Vec<(String, Vec<String>)> {
    let mut registry = ImplementorRegistry::new();
    for (key, descriptors) in entries {
        registry.submit(key.as_str(), descriptors.clone());
    }

    let received = Rc::new(RefCell::new(Vec::new()));
    registry.attach(Box::new(Collector {
        received: Rc::clone(&received),
    }));
    received.take()
}
