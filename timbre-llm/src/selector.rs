//! Per-request credential choice.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;
use timbre_core::config::CredentialSelection;

use crate::credentials::{Credential, CredentialPool};

/// Picks one credential from a pool. `None` only for an empty pool.
pub trait CredentialSelector: Send + Sync {
    fn pick<'a>(&self, pool: &'a CredentialPool) -> Option<&'a Credential>;
}

/// Uniform random pick.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRandom;

impl CredentialSelector for UniformRandom {
    fn pick<'a>(&self, pool: &'a CredentialPool) -> Option<&'a Credential> {
        if pool.is_empty() {
            return None;
        }
        let index = rand::thread_rng().gen_range(0..pool.len());
        pool.get(index)
    }
}

/// Cycles through the pool in order.
#[derive(Debug, Default)]
pub struct RoundRobin {
    next: AtomicUsize,
}

impl CredentialSelector for RoundRobin {
    fn pick<'a>(&self, pool: &'a CredentialPool) -> Option<&'a Credential> {
        if pool.is_empty() {
            return None;
        }
        let index = self.next.fetch_add(1, Ordering::Relaxed) % pool.len();
        pool.get(index)
    }
}

pub fn selector_for(selection: CredentialSelection) -> Box<dyn CredentialSelector> {
    match selection {
        CredentialSelection::Random => Box::new(UniformRandom),
        CredentialSelection::RoundRobin => Box::new(RoundRobin::default()),
    }
}
