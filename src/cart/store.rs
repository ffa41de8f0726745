//! Per-session cart storage
//!
//! Carts hold weapon ids only; every read joins them against the catalog so
//! responses always carry the full weapon record.

use crate::catalog::{Catalog, WeaponRecord};
use crate::error::CartError;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// The cart belonging to a single session
#[derive(Debug, Clone)]
pub struct SessionCart {
    /// Weapon ids in add order; duplicates allowed
    pub entries: Vec<u32>,
    pub last_seen: Instant,
}

impl SessionCart {
    fn new(now: Instant) -> Self {
        Self {
            entries: Vec::new(),
            last_seen: now,
        }
    }

    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) > ttl
    }

    /// Marks the cart as used, dropping its contents first if it had expired.
    fn touch(&mut self, now: Instant, ttl: Duration) {
        if self.is_expired(now, ttl) {
            self.entries.clear();
        }
        self.last_seen = now;
    }
}

/// In-memory carts keyed by session id.
/// DashMap lets handlers and the sweeper share it without an external Mutex.
#[derive(Debug)]
pub struct CartStore {
    sessions: DashMap<String, SessionCart>,
    ttl: Duration,
}

impl CartStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of stored sessions, including expired ones not yet swept
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Number of sessions used within the TTL
    pub fn active_session_count(&self) -> usize {
        let now = Instant::now();
        self.sessions
            .iter()
            .filter(|entry| !entry.value().is_expired(now, self.ttl))
            .count()
    }

    /// Returns the session's cart materialized against the catalog.
    /// Unknown sessions read as an empty cart and are not stored.
    pub fn get(&self, session_id: &str, catalog: &Catalog) -> Vec<WeaponRecord> {
        let now = Instant::now();
        match self.sessions.get_mut(session_id) {
            Some(mut cart) => {
                cart.touch(now, self.ttl);
                materialize(&cart.entries, catalog)
            }
            None => Vec::new(),
        }
    }

    /// Appends `id` to the session's cart, creating the cart on first use.
    /// The cart is left untouched when `id` is not in the catalog.
    pub fn add(
        &self,
        session_id: &str,
        id: i64,
        catalog: &Catalog,
    ) -> Result<WeaponRecord, CartError> {
        let weapon = u32::try_from(id)
            .ok()
            .and_then(|id| catalog.find(id))
            .ok_or(CartError::WeaponNotFound(id))?;

        let now = Instant::now();
        let mut cart = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionCart::new(now));
        cart.touch(now, self.ttl);
        cart.entries.push(weapon.id);

        tracing::debug!(
            session = session_id,
            weapon = id,
            size = cart.entries.len(),
            "added to cart"
        );
        Ok(weapon.clone())
    }

    /// Removes the first occurrence of `id` and returns the remaining cart.
    pub fn remove(
        &self,
        session_id: &str,
        id: i64,
        catalog: &Catalog,
    ) -> Result<Vec<WeaponRecord>, CartError> {
        // Ids outside the catalog's range can never be in a cart.
        let target = u32::try_from(id).map_err(|_| CartError::NotInCart(id))?;
        let now = Instant::now();
        let mut cart = self
            .sessions
            .get_mut(session_id)
            .ok_or(CartError::NotInCart(id))?;
        cart.touch(now, self.ttl);

        let pos = cart
            .entries
            .iter()
            .position(|&entry| entry == target)
            .ok_or(CartError::NotInCart(id))?;
        cart.entries.remove(pos);

        tracing::debug!(
            session = session_id,
            weapon = id,
            size = cart.entries.len(),
            "removed from cart"
        );
        Ok(materialize(&cart.entries, catalog))
    }

    /// Empties the session's cart. Always succeeds.
    pub fn clear(&self, session_id: &str) {
        let now = Instant::now();
        if let Some(mut cart) = self.sessions.get_mut(session_id) {
            cart.entries.clear();
            cart.last_seen = now;
            tracing::debug!(session = session_id, "cart cleared");
        }
    }

    /// Drops every session idle for longer than the TTL.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    pub fn purge_expired_at(&self, now: Instant) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, cart| !cart.is_expired(now, self.ttl));
        let purged = before.saturating_sub(self.sessions.len());
        if purged > 0 {
            tracing::debug!(purged, remaining = self.sessions.len(), "expired sessions purged");
        }
        purged
    }
}

/// Expands stored ids into full weapon records, preserving order.
fn materialize(entries: &[u32], catalog: &Catalog) -> Vec<WeaponRecord> {
    entries
        .iter()
        .filter_map(|&id| catalog.find(id).cloned())
        .collect()
}
