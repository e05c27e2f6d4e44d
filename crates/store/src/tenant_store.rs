use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::RwLock;

use imprint_core::TenantId;

use crate::scope::TenantScope;

/// Tenant-isolated key/value store abstraction.
///
/// Methods take a [`TenantScope`] capability rather than a raw tenant id, so
/// cross-tenant reads are unrepresentable at call sites.
pub trait TenantStore<K, V>: Send + Sync {
    fn get(&self, scope: &TenantScope, key: &K) -> Option<V>;
    fn upsert(&self, scope: &TenantScope, key: K, value: V);
    fn list(&self, scope: &TenantScope) -> Vec<V>;
    /// Remove one record, returning it if present.
    fn remove(&self, scope: &TenantScope, key: &K) -> Option<V>;
    /// Clear all records for a tenant (rebuild support).
    fn clear_tenant(&self, scope: &TenantScope);
}

impl<K, V, S> TenantStore<K, V> for Arc<S>
where
    S: TenantStore<K, V> + ?Sized,
{
    fn get(&self, scope: &TenantScope, key: &K) -> Option<V> {
        (**self).get(scope, key)
    }

    fn upsert(&self, scope: &TenantScope, key: K, value: V) {
        (**self).upsert(scope, key, value)
    }

    fn list(&self, scope: &TenantScope) -> Vec<V> {
        (**self).list(scope)
    }

    fn remove(&self, scope: &TenantScope, key: &K) -> Option<V> {
        (**self).remove(scope, key)
    }

    fn clear_tenant(&self, scope: &TenantScope) {
        (**self).clear_tenant(scope)
    }
}

/// In-memory tenant-isolated store.
///
/// Keys records by `(TenantId, K)`; `list` filters by the scope's tenant, so
/// data written under one tenant is invisible to every other scope.
#[derive(Debug)]
pub struct InMemoryTenantStore<K, V> {
    inner: RwLock<HashMap<(TenantId, K), V>>,
}

impl<K, V> InMemoryTenantStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryTenantStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> TenantStore<K, V> for InMemoryTenantStore<K, V>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, scope: &TenantScope, key: &K) -> Option<V> {
        let map = self.inner.read().ok()?;
        map.get(&(scope.tenant_id(), key.clone())).cloned()
    }

    fn upsert(&self, scope: &TenantScope, key: K, value: V) {
        if let Ok(mut map) = self.inner.write() {
            map.insert((scope.tenant_id(), key), value);
        }
    }

    fn list(&self, scope: &TenantScope) -> Vec<V> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.iter()
            .filter_map(|((t, _k), v)| {
                if *t == scope.tenant_id() {
                    Some(v.clone())
                } else {
                    None
                }
            })
            .collect()
    }

    fn remove(&self, scope: &TenantScope, key: &K) -> Option<V> {
        let mut map = self.inner.write().ok()?;
        map.remove(&(scope.tenant_id(), key.clone()))
    }

    fn clear_tenant(&self, scope: &TenantScope) {
        if let Ok(mut map) = self.inner.write() {
            map.retain(|(t, _k), _v| *t != scope.tenant_id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_invisible_to_other_tenant_scopes() {
        let store: InMemoryTenantStore<u32, String> = InMemoryTenantStore::new();
        let scope_a = TenantScope::resolve(TenantId::new());
        let scope_b = TenantScope::resolve(TenantId::new());

        store.upsert(&scope_a, 1, "alpha".to_string());
        store.upsert(&scope_b, 1, "beta".to_string());

        assert_eq!(store.get(&scope_a, &1), Some("alpha".to_string()));
        assert_eq!(store.get(&scope_b, &1), Some("beta".to_string()));
        assert_eq!(store.list(&scope_a).len(), 1);
    }

    #[test]
    fn clear_tenant_only_affects_the_scoped_tenant() {
        let store: InMemoryTenantStore<u32, String> = InMemoryTenantStore::new();
        let scope_a = TenantScope::resolve(TenantId::new());
        let scope_b = TenantScope::resolve(TenantId::new());

        store.upsert(&scope_a, 1, "alpha".to_string());
        store.upsert(&scope_b, 2, "beta".to_string());
        store.clear_tenant(&scope_a);

        assert!(store.list(&scope_a).is_empty());
        assert_eq!(store.list(&scope_b).len(), 1);
    }
}
