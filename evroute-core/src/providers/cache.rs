#[cfg(test)]
#[path = "../../tests/unit/providers/cache_test.rs"]
mod cache_test;

use super::*;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::sync::RwLock;

/// A thread safe memoization storage. Only successful results are stored.
struct Memo<K, V> {
    storage: RwLock<FxHashMap<K, V>>,
}

impl<K: Eq + Hash, V: Clone> Memo<K, V> {
    fn new() -> Self {
        Self { storage: RwLock::new(FxHashMap::default()) }
    }

    fn get_or_try_insert(&self, key: K, create: impl FnOnce() -> GenericResult<V>) -> GenericResult<V> {
        if let Some(value) = self.storage.read().ok().and_then(|storage| storage.get(&key).cloned()) {
            return Ok(value);
        }

        let value = create()?;
        if let Ok(mut storage) = self.storage.write() {
            storage.insert(key, value.clone());
        }

        Ok(value)
    }

    fn len(&self) -> usize {
        self.storage.read().map(|storage| storage.len()).unwrap_or_default()
    }

    fn clear(&self) {
        if let Ok(mut storage) = self.storage.write() {
            storage.clear();
        }
    }
}

fn coordinates_key(points: &[&Point]) -> String {
    points.iter().map(|point| format!("{:.6},{:.6}", point.lon, point.lat)).collect::<Vec<_>>().join(";")
}

/// Caches responses of inner road routing provider by coordinates.
pub struct CachedRouting<P: RoadRoutingProvider> {
    inner: P,
    memo: Memo<String, RouteData>,
}

impl<P: RoadRoutingProvider> CachedRouting<P> {
    /// Creates a new instance of `CachedRouting`.
    pub fn new(inner: P) -> Self {
        Self { inner, memo: Memo::new() }
    }

    /// Returns amount of cached routes.
    pub fn size(&self) -> usize {
        self.memo.len()
    }

    /// Removes all cached routes.
    pub fn clear(&self) {
        self.memo.clear()
    }
}

impl<P: RoadRoutingProvider> RoadRoutingProvider for CachedRouting<P> {
    fn get_route(&self, start: &Point, end: &Point, waypoints: &[Point]) -> GenericResult<RouteData> {
        let points = std::iter::once(start).chain(waypoints.iter()).chain(std::iter::once(end)).collect::<Vec<_>>();

        self.memo.get_or_try_insert(coordinates_key(points.as_slice()), || self.inner.get_route(start, end, waypoints))
    }
}

/// Caches responses of inner station directory by query parameters.
pub struct CachedStations<P: StationDirectoryProvider> {
    inner: P,
    memo: Memo<String, Vec<ChargingStation>>,
}

impl<P: StationDirectoryProvider> CachedStations<P> {
    /// Creates a new instance of `CachedStations`.
    pub fn new(inner: P) -> Self {
        Self { inner, memo: Memo::new() }
    }

    /// Returns amount of cached queries.
    pub fn size(&self) -> usize {
        self.memo.len()
    }

    /// Removes all cached queries.
    pub fn clear(&self) {
        self.memo.clear()
    }
}

impl<P: StationDirectoryProvider> StationDirectoryProvider for CachedStations<P> {
    fn stations_nearby(&self, point: &Point, radius: Distance) -> GenericResult<Vec<ChargingStation>> {
        let key = format!("nearby:{}:{radius:.3}", coordinates_key(&[point]));

        self.memo.get_or_try_insert(key, || self.inner.stations_nearby(point, radius))
    }

    fn stations_along_route(
        &self,
        start: &Point,
        end: &Point,
        corridor_width: Distance,
    ) -> GenericResult<Vec<ChargingStation>> {
        let key = format!("along:{}:{corridor_width:.3}", coordinates_key(&[start, end]));

        self.memo.get_or_try_insert(key, || self.inner.stations_along_route(start, end, corridor_width))
    }
}
