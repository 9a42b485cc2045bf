//! Phantom nodes: virtual query endpoints that sit partway along a real edge
//! rather than exactly on a graph node (C3). Resolving a raw coordinate down to
//! a [`PhantomNodes`] pair is the job of whatever spatial index sits in front of
//! this engine — out of scope here, this module only defines the interface and
//! the shared coordinate/distance vocabulary the seeding logic needs.

use ch_common::ids::NodeId;

/// A WGS84-ish coordinate, used only for the same-edge upper-bound proxy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance in meters, used as the same-edge upper-bound proxy
/// (§4.4). Deliberately a simple haversine rather than anything
/// projection-aware: the two points it's ever called on are a few meters
/// apart on the same road segment, so higher accuracy buys nothing.
pub fn haversine_distance_m(a: Coordinate, b: Coordinate) -> f64 {
    const EARTH_RADIUS_M: f64 = 6_371_000.0;

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().clamp(-1.0, 1.0).asin()
}

/// The two bounding nodes and projection ratio that locate a phantom point
/// along one real edge, for both the start and the target of a route.
///
/// A ratio of `0.0` means the phantom point coincides with `_u`; `1.0` means it
/// coincides with `_v`. [`PhantomNodes::is_valid`] distinguishes a resolved
/// pair from one that failed to snap to anything (e.g. no edge within snapping
/// distance of the query coordinate).
#[derive(Debug, Clone, Copy)]
pub struct PhantomNodes {
    pub start_u: NodeId,
    pub start_v: NodeId,
    pub start_ratio: f64,
    pub start_coord: Coordinate,

    pub target_u: NodeId,
    pub target_v: NodeId,
    pub target_ratio: f64,
    pub target_coord: Coordinate,
}

impl PhantomNodes {
    /// `false` if any of the four bounding nodes is `INVALID_NODE` — the
    /// resolver found no edge to project onto for at least one endpoint, and
    /// the engine must report the route unreachable without touching the graph.
    pub fn is_valid(&self) -> bool {
        let invalid = ch_common::ids::INVALID_NODE;
        self.start_u != invalid
            && self.start_v != invalid
            && self.target_u != invalid
            && self.target_v != invalid
    }
}

/// Resolves raw coordinates to [`PhantomNodes`] and snaps a coordinate to its
/// nearest graph node. Implemented by whatever spatial index (an R-tree over
/// edge geometries, typically) sits in front of the query engine; this crate
/// only consumes the result.
pub trait PhantomResolver {
    /// Project `start` and `target` onto their nearest routable edges.
    fn find_routing_starts(&self, start: Coordinate, target: Coordinate) -> PhantomNodes;

    /// Snap `coord` to the coordinate of its nearest graph node, for callers
    /// that want to display where a query actually started from.
    fn nearest_node(&self, coord: Coordinate) -> Coordinate;

    /// Node count of the graph this resolver indexes, so a caller holding only
    /// a resolver can size a [`crate::BidirectionalQuery`] without a separate
    /// handle to the graph.
    fn num_nodes(&self) -> u32;
}
