//! Traffic congestion anomaly detection.
//!
//! Probes a short synthetic route from the complaint location to a point
//! offset by a fixed delta on both axes, once with live traffic and once
//! free-flow, and flags an anomaly when the traffic delay ratio strictly
//! exceeds the threshold. This is a coarse, fixed-bearing proxy for local
//! congestion, not a measurement of the complaint's own road.

use std::sync::Arc;

use janawaaz_maps::{DirectionsApi, TrafficMode};
use janawaaz_priority_models::{Coordinates, TrafficSignal};

/// Compares live-traffic and free-flow travel times near a location.
pub struct TrafficAnomalyDetector {
    directions: Arc<dyn DirectionsApi>,
    probe_offset_degrees: f64,
    threshold: f64,
}

impl TrafficAnomalyDetector {
    /// Creates a detector probing `probe_offset_degrees` away and flagging
    /// ratios above `threshold`.
    #[must_use]
    pub fn new(
        directions: Arc<dyn DirectionsApi>,
        probe_offset_degrees: f64,
        threshold: f64,
    ) -> Self {
        Self {
            directions,
            probe_offset_degrees,
            threshold,
        }
    }

    /// Issues both routing queries concurrently and compares them.
    ///
    /// If either query fails or lacks its duration the result is
    /// [`TrafficSignal::NORMAL`]; one surviving duration is never used on
    /// its own.
    pub async fn detect(&self, origin: Coordinates) -> TrafficSignal {
        let destination = origin.offset_by(self.probe_offset_degrees);

        let (live, free_flow) = futures::future::join(
            self.directions.route(origin, destination, TrafficMode::Live),
            self.directions.route(origin, destination, TrafficMode::FreeFlow),
        )
        .await;

        let (live, free_flow) = match (live, free_flow) {
            (Ok(live), Ok(free_flow)) => (live, free_flow),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("Traffic probe from {origin} failed: {e}");
                return TrafficSignal::NORMAL;
            }
        };

        let (Some(with_traffic), Some(without_traffic)) =
            (live.duration_in_traffic_secs, free_flow.duration_secs)
        else {
            log::warn!("Traffic probe from {origin} returned no usable durations");
            return TrafficSignal::NORMAL;
        };

        let Some(ratio) = congestion_ratio(with_traffic, without_traffic) else {
            log::debug!("Zero free-flow duration from {origin}; treating traffic as normal");
            return TrafficSignal::NORMAL;
        };

        let is_anomalous = ratio > self.threshold;
        log::debug!(
            "Traffic near {origin}: {with_traffic}s vs {without_traffic}s, \
             ratio {ratio:.3} (threshold {}) anomalous={is_anomalous}",
            self.threshold
        );

        TrafficSignal { is_anomalous }
    }
}

/// `(with - without) / without`, or `None` when the baseline is zero.
#[allow(clippy::cast_precision_loss)]
fn congestion_ratio(with_traffic_secs: u64, without_traffic_secs: u64) -> Option<f64> {
    if without_traffic_secs == 0 {
        return None;
    }
    let with_traffic = with_traffic_secs as f64;
    let without_traffic = without_traffic_secs as f64;
    Some((with_traffic - without_traffic) / without_traffic)
}
