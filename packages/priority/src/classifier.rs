//! The priority classification pipeline.
//!
//! Runs in a fixed order, each step able to skip later ones:
//!
//! 1. Low-priority issue type → Low, skipping place and traffic lookups.
//! 2. Critical place nearby → High.
//! 3. Otherwise, traffic anomaly → High.
//! 4. Resolve the area name.
//! 5. Assemble the message.
//!
//! Every remote lookup degrades to its "no signal" value at the detector
//! boundary, so [`PriorityClassifier::classify`] always produces a result.

use std::sync::Arc;

use janawaaz_maps::{DirectionsApi, GeocodingApi, PlacesApi};
use janawaaz_priority_models::{
    ComplaintPriorityRequest, CriticalPlaceMatch, HIGH_TRAFFIC_REASON, Priority, PriorityResult,
    TRAFFIC_PLACE_NAME,
};

use crate::area::AreaNameResolver;
use crate::config::PriorityConfig;
use crate::critical_place::CriticalPlaceDetector;
use crate::traffic::TrafficAnomalyDetector;

/// Reason given for the low-priority issue type.
pub const MINOR_RESIDENTIAL_REASON: &str = "Minor residential issue";

/// Reason given when nothing escalates the complaint.
pub const GENERAL_COMPLAINT_REASON: &str = "General complaint";

const MESSAGE_PREFIX: &str = "Complaint registered successfully.";

/// Why a complaint was raised to High.
enum Escalation {
    CriticalPlace(CriticalPlaceMatch),
    Traffic,
}

impl Escalation {
    fn reason(&self) -> String {
        match self {
            Self::CriticalPlace(m) => format!("a key public service ({})", m.matched_term),
            Self::Traffic => HIGH_TRAFFIC_REASON.to_string(),
        }
    }

    fn place_name(&self) -> String {
        match self {
            Self::CriticalPlace(m) => m.place_name.clone(),
            Self::Traffic => TRAFFIC_PLACE_NAME.to_string(),
        }
    }
}

/// Orchestrates the detectors into a single [`PriorityResult`].
pub struct PriorityClassifier {
    low_priority_issue_type: String,
    critical_places: CriticalPlaceDetector,
    traffic: TrafficAnomalyDetector,
    area: AreaNameResolver,
}

impl PriorityClassifier {
    /// Wires the detectors to their maps collaborators using `config`.
    #[must_use]
    pub fn new(
        config: &PriorityConfig,
        places: Arc<dyn PlacesApi>,
        directions: Arc<dyn DirectionsApi>,
        geocoder: Arc<dyn GeocodingApi>,
    ) -> Self {
        Self {
            low_priority_issue_type: config.low_priority_issue_type.clone(),
            critical_places: CriticalPlaceDetector::new(
                places,
                config.critical_keywords.clone(),
                config.search_radius_meters,
            ),
            traffic: TrafficAnomalyDetector::new(
                directions,
                config.traffic_probe_offset_degrees,
                config.traffic_anomaly_threshold,
            ),
            area: AreaNameResolver::new(geocoder),
        }
    }

    /// Classifies a complaint.
    pub async fn classify(&self, request: &ComplaintPriorityRequest) -> PriorityResult {
        let at = request.coordinates;
        let is_low_priority = request.issue_type == self.low_priority_issue_type;

        let escalation = if is_low_priority {
            log::debug!(
                "Issue type '{}' is low priority; skipping place and traffic lookups",
                request.issue_type
            );
            None
        } else if let Some(place) = self.critical_places.detect(at).await {
            Some(Escalation::CriticalPlace(place))
        } else if self.traffic.detect(at).await.is_anomalous {
            Some(Escalation::Traffic)
        } else {
            None
        };

        let area_name = self.area.resolve(at).await;

        let result = match escalation {
            Some(escalation) => {
                let reason = escalation.reason();
                let place_name = escalation.place_name();
                let detail = match &escalation {
                    Escalation::CriticalPlace(_) => format!(
                        "The issue is located near {reason}. The identified place is {place_name}."
                    ),
                    Escalation::Traffic => format!("The area is experiencing {reason}."),
                };
                PriorityResult {
                    priority: Priority::High,
                    reason: reason.clone(),
                    high_priority_reason: Some(reason),
                    high_priority_place_name: Some(place_name),
                    area_name,
                    message: format!("{MESSAGE_PREFIX} Priority set to: High. Reason: {detail}"),
                }
            }
            None => {
                let (priority, reason) = if is_low_priority {
                    (Priority::Low, MINOR_RESIDENTIAL_REASON)
                } else {
                    (Priority::Medium, GENERAL_COMPLAINT_REASON)
                };
                PriorityResult {
                    priority,
                    reason: reason.to_string(),
                    high_priority_reason: None,
                    high_priority_place_name: None,
                    message: format!(
                        "{MESSAGE_PREFIX} Priority set to: {priority}. \
                         Reason: {reason} in {area_name}."
                    ),
                    area_name,
                }
            }
        };

        log::info!(
            "Classified '{}' complaint at {at} as {} ({})",
            request.issue_type,
            result.priority,
            result.reason
        );

        result
    }
}
