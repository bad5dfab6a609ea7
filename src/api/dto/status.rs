/*
 * Responsibility
 * - Response DTO for GET /api/status
 */
use serde::Serialize;

use crate::services::probes::ProbeResult;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub services: ServiceStatuses,
}

#[derive(Debug, Serialize)]
pub struct ServiceStatuses {
    pub relational: ProbeResult,
    pub cache: ProbeResult,
}
