//! JSON export of the dashboard payload.

use averia_model::Dashboard;

/// Serializes the full payload, resolved column map included, as pretty
/// JSON for downstream tooling.
pub fn dashboard_json(dashboard: &Dashboard) -> serde_json::Result<String> {
    serde_json::to_string_pretty(dashboard)
}
