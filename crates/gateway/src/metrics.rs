use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Decision {
    Allow,
    Login,
    Unauthorized,
    Landing,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct DecisionLabels {
    pub decision: Decision,
}

#[derive(Clone, Debug, Default)]
pub struct GateMetrics {
    pub decisions: Family<DecisionLabels, Counter>,
    pub upstream_errors: Counter,
}

impl GateMetrics {
    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "gate_decisions",
            "Role gate decisions by outcome",
            self.decisions.clone(),
        );

        registry.register(
            "gate_upstream_errors",
            "Requests that failed to reach the upstream frontend",
            self.upstream_errors.clone(),
        );
    }

    pub fn record(&self, decision: Decision) {
        self.decisions
            .get_or_create(&DecisionLabels { decision })
            .inc();
    }
}
