use serde::{Deserialize, Serialize};

/// A phase in a named kill chain, e.g. `lockheed-martin-cyber-kill-chain` / `command-and-control`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillChainPhase {
    pub kill_chain_name: String,
    pub phase_name: String,
}

impl KillChainPhase {
    pub fn new(kill_chain_name: impl Into<String>, phase_name: impl Into<String>) -> Self {
        Self {
            kill_chain_name: kill_chain_name.into(),
            phase_name: phase_name.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillChainPhasesProperty {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    kill_chain_phases: Vec<KillChainPhase>,
}

impl KillChainPhasesProperty {
    pub fn get(&self) -> &[KillChainPhase] {
        &self.kill_chain_phases
    }

    /// Append a phase. Duplicates are kept.
    pub fn add(&mut self, kill_chain_name: impl Into<String>, phase_name: impl Into<String>) {
        self.kill_chain_phases
            .push(KillChainPhase::new(kill_chain_name, phase_name));
    }
}
