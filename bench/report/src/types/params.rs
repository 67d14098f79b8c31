use super::tool_kind::ToolKind;
use byte_unit::{Byte, UnitType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct BenchmarkParams {
    pub tool_kind: ToolKind,
    pub base_block_size: u64,
    pub multipliers: Vec<u32>,
    pub total_volume_bytes: u64,
    pub source: String,
    pub sink: String,
    pub dd_path: String,
    pub remark: Option<String>,
    pub extra_info: Option<String>,
    pub gitref: Option<String>,
    pub gitref_date: Option<String>,
    pub pretty_name: String,
    pub bench_command: String,
    pub params_identifier: String,
}

impl BenchmarkParams {
    /// One-line dd invocation summary used in chart subtexts.
    pub fn format_sweep_info(&self) -> String {
        let volume = Byte::from_u64(self.total_volume_bytes).get_appropriate_unit(UnitType::Binary);
        format!(
            "{} -> {}  •  {} B Base Block  •  {} Multipliers  •  {:.0} per Run",
            self.source,
            self.sink,
            self.base_block_size,
            self.multipliers.len(),
            volume,
        )
    }
}
