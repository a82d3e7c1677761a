//! Transaction execution cost relative to the per-block limits.

use serde::{Deserialize, Serialize};

use super::holding_percentage::to_fixed;

/// Per-block execution budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockExecutionLimits {
    pub write_length: u64,
    pub write_count: u64,
    pub read_length: u64,
    pub read_count: u64,
    pub runtime: u64,
}

pub const BLOCK_EXECUTION_LIMITS: BlockExecutionLimits = BlockExecutionLimits {
    write_length: 15_000_000,
    write_count: 15_000,
    read_length: 100_000_000,
    read_count: 15_000,
    runtime: 5_000_000_000,
};

impl Default for BlockExecutionLimits {
    fn default() -> Self {
        BLOCK_EXECUTION_LIMITS
    }
}

impl BlockExecutionLimits {
    pub fn limit(&self, key: ExecutionCostKey) -> u64 {
        match key {
            ExecutionCostKey::WriteLength => self.write_length,
            ExecutionCostKey::WriteCount => self.write_count,
            ExecutionCostKey::ReadLength => self.read_length,
            ExecutionCostKey::ReadCount => self.read_count,
            ExecutionCostKey::Runtime => self.runtime,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionCostKey {
    WriteLength,
    WriteCount,
    ReadLength,
    ReadCount,
    Runtime,
}

impl ExecutionCostKey {
    pub const ALL: [ExecutionCostKey; 5] = [
        ExecutionCostKey::WriteLength,
        ExecutionCostKey::WriteCount,
        ExecutionCostKey::ReadLength,
        ExecutionCostKey::ReadCount,
        ExecutionCostKey::Runtime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExecutionCostKey::WriteLength => "write length",
            ExecutionCostKey::WriteCount => "write count",
            ExecutionCostKey::ReadLength => "read length",
            ExecutionCostKey::ReadCount => "read count",
            ExecutionCostKey::Runtime => "runtime",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExecutionCostKey::WriteLength => "Total bytes written to storage",
            ExecutionCostKey::WriteCount => "Number of write operations",
            ExecutionCostKey::ReadLength => "Total bytes read from storage",
            ExecutionCostKey::ReadCount => "Number of read operations",
            ExecutionCostKey::Runtime => "Clarity VM execution time",
        }
    }
}

/// `value / limit * 100`, capped at 100. A non-positive limit gives 0.
pub fn calculate_execution_cost_percentage(value: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        return 0.0;
    }
    (value / limit * 100.0).min(100.0)
}

pub fn format_execution_cost_percentage(percentage: f64) -> String {
    if percentage == 0.0 {
        return "0%".to_string();
    }
    if percentage < 0.0001 {
        return "<0.0001%".to_string();
    }
    if percentage < 0.01 {
        return format!("{}%", to_fixed(percentage, 4));
    }
    format!("{}%", to_fixed(percentage, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_percentage() {
        assert_eq!(calculate_execution_cost_percentage(50.0, 100.0), 50.0);
        assert_eq!(calculate_execution_cost_percentage(25.0, 100.0), 25.0);
        assert_eq!(calculate_execution_cost_percentage(1.0, 4.0), 25.0);
        assert_eq!(calculate_execution_cost_percentage(0.0, 100.0), 0.0);
        assert_eq!(calculate_execution_cost_percentage(1.0, 1000.0), 0.1);
        assert_eq!(calculate_execution_cost_percentage(1.0, 10000.0), 0.01);
    }

    #[test]
    fn test_non_positive_limit_is_zero() {
        assert_eq!(calculate_execution_cost_percentage(50.0, 0.0), 0.0);
        assert_eq!(calculate_execution_cost_percentage(50.0, -10.0), 0.0);
    }

    #[test]
    fn test_percentage_is_capped() {
        assert_eq!(calculate_execution_cost_percentage(150.0, 100.0), 100.0);
        assert_eq!(calculate_execution_cost_percentage(200.0, 50.0), 100.0);
    }

    #[test]
    fn test_format_zero_and_tiny() {
        assert_eq!(format_execution_cost_percentage(0.0), "0%");
        assert_eq!(format_execution_cost_percentage(0.00001), "<0.0001%");
        assert_eq!(format_execution_cost_percentage(0.00009), "<0.0001%");
    }

    #[test]
    fn test_format_small_uses_four_digits() {
        assert_eq!(format_execution_cost_percentage(0.0001), "0.0001%");
        assert_eq!(format_execution_cost_percentage(0.001), "0.0010%");
        assert_eq!(format_execution_cost_percentage(0.0099), "0.0099%");
    }

    #[test]
    fn test_format_regular_uses_two_digits() {
        assert_eq!(format_execution_cost_percentage(0.01), "0.01%");
        assert_eq!(format_execution_cost_percentage(0.1), "0.10%");
        assert_eq!(format_execution_cost_percentage(1.0), "1.00%");
        assert_eq!(format_execution_cost_percentage(99.99), "99.99%");
        assert_eq!(format_execution_cost_percentage(100.0), "100.00%");
    }

    #[test]
    fn test_limits_by_key() {
        let limits = BlockExecutionLimits::default();
        assert_eq!(limits.limit(ExecutionCostKey::Runtime), 5_000_000_000);
        assert_eq!(limits.limit(ExecutionCostKey::ReadCount), 15_000);
        assert_eq!(ExecutionCostKey::WriteLength.label(), "write length");
        assert_eq!(
            serde_json::to_string(&ExecutionCostKey::ReadLength).unwrap(),
            "\"read_length\""
        );
    }
}
