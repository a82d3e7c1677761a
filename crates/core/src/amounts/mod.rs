//! Amounts module - raw token amounts, decimal adjustment, and percentages.

mod amounts_errors;
mod amounts_model;
mod decimal_adjust;
mod execution_cost;
mod holding_percentage;
mod pow;

#[cfg(test)]
mod amounts_model_tests;

pub use amounts_errors::AmountError;
pub use amounts_model::{AdjustedAmount, RawAmount};
pub use decimal_adjust::{ft_decimal_adjusted_balance, micro_to_stacks, micro_to_stacks_formatted};
pub use execution_cost::{
    calculate_execution_cost_percentage, format_execution_cost_percentage, BlockExecutionLimits,
    ExecutionCostKey, BLOCK_EXECUTION_LIMITS,
};
pub use holding_percentage::{calculate_holding_percentage, format_holding_percentage};
pub use pow::{bigint_pow, pow10};
