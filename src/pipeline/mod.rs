pub mod aggregate;
pub mod correlation;
pub mod filter;
pub mod widgets;

pub use aggregate::{aggregate, mean_by, split_by_flag, AggregateResult, Measure};
pub use correlation::{correlate, CorrelationMatrix};
pub use filter::{FilterCriteria, NumericRange};
pub use widgets::{MultiSelect, NumberInput, RangeSlider, SingleSelect};
