// src/pipeline/widgets.rs
//
// Widget state is rebuilt from the request on every render. Domains come from
// the loaded table, and requested values outside the domain are dropped.

use crate::errors::ServerError;
use crate::params::Params;
use crate::pipeline::filter::NumericRange;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelect {
    pub name: &'static str,
    pub label: &'static str,
    pub options: Vec<String>,
    pub selected: Vec<String>,
}

impl MultiSelect {
    pub fn derive(
        name: &'static str,
        label: &'static str,
        options: Vec<String>,
        params: &Params,
    ) -> Self {
        let requested = params.get_all(name);
        let selected = options
            .iter()
            .filter(|o| requested.contains(&o.as_str()))
            .cloned()
            .collect();
        Self {
            name,
            label,
            options,
            selected,
        }
    }

    pub fn selected_set(&self) -> BTreeSet<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.selected.iter().any(|s| s == option)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SingleSelect {
    pub name: &'static str,
    pub label: &'static str,
    pub options: Vec<String>,
    /// `None` only when the domain is empty.
    pub selected: Option<String>,
}

impl SingleSelect {
    /// Keeps the requested value when it is still offered, otherwise falls
    /// back to the first option.
    pub fn derive(
        name: &'static str,
        label: &'static str,
        options: Vec<String>,
        params: &Params,
    ) -> Self {
        let selected = params
            .get(name)
            .and_then(|req| options.iter().find(|o| o.as_str() == req))
            .or_else(|| options.first())
            .cloned();
        Self {
            name,
            label,
            options,
            selected,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberInput {
    pub name: &'static str,
    pub label: &'static str,
    pub bounds: NumericRange,
    pub value: f64,
}

impl NumberInput {
    pub fn derive(
        name: &'static str,
        label: &'static str,
        bounds: NumericRange,
        default: f64,
        params: &Params,
    ) -> Result<Self, ServerError> {
        let value = bounds.clamp(params.number(name)?.unwrap_or(default));
        Ok(Self {
            name,
            label,
            bounds,
            value,
        })
    }
}

/// Two-handled slider, submitted as `<name>_min` and `<name>_max`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSlider {
    pub name: &'static str,
    pub label: &'static str,
    pub bounds: NumericRange,
    pub value: NumericRange,
}

impl RangeSlider {
    pub fn derive(
        name: &'static str,
        label: &'static str,
        bounds: NumericRange,
        params: &Params,
    ) -> Result<Self, ServerError> {
        let lo = params.number(&Self::min_key(name))?.unwrap_or(bounds.min);
        let hi = params.number(&Self::max_key(name))?.unwrap_or(bounds.max);
        let (lo, hi) = (bounds.clamp(lo), bounds.clamp(hi));
        Ok(Self {
            name,
            label,
            bounds,
            value: NumericRange::new(lo.min(hi), lo.max(hi)),
        })
    }

    pub fn min_key(name: &str) -> String {
        format!("{name}_min")
    }

    pub fn max_key(name: &str) -> String {
        format!("{name}_max")
    }
}
