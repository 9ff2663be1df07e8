//! Budget hierarchies and the derived reports the reconciliation pass
//! produces.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{ensure_non_negative, AmountError, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A planned allocation over a date range, organized as
/// budget → line → item. Item ids are globally unique so expenses can
/// reference them directly.
pub struct Budget {
    pub id: Uuid,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub lines: Vec<BudgetLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetLine {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub items: Vec<BudgetItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetItem {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
}

impl Budget {
    pub fn new(
        amount: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, AmountError> {
        Ok(Self {
            id: Uuid::new_v4(),
            amount: ensure_non_negative(amount)?,
            start_date,
            end_date,
            lines: Vec::new(),
        })
    }

    pub fn push_line(&mut self, line: BudgetLine) -> Uuid {
        let id = line.id;
        self.lines.push(line);
        id
    }

    /// Flat view over every item id in the hierarchy.
    pub fn item_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.lines
            .iter()
            .flat_map(|line| line.items.iter().map(|item| item.id))
    }
}

impl BudgetLine {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn push_item(&mut self, item: BudgetItem) -> Uuid {
        let id = item.id;
        self.items.push(item);
        id
    }
}

impl BudgetItem {
    pub fn new(description: impl Into<String>, amount: f64) -> Result<Self, AmountError> {
        Ok(Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount: ensure_non_negative(amount)?,
        })
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Spent/remaining figures for one budget item.
pub struct ItemReport {
    pub item_id: Uuid,
    pub description: String,
    pub planned: f64,
    pub spent: f64,
    pub remaining: f64,
}

impl ItemReport {
    pub fn from_parts(item: &BudgetItem, spent: f64) -> Self {
        Self {
            item_id: item.id,
            description: item.description.clone(),
            planned: item.amount,
            spent,
            remaining: item.amount - spent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Per-line rollup of its item figures.
pub struct LineReport {
    pub line_id: Uuid,
    pub title: String,
    pub spent: f64,
    pub items: Vec<ItemReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Top-level reconciliation figures for one budget.
pub struct BudgetReport {
    pub budget_id: Uuid,
    pub allocated: f64,
    pub total_spent: f64,
    pub remaining: f64,
    pub utilization: f64,
    pub health: BudgetHealth,
    pub lines: Vec<LineReport>,
}

impl BudgetReport {
    /// Assembles the budget-level figures from the per-line rollups.
    /// Utilization of a zero-allocation budget is defined as 0.
    pub fn from_parts(budget: &Budget, total_spent: f64, lines: Vec<LineReport>) -> Self {
        let utilization = if budget.amount.abs() < f64::EPSILON {
            0.0
        } else {
            total_spent / budget.amount * 100.0
        };
        Self {
            budget_id: budget.id,
            allocated: budget.amount,
            total_spent,
            remaining: budget.amount - total_spent,
            utilization,
            health: BudgetHealth::classify(budget.amount, total_spent),
            lines,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Describes whether spending is aligned with the allocation.
pub enum BudgetHealth {
    OnTrack,
    OverBudget,
    UnderBudget,
    Empty,
}

impl BudgetHealth {
    fn classify(allocated: f64, spent: f64) -> Self {
        if allocated.abs() < f64::EPSILON && spent.abs() < f64::EPSILON {
            BudgetHealth::Empty
        } else if spent > allocated {
            BudgetHealth::OverBudget
        } else if spent < allocated {
            BudgetHealth::UnderBudget
        } else {
            BudgetHealth::OnTrack
        }
    }
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetHealth::OnTrack => "On Track",
            BudgetHealth::OverBudget => "Over Budget",
            BudgetHealth::UnderBudget => "Under Budget",
            BudgetHealth::Empty => "Empty",
        };
        f.write_str(label)
    }
}
