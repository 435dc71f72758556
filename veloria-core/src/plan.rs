//! Subscription plan.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::constants::PLAN_KEY;
use crate::error::{VeloriaError, VeloriaResult};
use crate::notify::{Change, ChangeBus};
use crate::storage::KeyValueStorage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlanId {
    #[default]
    Lite,
    Pro,
    Elite,
}

impl PlanId {
    pub fn as_str(self) -> &'static str {
        match self {
            PlanId::Lite => "lite",
            PlanId::Pro => "pro",
            PlanId::Elite => "elite",
        }
    }

    /// Monthly price in roubles; `Lite` is free.
    pub fn monthly_price_rub(self) -> u32 {
        match self {
            PlanId::Lite => 0,
            PlanId::Pro => 999,
            PlanId::Elite => 2999,
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanId::Lite => write!(f, "Lite"),
            PlanId::Pro => write!(f, "Pro"),
            PlanId::Elite => write!(f, "Elite"),
        }
    }
}

impl FromStr for PlanId {
    type Err = VeloriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lite" => Ok(PlanId::Lite),
            "pro" => Ok(PlanId::Pro),
            "elite" => Ok(PlanId::Elite),
            _ => Err(VeloriaError::InvalidInput(format!("unknown plan '{}'", s))),
        }
    }
}

#[derive(Clone)]
pub struct PlanStore {
    storage: Arc<dyn KeyValueStorage>,
    bus: ChangeBus,
}

impl PlanStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, bus: ChangeBus) -> Self {
        PlanStore { storage, bus }
    }

    /// The stored plan; anything unrecognised reads as `Lite`.
    pub fn load(&self) -> PlanId {
        self.storage
            .get(PLAN_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn save(&self, plan: PlanId) -> VeloriaResult<()> {
        self.storage.set(PLAN_KEY, plan.as_str())?;
        self.bus.publish(Change::Plan);
        Ok(())
    }

    pub fn cancel(&self) -> VeloriaResult<()> {
        self.save(PlanId::Lite)
    }
}
