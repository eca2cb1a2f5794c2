use std::sync::Arc;

use chrono::NaiveDate;
use lexbook_core::error::CoreError;
use lexbook_schedule::{Clock, SameDayPolicy};
use salvo::async_trait;

use crate::error::AppResult;

/// Clock and same-day policy that decide which date counts as "today".
#[derive(Clone)]
pub struct ScheduleContext {
    pub clock: Arc<dyn Clock>,
    pub policy: SameDayPolicy,
}

impl ScheduleContext {
    /// First date eligible for an occurrence right now.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.policy.anchor_from(self.clock.as_ref())
    }

    /// Calendar date of the clock, ignoring the same-day policy.
    #[must_use]
    pub fn calendar_today(&self) -> NaiveDate {
        self.clock.today()
    }
}

pub struct ScheduleHandler {
    pub context: ScheduleContext,
}

#[async_trait]
impl salvo::Handler for ScheduleHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(self.context.clone());
    }
}

/// ## Summary
/// Retrieves the schedule context from the depot.
///
/// ## Errors
/// Returns an error if the schedule context is not found in the depot.
pub fn get_schedule_from_depot(depot: &salvo::Depot) -> AppResult<ScheduleContext> {
    depot
        .obtain::<ScheduleContext>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Schedule context not found in depot").into())
}
