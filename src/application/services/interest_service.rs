//! Simple-interest calculation for warrants.

use std::sync::Arc;

use crate::domain::DayCounter;
use crate::domain::entities::{CalculationRequest, CalculationResult};
use crate::error::InputError;
use crate::utils::date_range::CalendarDayCounter;

/// Highest accepted annual rate, in percent.
pub const MAX_RATE_PERCENT: f64 = 20.0;

/// Actual/365 day-count denominator.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Service computing simple interest between two dates.
///
/// Stateless apart from its day counter: every call is an independent
/// request/response.
pub struct InterestService<C: DayCounter> {
    day_counter: Arc<C>,
}

impl InterestService<CalendarDayCounter> {
    /// Creates a service counting calendar days with [`CalendarDayCounter`].
    pub fn calendar() -> Self {
        Self::new(Arc::new(CalendarDayCounter::new()))
    }
}

impl<C: DayCounter> InterestService<C> {
    pub fn new(day_counter: Arc<C>) -> Self {
        Self { day_counter }
    }

    /// Validates a request and computes days, interest and total payback.
    ///
    /// # Validation
    ///
    /// Checked in order, the first failure wins:
    ///
    /// 1. `principal > 0`
    /// 2. `0 < rate_percent <= 20` (a zero rate is rejected)
    /// 3. both dates parse as `MM-DD-YY`
    /// 4. the end date is not before the start date
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] tagged with the failing rule's
    /// [`crate::error::InputErrorKind`].
    pub fn compute(&self, request: &CalculationRequest) -> Result<CalculationResult, InputError> {
        if request.principal.is_nan() || request.principal <= 0.0 {
            return Err(InputError::non_positive_amount());
        }

        let rate_percent = request.rate_percent;
        if rate_percent.is_nan() || rate_percent <= 0.0 || rate_percent > MAX_RATE_PERCENT {
            return Err(InputError::rate_out_of_range());
        }

        let days = self
            .day_counter
            .elapsed_days(&request.start_date, &request.end_date)
            .map_err(|e| {
                let field = if e.input() == request.start_date {
                    "Start date"
                } else {
                    "End date"
                };
                InputError::malformed_date(field, &e)
            })?;

        let days = u32::try_from(days).map_err(|_| InputError::end_before_start())?;

        let rate = request.rate_percent / 100.0;
        let interest = request.principal * rate * (f64::from(days) / DAYS_PER_YEAR);
        let total = request.principal + interest;

        Ok(CalculationResult {
            days,
            interest,
            total,
        })
    }
}

/// Computes one warrant with calendar day counting.
///
/// Shorthand for [`InterestService::calendar`] followed by
/// [`InterestService::compute`].
pub fn compute(
    principal: f64,
    rate_percent: f64,
    start_date: &str,
    end_date: &str,
) -> Result<CalculationResult, InputError> {
    InterestService::calendar().compute(&CalculationRequest::new(
        principal,
        rate_percent,
        start_date,
        end_date,
    ))
}
