//! Ticketing service
//!
//! Runs a purchase end to end: validation, pricing, payment routing, result
//! assembly and the buyer notification. Once validation passes the purchase is
//! confirmed; payment and email failures are logged, never returned. The email
//! is sent on a background task so a slow mail provider never holds the result.

use std::sync::Arc;

use crate::app::confirmation::{confirmation_message, ConfirmationEmail, PurchaseSummary};
use crate::domain::entities::{PaymentMethod, PurchaseRequest, PurchaseResult};
use crate::domain::ports::{Clock, Notifier, OpeningCalendar, PaymentInitiator, UserDirectory};
use crate::domain::{pricing, rules};
use crate::error::RuleViolation;

/// Service for buying park tickets
pub struct TicketingService<U, C, P, N>
where
    U: UserDirectory,
    C: OpeningCalendar,
    P: PaymentInitiator,
    N: Notifier + ?Sized,
{
    users: Arc<U>,
    calendar: Arc<C>,
    payments: Arc<P>,
    notifier: Arc<N>,
    clock: Arc<dyn Clock>,
}

impl<U, C, P, N> TicketingService<U, C, P, N>
where
    U: UserDirectory,
    C: OpeningCalendar,
    P: PaymentInitiator,
    N: Notifier + ?Sized,
{
    pub fn new(
        users: Arc<U>,
        calendar: Arc<C>,
        payments: Arc<P>,
        notifier: Arc<N>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            calendar,
            payments,
            notifier,
            clock,
        }
    }

    /// Buy tickets for every visitor in the request
    ///
    /// The request is left untouched; the result carries priced copies of its
    /// visitors.
    pub async fn buy_tickets(
        &self,
        request: &PurchaseRequest,
    ) -> Result<PurchaseResult, RuleViolation>
    where
        N: 'static,
    {
        let user_exists = self.users.exists(&request.user_id).await;
        let park_open = self.calendar.is_open(request.visit_date).await;

        rules::validate(request, user_exists, park_open, self.clock.today())?;

        let visitors = pricing::price_visitors(&request.visitors);
        let total = pricing::total_for(&visitors);

        let (payment_redirect_url, pay_at_ticket_office) = match request.payment_method {
            PaymentMethod::Card => {
                match self
                    .payments
                    .create_payment(total, &request.currency)
                    .await
                {
                    Ok(url) => (Some(url), false),
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            user_id = %request.user_id,
                            %total,
                            "Failed to create card payment"
                        );
                        (None, false)
                    }
                }
            }
            PaymentMethod::Cash => (None, true),
            // Rejected by validation
            PaymentMethod::Unspecified => (None, false),
        };

        let summary = PurchaseSummary {
            buyer_email: request.buyer_email.trim(),
            visit_date: request.visit_date,
            visitors: &visitors,
            total,
            currency: &request.currency,
            payment_method: request.payment_method,
            payment_redirect_url: payment_redirect_url.as_deref(),
        };

        let confirmation_message = confirmation_message(&summary);
        let email = ConfirmationEmail::compose(&summary);

        tracing::info!(
            user_id = %request.user_id,
            visit_date = %request.visit_date,
            tickets = visitors.len(),
            %total,
            currency = %request.currency,
            payment_method = %request.payment_method,
            "Purchase confirmed"
        );

        // Fire and forget, log errors
        let notifier = self.notifier.clone();
        let to = summary.buyer_email.to_string();
        tokio::spawn(async move {
            if let Err(e) = notifier.send(&to, &email.subject, &email.body).await {
                tracing::warn!(error = %e, to = %to, "Failed to send purchase confirmation");
            }
        });

        Ok(PurchaseResult {
            success: true,
            tickets_count: visitors.len(),
            visit_date: request.visit_date,
            payment_redirect_url,
            pay_at_ticket_office,
            confirmation_message,
            total_amount: total,
            currency: request.currency.clone(),
            visitors,
        })
    }
}
