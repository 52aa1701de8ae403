use chrono::{DateTime, Utc};

use crate::errors::CoreError;
use crate::formatting::format_currency;
use crate::models::notification::{Notification, NotificationCategory, NotificationType};
use crate::models::profile::NormalizedFigures;

/// Raises spending notifications and manages the notification list.
///
/// At most one critical and one warning expense notification exist at a
/// time; re-evaluating the same profile never duplicates them.
pub struct NotificationService {
    currency_symbol: String,
    warning_ratio: f64,
}

impl NotificationService {
    pub fn new(currency_symbol: impl Into<String>, warning_ratio: f64) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            warning_ratio,
        }
    }

    /// The notification the current figures call for, if any.
    ///
    /// Expenses above income → critical loss notice; expenses above the
    /// warning ratio of income → warning. `None` when a notification of
    /// the same type already exists in `existing`.
    pub fn evaluate(
        &self,
        figures: &NormalizedFigures,
        existing: &[Notification],
        now: DateTime<Utc>,
    ) -> Option<Notification> {
        let total = figures.total_expenses;
        let income = figures.monthly_income;

        let (kind, message) = if total > income {
            let loss = total - income;
            (
                NotificationType::Critical,
                format!(
                    "You are at a loss! Your expenses ({}) exceed your income ({}) by {}. Immediate action required!",
                    self.money(total),
                    self.money(income),
                    self.money(loss)
                ),
            )
        } else if total > income * self.warning_ratio {
            (
                NotificationType::Warning,
                format!(
                    "Your expenses ({}) are approaching {}% of your income! Please review and optimize your spending.",
                    self.money(total),
                    (self.warning_ratio * 100.0).round()
                ),
            )
        } else {
            return None;
        };

        let already_raised = existing
            .iter()
            .any(|n| n.notification_type == kind && n.category == NotificationCategory::Expense);
        if already_raised {
            return None;
        }

        tracing::info!(kind = ?kind, "Raising expense notification");
        Some(Notification::new(kind, NotificationCategory::Expense, message, now))
    }

    pub fn unread_count(&self, notifications: &[Notification]) -> usize {
        notifications.iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&self, notifications: &mut [Notification], id: &str) -> Result<(), CoreError> {
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("notification {id}")))?;
        notification.read = true;
        Ok(())
    }

    pub fn dismiss(&self, notifications: &mut Vec<Notification>, id: &str) -> Result<Notification, CoreError> {
        let idx = notifications
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("notification {id}")))?;
        Ok(notifications.remove(idx))
    }

    fn money(&self, value: f64) -> String {
        format_currency(&self.currency_symbol, value)
    }
}
