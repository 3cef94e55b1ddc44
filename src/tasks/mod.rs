//! Simulated delayed operations
//!
//! The client fakes its login, checkout, and analysis round-trips with
//! fixed-duration timers. Here each one is an explicit async operation:
//! it resolves to a result (or failure) after a nominal delay, and a
//! paired [`CancelHandle`] aborts it cleanly when the surrounding dialog
//! is dismissed mid-flight. No ordering guarantees exist across
//! concurrent operations — none ever did.

use crate::core::error::TaskError;
use crate::session::Role;
use serde::Serialize;
use std::future::pending;
use tokio::sync::oneshot;
use tokio::time::{Duration, sleep};
use uuid::Uuid;

/// Nominal sign-in round-trip
pub const SIGN_IN_DELAY: Duration = Duration::from_millis(1000);

/// Nominal payment-processing round-trip
pub const PAYMENT_DELAY: Duration = Duration::from_millis(3000);

/// Cancels a paired in-flight operation.
///
/// Dropping the handle without calling [`cancel`](CancelHandle::cancel)
/// never cancels anything; the operation runs to completion.
pub struct CancelHandle {
    tx: oneshot::Sender<()>,
}

impl CancelHandle {
    /// Abort the paired operation; it resolves to [`TaskError::Cancelled`]
    pub fn cancel(self) {
        let _ = self.tx.send(());
    }
}

/// The receiving side passed into a simulated operation
pub struct CancelSignal {
    rx: Option<oneshot::Receiver<()>>,
}

impl CancelSignal {
    /// A signal that never fires, for callers without a dismiss path
    pub fn never() -> Self {
        Self { rx: None }
    }

    /// Resolves only when the paired handle actually cancelled
    async fn fired(self) {
        match self.rx {
            Some(rx) => {
                if rx.await.is_err() {
                    // handle dropped without cancelling
                    pending::<()>().await;
                }
            }
            None => pending::<()>().await,
        }
    }
}

/// Create a linked cancel handle and signal
pub fn cancellation() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = oneshot::channel();
    (CancelHandle { tx }, CancelSignal { rx: Some(rx) })
}

/// Run `op` after `delay`, unless the signal fires first
pub async fn simulate<T>(
    delay: Duration,
    cancel: CancelSignal,
    op: impl FnOnce() -> Result<T, TaskError>,
) -> Result<T, TaskError> {
    tokio::select! {
        _ = cancel.fired() => {
            tracing::debug!("simulated operation cancelled");
            Err(TaskError::Cancelled)
        }
        _ = sleep(delay) => op(),
    }
}

/// The role a mock sign-in derives from the email address
pub fn role_for_email(email: &str) -> Role {
    if email.contains("admin") {
        Role::Admin
    } else if email.contains("instructor") {
        Role::Instructor
    } else {
        Role::Student
    }
}

/// Mock sign-in: validates the form, waits out the nominal round-trip,
/// then derives the role from the email. No credential is ever checked.
pub async fn sign_in(
    email: &str,
    password: &str,
    delay: Duration,
    cancel: CancelSignal,
) -> Result<Role, TaskError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(TaskError::Failed {
            message: "Please fill in all fields".to_string(),
        });
    }
    let role = role_for_email(email);
    tracing::debug!(%role, "sign-in submitted");
    simulate(delay, cancel, move || Ok(role)).await
}

/// Receipt returned by a completed mock payment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentReceipt {
    pub order_id: Uuid,
    pub amount: f64,
}

/// Mock checkout: resolves to a receipt after the nominal delay
pub async fn process_payment(
    amount: f64,
    delay: Duration,
    cancel: CancelSignal,
) -> Result<PaymentReceipt, TaskError> {
    if amount <= 0.0 {
        return Err(TaskError::Failed {
            message: "Payment amount must be positive".to_string(),
        });
    }
    simulate(delay, cancel, move || {
        Ok(PaymentReceipt {
            order_id: Uuid::new_v4(),
            amount,
        })
    })
    .await
}
