//! Reservation notifications.
//!
//! Services compose [`Notification`]s from reservation state and hand them to a
//! [`Notifier`]. Delivery failures are logged and never fail the operation that
//! triggered them. The default [`LogNotifier`] emits a structured tracing event per
//! notification.

use async_trait::async_trait;
use entity::sea_orm_active_enums::ReservationStatus;

use crate::server::{
    error::internal::InternalError, model::reservation::Reservation, util::time::format_hh_mm,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    RequestReceived,
    ApprovalRequested,
    Approved,
    Rejected,
    Cancelled,
    ParticipantInvited,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub recipient_email: String,
    pub recipient_name: String,
    pub subject: String,
    pub body: String,
    pub kind: NotificationKind,
}

/// Someone who receives a notification.
#[derive(Debug, Clone)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

fn describe(reservation: &Reservation, room_name: &str) -> String {
    format!(
        "\"{}\" in {} on {} from {} to {} (reservation {})",
        reservation.event_name,
        room_name,
        reservation.event_date.format("%Y-%m-%d"),
        format_hh_mm(reservation.start_time),
        format_hh_mm(reservation.end_time),
        reservation.number,
    )
}

impl Notification {
    fn to(recipient: &Recipient, kind: NotificationKind, subject: String, body: String) -> Self {
        Self {
            recipient_email: recipient.email.clone(),
            recipient_name: recipient.name.clone(),
            subject,
            body,
            kind,
        }
    }

    pub fn request_received(
        recipient: &Recipient,
        reservation: &Reservation,
        room_name: &str,
    ) -> Self {
        Self::to(
            recipient,
            NotificationKind::RequestReceived,
            format!("Reservation request {} received", reservation.number),
            format!(
                "Hello {}, your request for {} has been received and is awaiting approval.",
                recipient.name,
                describe(reservation, room_name)
            ),
        )
    }

    pub fn approval_requested(
        recipient: &Recipient,
        reservation: &Reservation,
        room_name: &str,
    ) -> Self {
        Self::to(
            recipient,
            NotificationKind::ApprovalRequested,
            format!("Approval requested for {}", reservation.number),
            format!(
                "Hello {}, a new reservation needs your decision: {} for {} attendees.",
                recipient.name,
                describe(reservation, room_name),
                reservation.expected_attendees
            ),
        )
    }

    /// Tells the requester the outcome of an approval decision.
    pub fn decision(
        recipient: &Recipient,
        reservation: &Reservation,
        room_name: &str,
        reason: Option<&str>,
    ) -> Self {
        let (kind, verb) = match reservation.status {
            ReservationStatus::Approved => (NotificationKind::Approved, "approved"),
            _ => (NotificationKind::Rejected, "rejected"),
        };
        let mut body = format!(
            "Hello {}, your reservation {} has been {}.",
            recipient.name,
            describe(reservation, room_name),
            verb
        );
        if let Some(reason) = reason {
            body.push_str(&format!(" Reason: {}", reason));
        }

        Self::to(
            recipient,
            kind,
            format!("Reservation {} {}", reservation.number, verb),
            body,
        )
    }

    pub fn cancelled(recipient: &Recipient, reservation: &Reservation, room_name: &str) -> Self {
        Self::to(
            recipient,
            NotificationKind::Cancelled,
            format!("Reservation {} cancelled", reservation.number),
            format!(
                "Hello {}, the reservation {} has been cancelled.",
                recipient.name,
                describe(reservation, room_name)
            ),
        )
    }

    pub fn participant_invited(
        recipient: &Recipient,
        reservation: &Reservation,
        room_name: &str,
    ) -> Self {
        let mut body = format!(
            "Hello {}, you are invited to {}.",
            recipient.name,
            describe(reservation, room_name)
        );
        if let Some(link) = &reservation.meeting_link {
            body.push_str(&format!(" Join online: {}", link));
        }

        Self::to(
            recipient,
            NotificationKind::ParticipantInvited,
            format!("Invitation: {}", reservation.event_name),
            body,
        )
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notification: Notification) -> Result<(), InternalError>;
}

/// Notifier that records each notification as a tracing event.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notification: Notification) -> Result<(), InternalError> {
        tracing::info!(
            recipient = %notification.recipient_email,
            kind = ?notification.kind,
            subject = %notification.subject,
            "{}",
            notification.body
        );
        Ok(())
    }
}

/// Sends each notification, logging failures instead of returning them.
pub async fn dispatch(notifier: &dyn Notifier, notifications: Vec<Notification>) {
    for notification in notifications {
        let recipient = notification.recipient_email.clone();
        if let Err(e) = notifier.send(notification).await {
            tracing::warn!(recipient = %recipient, "{}", e);
        }
    }
}
